use std::path::{Path, PathBuf};

use assetpack_common::{
  BuildEnv, BundlerOptions, FilenameTemplate, FontOutput, InputItem, Mode, NodeShim,
  NormalizedBundlerOptions, NormalizedResolveOptions, PathTable, PerformanceBudget,
  PerformanceHints, Placeholder,
};
use assetpack_error::{BuildResult, ConfigError};
use assetpack_utils::{indexmap::FxIndexMap, path_ext::PathExt, sanitize_file_name::sanitize_file_name};

#[derive(Debug)]
pub struct NormalizeOptionsReturn {
  pub options: NormalizedBundlerOptions,
  pub warnings: Vec<anyhow::Error>,
}

#[allow(clippy::too_many_lines)]
pub fn normalize_options(raw_options: BundlerOptions) -> BuildResult<NormalizeOptionsReturn> {
  let mut errors: Vec<ConfigError> = vec![];
  let mut warnings: Vec<anyhow::Error> = vec![];

  // Paths are only ever resolved against the configuration's own directory.
  let root = match raw_options.cwd {
    Some(cwd) if cwd.is_absolute() => cwd,
    Some(cwd) => return Err(ConfigError::RelativeRoot(cwd).into()),
    None => return Err(ConfigError::MissingRoot.into()),
  };
  let resolve_path = |path: &str| Path::new(path).absolutize_from(&root);

  let env = raw_options.env.unwrap_or_default();
  let mode = match raw_options.mode {
    Some(mode) => {
      if !mode.agrees_with(env) {
        warnings.push(anyhow::anyhow!(
          "Engine mode \"{mode}\" disagrees with build environment \"{env}\"; source maps and size hints follow the environment."
        ));
      }
      mode
    }
    None => Mode::from(env),
  };

  let input = raw_options.input.unwrap_or_else(|| vec![InputItem::from(("app", "src/app.js"))]);
  if input.is_empty() {
    errors.push(ConfigError::EmptyInput);
  }
  let mut entries = FxIndexMap::default();
  for item in input {
    let path = resolve_path(item.import.as_str());
    let name = item
      .name
      .unwrap_or_else(|| sanitize_file_name(&Path::new(&item.import).representative_file_name()));
    // Entry names end up in output file names and must stay inside the build output.
    if !is_plain_entry_name(&name) {
      errors.push(ConfigError::InvalidEntryName(name));
      continue;
    }
    if entries.insert(name.clone(), path).is_some() {
      errors.push(ConfigError::DuplicateEntryName(name));
    }
  }

  let paths = PathTable {
    css_root: resolve_path(raw_options.css_root.as_deref().unwrap_or("css")),
    build_output: resolve_path(raw_options.dir.as_deref().unwrap_or("../assets/server/public/build")),
    postcss_config: resolve_path(raw_options.postcss_config.as_deref().unwrap_or("postcss.config.js")),
    entries,
    root: root.clone(),
  };

  let template = |raw: Option<String>, default: &str, allowed: &[Placeholder]| {
    FilenameTemplate::parse(raw.unwrap_or_else(|| default.to_string()), allowed)
  };
  let entry_filenames = template(raw_options.entry_filenames, "[name].js", &[Placeholder::Name]);
  let css_entry_filenames =
    template(raw_options.css_entry_filenames, "[name].css", &[Placeholder::Name]);
  let sourcemap_filenames =
    template(raw_options.sourcemap_filenames, "[name].map", &[Placeholder::Name]);
  let font_filenames = template(
    raw_options.font_filenames,
    "[hash].[ext]",
    &[Placeholder::Name, Placeholder::Hash, Placeholder::Ext],
  );

  let raw_resolve = raw_options.resolve.unwrap_or_default();
  let resolve = NormalizedResolveOptions {
    modules: raw_resolve
      .modules
      .unwrap_or_else(|| vec!["src".to_string(), "node_modules".to_string()])
      .iter()
      .map(|dir| resolve_path(dir.as_str()))
      .collect::<Vec<PathBuf>>(),
    alias: raw_resolve.alias.unwrap_or_else(|| {
      FxIndexMap::from_iter([("vue".to_string(), "vue/dist/vue.js".to_string())])
    }),
    extensions: raw_resolve.extensions.unwrap_or_else(|| {
      [".wasm", ".mjs", ".js", ".json"].into_iter().map(ToString::to_string).collect()
    }),
  };

  let raw_performance = raw_options.performance.unwrap_or_default();
  let performance = PerformanceBudget {
    hints: raw_performance.hints.unwrap_or(match env {
      BuildEnv::Development => PerformanceHints::Off,
      BuildEnv::Production => PerformanceHints::Warning,
    }),
    max_entrypoint_size: raw_performance
      .max_entrypoint_size
      .unwrap_or(PerformanceBudget::DEFAULT_MAX_SIZE),
    max_asset_size: raw_performance.max_asset_size.unwrap_or(PerformanceBudget::DEFAULT_MAX_SIZE),
  };

  let (entry_filenames, css_entry_filenames, sourcemap_filenames, font_filenames) =
    match (entry_filenames, css_entry_filenames, sourcemap_filenames, font_filenames) {
      (Ok(entry), Ok(css), Ok(sourcemap), Ok(font)) if errors.is_empty() => {
        (entry, css, sourcemap, font)
      }
      (entry, css, sourcemap, font) => {
        errors.extend([entry.err(), css.err(), sourcemap.err(), font.err()].into_iter().flatten());
        return Err(errors.into());
      }
    };

  let normalized = NormalizedBundlerOptions {
    env,
    mode,
    paths,
    entry_filenames,
    css_entry_filenames,
    sourcemap_filenames,
    fonts: FontOutput {
      name: font_filenames,
      output_path: raw_options.font_output_path.unwrap_or_else(|| "fonts".to_string()),
      public_path: raw_options
        .font_public_path
        .unwrap_or_else(|| "/assets/build/fonts".to_string()),
    },
    resolve,
    node: raw_options
      .node
      .unwrap_or_else(|| FxIndexMap::from_iter([("fs".to_string(), NodeShim::Empty)])),
    babel_presets: raw_options
      .babel_presets
      .unwrap_or_else(|| vec!["@babel/preset-env".to_string()]),
    performance,
  };

  Ok(NormalizeOptionsReturn { options: normalized, warnings })
}

fn is_plain_entry_name(name: &str) -> bool {
  !name.is_empty() && !matches!(name, "." | "..") && !name.contains(['/', '\\'])
}
