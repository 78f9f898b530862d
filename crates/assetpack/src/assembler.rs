use assetpack_common::{BuildConfig, BundlerOptions, Devtool, OutputOptions};
use assetpack_error::BuildResult;
use assetpack_fs::{FileSystem, OsFileSystem};

use crate::{
  stages::{
    create_module_rules::create_module_rules, create_plugins::create_plugins,
    validate_paths::validate_paths,
  },
  types::assemble_output::AssembleOutput,
  utils::normalize_options::{normalize_options, NormalizeOptionsReturn},
};

pub struct ConfigAssembler<F: FileSystem = OsFileSystem> {
  pub(crate) fs: F,
  pub(crate) options: BundlerOptions,
}

impl<F: FileSystem> ConfigAssembler<F> {
  pub fn new(options: BundlerOptions, fs: F) -> Self {
    Self { fs, options }
  }

  /// One deterministic pass from raw options to a finished configuration.
  /// Every configuration error found aborts the pass before anything is built.
  pub fn assemble(&self) -> BuildResult<AssembleOutput> {
    let NormalizeOptionsReturn { options, mut warnings } = normalize_options(self.options.clone())?;

    warnings.extend(validate_paths(&options, &self.fs)?);

    let rules = create_module_rules(&options)?;
    let plugins = create_plugins(&options);

    for warning in &warnings {
      tracing::warn!("{warning}");
    }

    let config = BuildConfig {
      env: options.env,
      mode: options.mode,
      devtool: options.env.emits_source_maps().then_some(Devtool::InlineSourceMap),
      entry: options.paths.entries.clone(),
      output: OutputOptions {
        path: options.paths.build_output.clone(),
        filename: options.entry_filenames,
      },
      paths: options.paths,
      css_filename: options.css_entry_filenames,
      fonts: options.fonts,
      resolve: options.resolve,
      node: options.node,
      performance: options.performance,
      rules,
      plugins,
    };

    tracing::info!(
      env = %config.env,
      mode = %config.mode,
      entries = config.entry.len(),
      rules = config.rules.rules().len(),
      plugins = config.plugins.len(),
      "assembled build configuration"
    );

    Ok(AssembleOutput { config, warnings })
  }
}
