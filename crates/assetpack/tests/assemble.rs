use std::path::{Path, PathBuf};

use assetpack::{
  assemble, check_output_sizes, BuildEnv, BundlerOptions, ConfigError, Devtool, LoaderStage,
  MemoryFileSystem, Mode, PerformanceHints, Plugin, SizeHintKind,
};

const ROOT: &str = "/srv/frontend";

fn project_fs() -> MemoryFileSystem {
  let mut fs = MemoryFileSystem::new();
  fs.add_file("/srv/frontend/src/app.js", 120)
    .add_file("/srv/frontend/postcss.config.js", 40)
    .add_dir("/srv/frontend/css")
    .add_dir("/srv/frontend/node_modules");
  fs
}

fn options(env: BuildEnv) -> BundlerOptions {
  BundlerOptions { cwd: Some(PathBuf::from(ROOT)), env: Some(env), ..Default::default() }
}

fn loader_names(config: &assetpack::BuildConfig, request: &str) -> Vec<&'static str> {
  config
    .resolve_chain(request)
    .map(|chain| chain.loaders().map(|loader| loader.name()).collect())
    .unwrap_or_default()
}

#[test]
fn development_emits_source_maps() {
  let output = assemble(options(BuildEnv::Development), project_fs()).unwrap();
  let config = output.config;

  assert!(output.warnings.is_empty());
  assert_eq!(config.devtool, Some(Devtool::InlineSourceMap));
  assert!(config.plugins.iter().any(|plugin| matches!(plugin, Plugin::SourceMapDevTool { .. })));
  assert_eq!(config.source_map_path("app"), Some(PathBuf::from("/srv/assets/server/public/build/app.map")));
  assert!(config
    .resolve_chain("/srv/frontend/css/app.scss")
    .unwrap()
    .loaders()
    .filter(|loader| matches!(loader.stage(), LoaderStage::Interpret | LoaderStage::Prefix))
    .all(|loader| loader.source_map()));
}

#[test]
fn production_omits_source_maps() {
  let config = assemble(options(BuildEnv::Production), project_fs()).unwrap().config;

  assert_eq!(config.devtool, None);
  assert!(!config.plugins.iter().any(Plugin::emits_source_maps));
  assert_eq!(config.plugins.len(), 1);
  assert_eq!(config.plugins[0].name(), "mini-css-extract");
  assert!(!config.emits_source_maps());
  assert_eq!(config.source_map_path("app"), None);
  assert!(config.rules.rules().iter().flat_map(|rule| &rule.uses).all(|loader| !loader.source_map()));
  assert_eq!(config.performance.hints, PerformanceHints::Warning);
}

#[test]
fn first_party_styles_are_preprocessed_exactly_once() {
  let config = assemble(options(BuildEnv::Development), project_fs()).unwrap().config;

  for request in [
    "/srv/frontend/css/app.css",
    "/srv/frontend/css/components/button.scss",
    "/srv/frontend/css/legacy/grid.sass",
  ] {
    let chain = config.resolve_chain(request).unwrap();
    assert_eq!(chain.rule_names(), vec!["styles"], "{request}");
    assert_eq!(chain.preprocessor_count(), 1, "{request}");
    assert!(chain.loaders().any(|loader| loader.name() == "postcss-loader"));
    assert!(chain.loaders().any(|loader| loader.name() == "mini-css-extract-loader"));
  }
}

#[test]
fn dependency_styles_are_never_preprocessed() {
  let config = assemble(options(BuildEnv::Development), project_fs()).unwrap().config;

  for request in [
    "/srv/frontend/node_modules/normalize.css/normalize.css",
    "/srv/frontend/css/node_modules/vendored/theme.css",
    "/srv/frontend/node_modules/bulma/sass/base.sass",
    "/srv/frontend/node_modules/bootstrap/scss/bootstrap.scss",
  ] {
    let names = loader_names(&config, request);
    assert!(!names.contains(&"sass-loader"), "{request}: {names:?}");
  }

  assert_eq!(
    loader_names(&config, "/srv/frontend/node_modules/normalize.css/normalize.css"),
    vec!["vue-style-loader", "style-loader", "css-loader", "postcss-loader", "resolve-url-loader"]
  );
}

#[test]
fn dot_segments_cannot_cross_the_style_partition() {
  let config = assemble(options(BuildEnv::Development), project_fs()).unwrap().config;

  let chain = config.resolve_chain("/srv/frontend/css/../src/components/x.scss").unwrap();
  assert_eq!(chain.rule_names(), vec!["component-styles"]);
  assert!(config.resolve_chain("/srv/frontend/css/../src/components/x.css").is_none());
  assert!(!loader_names(&config, "/srv/frontend/css/../node_modules/bulma/base.scss")
    .contains(&"sass-loader"));
}

#[test]
fn component_sass_outside_the_style_root_is_injected() {
  let config = assemble(options(BuildEnv::Development), project_fs()).unwrap().config;
  let chain = config.resolve_chain("/srv/frontend/src/components/Photo.scss").unwrap();
  assert_eq!(chain.rule_names(), vec!["component-styles"]);
  assert_eq!(chain.preprocessor_count(), 1);
  // Plain css outside both the style root and dependencies has no rule.
  assert!(config.resolve_chain("/srv/frontend/src/components/Photo.css").is_none());
}

#[test]
fn scripts_are_linted_only_at_the_entry() {
  let config = assemble(options(BuildEnv::Development), project_fs()).unwrap().config;

  let entry = config.resolve_chain("/srv/frontend/src/app.js").unwrap();
  assert_eq!(entry.rule_names(), vec!["scripts", "lint"]);
  assert_eq!(entry.application_order()[0].name(), "eslint-loader");

  assert_eq!(loader_names(&config, "/srv/frontend/src/photos.js"), vec!["babel-loader"]);
  assert!(config.resolve_chain("/srv/frontend/node_modules/vue/dist/vue.js").is_none());
  assert_eq!(loader_names(&config, "/srv/frontend/src/Gallery.vue"), vec!["vue-loader"]);
}

#[test]
fn assets_fonts_and_svg() {
  let config = assemble(options(BuildEnv::Production), project_fs()).unwrap().config;

  assert_eq!(loader_names(&config, "/srv/frontend/img/logo.png"), vec!["url-loader"]);
  assert_eq!(loader_names(&config, "/srv/frontend/fonts/icons.woff2?v=4.7.0"), vec!["file-loader"]);
  assert_eq!(loader_names(&config, "/srv/frontend/img/icon.svg"), vec!["svg-url-loader"]);
}

#[test]
fn app_entry_output_path_is_fixed() {
  let config = assemble(options(BuildEnv::Production), project_fs()).unwrap().config;
  let build = Path::new("/srv/assets/server/public/build");

  assert_eq!(config.output.path, build);
  assert_eq!(config.output_path("app"), Some(build.join("app.js")));
  assert_eq!(config.css_output_path("app"), Some(build.join("app.css")));
  assert_eq!(config.output_path("admin"), None);
}

#[test]
fn assembly_is_idempotent() {
  for env in [BuildEnv::Development, BuildEnv::Production] {
    let first = assemble(options(env), project_fs()).unwrap().config;
    let second = assemble(options(env), project_fs()).unwrap().config;
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
  }
}

#[test]
fn missing_required_paths_fail_together() {
  let mut fs = MemoryFileSystem::new();
  fs.add_dir("/srv/frontend/src");

  let err = assemble(options(BuildEnv::Development), fs).unwrap_err();
  assert_eq!(
    err.config_errors().cloned().collect::<Vec<_>>(),
    vec![
      ConfigError::MissingEntry {
        name: "app".to_string(),
        path: PathBuf::from("/srv/frontend/src/app.js"),
      },
      ConfigError::MissingCssRoot(PathBuf::from("/srv/frontend/css")),
    ]
  );
}

#[test]
fn optional_paths_only_warn() {
  let mut fs = MemoryFileSystem::new();
  fs.add_file("/srv/frontend/src/app.js", 1).add_dir("/srv/frontend/css");

  let output = assemble(options(BuildEnv::Development), fs).unwrap();
  let warnings = output.warnings.iter().map(ToString::to_string).collect::<Vec<_>>();
  assert_eq!(warnings.len(), 2, "{warnings:?}");
  assert!(warnings[0].contains("node_modules"));
  assert!(warnings[1].contains("postcss.config.js"));
}

#[test]
fn engine_mode_is_kept_but_flagged() {
  let raw = BundlerOptions { mode: Some(Mode::Production), ..options(BuildEnv::Development) };
  let output = assemble(raw, project_fs()).unwrap();

  assert_eq!(output.config.mode, Mode::Production);
  assert_eq!(output.config.devtool, Some(Devtool::InlineSourceMap));
  assert_eq!(output.warnings.len(), 1);
}

#[test]
fn serializes_for_the_engine() {
  let config = assemble(options(BuildEnv::Development), project_fs()).unwrap().config;
  let json: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

  assert_eq!(json["mode"], "development");
  assert_eq!(json["devtool"], "inline-source-map");
  assert_eq!(json["output"]["filename"], "[name].js");
  assert_eq!(json["entry"]["app"], "/srv/frontend/src/app.js");
  assert_eq!(json["resolve"]["alias"]["vue"], "vue/dist/vue.js");
  assert_eq!(json["node"]["fs"], "empty");
  assert_eq!(json["rules"][0]["name"], "lint");
  assert_eq!(json["rules"][0]["enforce"], "pre");
  assert_eq!(json["rules"][2]["exclude"][0], "/node_modules/");
  assert_eq!(json["plugins"][1]["plugin"], "source-map-dev-tool");
  assert_eq!(json["plugins"][1]["filename"], "[name].map");
}

#[test]
fn checks_emitted_sizes_against_the_budget() {
  let raw = BundlerOptions {
    performance: Some(assetpack::PerformanceOptions {
      max_asset_size: Some(1_000),
      max_entrypoint_size: Some(1_500),
      ..Default::default()
    }),
    ..options(BuildEnv::Production)
  };
  let config = assemble(raw, project_fs()).unwrap().config;

  let mut fs = MemoryFileSystem::new();
  fs.add_file("/srv/assets/server/public/build/app.js", 1_200)
    .add_file("/srv/assets/server/public/build/app.css", 600)
    .add_file("/srv/assets/server/public/build/fonts/0f3a.woff2", 2_000);

  let hints = check_output_sizes(&config, &fs).unwrap();
  let summary =
    hints.iter().map(|hint| (hint.kind, hint.name.as_str(), hint.size)).collect::<Vec<_>>();
  assert_eq!(
    summary,
    vec![
      (SizeHintKind::Asset, "app.js", 1_200),
      (SizeHintKind::Asset, "fonts/0f3a.woff2", 2_000),
      (SizeHintKind::Entrypoint, "app", 1_800),
    ]
  );
}
