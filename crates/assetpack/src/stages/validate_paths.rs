use assetpack_common::NormalizedBundlerOptions;
use assetpack_error::{BuildResult, ConfigError};
use assetpack_fs::FileSystem;

/// Fails when a path the build reads from is missing, so the user sees it here
/// rather than as a failure deep inside the engine. Optional locations only
/// produce warnings.
pub fn validate_paths(
  options: &NormalizedBundlerOptions,
  fs: &impl FileSystem,
) -> BuildResult<Vec<anyhow::Error>> {
  let paths = &options.paths;
  let mut errors = vec![];

  for (name, path) in &paths.entries {
    if !fs.is_file(path) {
      errors.push(ConfigError::MissingEntry { name: name.clone(), path: path.clone() });
    }
  }

  if !fs.is_dir(&paths.css_root) {
    errors.push(ConfigError::MissingCssRoot(paths.css_root.clone()));
  }

  if !errors.is_empty() {
    return Err(errors.into());
  }

  let mut warnings = vec![];
  for dir in options.resolve.modules.iter().filter(|dir| !fs.is_dir(dir)) {
    warnings.push(anyhow::anyhow!("Module directory \"{}\" does not exist.", dir.display()));
  }
  if !fs.is_file(&paths.postcss_config) {
    warnings.push(anyhow::anyhow!(
      "PostCSS config \"{}\" does not exist; style rules will run without it.",
      paths.postcss_config.display()
    ));
  }

  Ok(warnings)
}
