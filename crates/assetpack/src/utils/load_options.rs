use std::path::Path;

use assetpack_common::BundlerOptions;
use assetpack_error::ConfigError;
use assetpack_utils::path_ext::PathExt;

/// Reads raw options from a TOML file. The file's directory becomes the
/// project root; a `cwd` written in the file is taken relative to it.
pub fn load_options(path: &Path) -> Result<BundlerOptions, ConfigError> {
  let source = std::fs::read_to_string(path)
    .map_err(|err| ConfigError::ReadConfig { path: path.to_path_buf(), reason: err.to_string() })?;

  let mut options: BundlerOptions = toml::from_str(&source)
    .map_err(|err| ConfigError::ParseConfig { path: path.to_path_buf(), reason: err.to_string() })?;

  let config_dir = path.parent().unwrap_or(Path::new(""));
  options.cwd = Some(match options.cwd.take() {
    Some(cwd) => cwd.absolutize_from(config_dir),
    None => config_dir.to_path_buf(),
  });

  tracing::debug!(path = %path.display(), "loaded options");
  Ok(options)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use assetpack_common::BuildEnv;

  use super::*;

  #[test]
  fn root_is_the_config_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assetpack.toml");
    fs::write(&path, "env = \"production\"\ncss_root = \"styles\"\n").unwrap();

    let options = load_options(&path).unwrap();
    assert_eq!(options.cwd.as_deref(), Some(dir.path()));
    assert_eq!(options.env, Some(BuildEnv::Production));
    assert_eq!(options.css_root.as_deref(), Some("styles"));
  }

  #[test]
  fn explicit_cwd_is_relative_to_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config").join("assetpack.toml");
    fs::write(&path, "cwd = \"../frontend\"\n").unwrap();

    let options = load_options(&path).unwrap();
    assert_eq!(options.cwd, Some(dir.path().join("frontend")));
  }

  #[test]
  fn reports_unreadable_and_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(load_options(&missing), Err(ConfigError::ReadConfig { path, .. }) if path == missing));

    let malformed = dir.path().join("assetpack.toml");
    fs::write(&malformed, "env = \"staging\"\n").unwrap();
    assert!(matches!(
      load_options(&malformed),
      Err(ConfigError::ParseConfig { path, .. }) if path == malformed
    ));
  }
}
