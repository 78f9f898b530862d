mod config_error;

use std::ops::{Deref, DerefMut};

pub use crate::config_error::ConfigError;

/// All errors found by one assembly pass. Configuration is all-or-nothing, so
/// callers see every problem at once instead of fixing them one by one.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn config_errors(&self) -> impl Iterator<Item = &ConfigError> {
    self.0.iter().filter_map(|error| error.downcast_ref::<ConfigError>())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<ConfigError> for BuildError {
  fn from(error: ConfigError) -> Self {
    Self(vec![error.into()])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<Vec<ConfigError>> for BuildError {
  fn from(errors: Vec<ConfigError>) -> Self {
    Self(errors.into_iter().map(Into::into).collect())
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn collects_config_errors_from_mixed_sources() {
    let error = BuildError::from(vec![
      anyhow::Error::from(ConfigError::MissingCssRoot(PathBuf::from("/project/css"))),
      anyhow::anyhow!("unrelated"),
      anyhow::Error::from(ConfigError::InvalidMode("staging".to_string())),
    ]);

    assert_eq!(error.len(), 3);
    assert_eq!(
      error.config_errors().cloned().collect::<Vec<_>>(),
      vec![
        ConfigError::MissingCssRoot(PathBuf::from("/project/css")),
        ConfigError::InvalidMode("staging".to_string()),
      ]
    );
  }
}
