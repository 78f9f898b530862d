use std::{fmt::Display, str::FromStr};

use assetpack_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Which kind of build is being assembled. Chosen once per assembly and passed
/// in explicitly; nothing in the library reads the process environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildEnv {
  #[default]
  Development,
  Production,
}

impl BuildEnv {
  /// Interprets a `NODE_ENV`-style value. Unset or empty means development.
  pub fn from_node_env(value: Option<&str>) -> Result<Self, ConfigError> {
    match value.map(str::trim) {
      None | Some("") => Ok(Self::Development),
      Some(value) => value.parse(),
    }
  }

  #[inline]
  pub fn is_development(self) -> bool {
    matches!(self, Self::Development)
  }

  #[inline]
  pub fn emits_source_maps(self) -> bool {
    self.is_development()
  }
}

impl FromStr for BuildEnv {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "development" => Ok(Self::Development),
      "production" => Ok(Self::Production),
      _ => Err(ConfigError::InvalidMode(s.to_string())),
    }
  }
}

impl Display for BuildEnv {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn test_from_node_env() {
  assert_eq!(BuildEnv::from_node_env(None), Ok(BuildEnv::Development));
  assert_eq!(BuildEnv::from_node_env(Some("")), Ok(BuildEnv::Development));
  assert_eq!(BuildEnv::from_node_env(Some("production")), Ok(BuildEnv::Production));
  assert_eq!(BuildEnv::from_node_env(Some(" development ")), Ok(BuildEnv::Development));
  assert_eq!(
    BuildEnv::from_node_env(Some("staging")),
    Err(ConfigError::InvalidMode("staging".to_string()))
  );
}
