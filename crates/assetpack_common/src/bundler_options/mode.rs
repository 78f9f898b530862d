use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::BuildEnv;

/// Optimization mode handed to the bundling engine. Independent of `BuildEnv`,
/// which only decides source maps and size hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Development,
  Production,
  None,
}

impl Mode {
  pub fn agrees_with(self, env: BuildEnv) -> bool {
    matches!(
      (self, env),
      (Self::Development, BuildEnv::Development) | (Self::Production, BuildEnv::Production)
    )
  }
}

impl From<BuildEnv> for Mode {
  fn from(env: BuildEnv) -> Self {
    match env {
      BuildEnv::Development => Self::Development,
      BuildEnv::Production => Self::Production,
    }
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
      Self::None => write!(f, "none"),
    }
  }
}
