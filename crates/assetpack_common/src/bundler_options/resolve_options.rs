use std::path::PathBuf;

use assetpack_utils::indexmap::FxIndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveOptions {
  /// Directories searched for bare module requests, relative to the project root.
  pub modules: Option<Vec<String>>,
  pub alias: Option<FxIndexMap<String, String>>,
  pub extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedResolveOptions {
  pub modules: Vec<PathBuf>,
  pub alias: FxIndexMap<String, String>,
  pub extensions: Vec<String>,
}
