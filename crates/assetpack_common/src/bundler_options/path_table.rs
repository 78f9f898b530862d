use std::path::{Path, PathBuf};

use assetpack_utils::indexmap::FxIndexMap;
use serde::Serialize;

/// Absolute locations of everything the build reads or writes, keyed by role.
/// Every path has already been resolved against `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathTable {
  pub root: PathBuf,
  /// Entry name to entry file, in declaration order.
  pub entries: FxIndexMap<String, PathBuf>,
  pub css_root: PathBuf,
  pub build_output: PathBuf,
  pub postcss_config: PathBuf,
}

impl PathTable {
  pub fn entry(&self, name: &str) -> Option<&Path> {
    self.entries.get(name).map(PathBuf::as_path)
  }
}
