use std::path::PathBuf;

use assetpack_utils::indexmap::FxIndexMap;
use serde::Serialize;

use crate::{
  BuildEnv, FilenameTemplate, Mode, NodeShim, NormalizedResolveOptions, PathTable,
  PerformanceBudget,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontOutput {
  pub name: FilenameTemplate,
  /// Directory under the build output the engine writes fonts to.
  pub output_path: String,
  /// URL prefix stylesheets use to reference emitted fonts.
  pub public_path: String,
}

impl FontOutput {
  pub fn output_dir(&self, build_output: &std::path::Path) -> PathBuf {
    build_output.join(&self.output_path)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub env: BuildEnv,
  pub mode: Mode,
  pub paths: PathTable,

  // --- Output
  pub entry_filenames: FilenameTemplate,
  pub css_entry_filenames: FilenameTemplate,
  pub sourcemap_filenames: FilenameTemplate,
  pub fonts: FontOutput,

  // --- Resolve
  pub resolve: NormalizedResolveOptions,
  pub node: FxIndexMap<String, NodeShim>,

  // --- Enhance
  pub babel_presets: Vec<String>,
  pub performance: PerformanceBudget,
}
