pub mod build_env;
pub mod filename_template;
pub mod input_item;
pub mod mode;
pub mod node_shim;
pub mod normalized_bundler_options;
pub mod path_table;
pub mod performance;
pub mod resolve_options;

use std::path::PathBuf;

use assetpack_utils::indexmap::FxIndexMap;
use serde::Deserialize;

use crate::{BuildEnv, InputItem, Mode, NodeShim, PerformanceOptions, ResolveOptions};

/// Raw options as written by the user. Every field is optional; defaults are
/// filled in by `normalize_options`. Relative paths are relative to `cwd`,
/// which is the directory holding the configuration file.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundlerOptions {
  // --- Input
  pub cwd: Option<PathBuf>,
  pub env: Option<BuildEnv>,
  pub mode: Option<Mode>,
  pub input: Option<Vec<InputItem>>,
  pub css_root: Option<String>,
  pub postcss_config: Option<String>,

  // --- Output
  pub dir: Option<String>,
  pub entry_filenames: Option<String>,
  pub css_entry_filenames: Option<String>,
  pub sourcemap_filenames: Option<String>,
  pub font_filenames: Option<String>,
  pub font_output_path: Option<String>,
  pub font_public_path: Option<String>,

  // --- Resolve
  pub resolve: Option<ResolveOptions>,
  pub node: Option<FxIndexMap<String, NodeShim>>,

  // --- Enhance
  pub babel_presets: Option<Vec<String>>,
  pub performance: Option<PerformanceOptions>,
}
