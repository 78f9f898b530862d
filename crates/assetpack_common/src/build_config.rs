use std::path::PathBuf;

use assetpack_utils::indexmap::FxIndexMap;
use serde::Serialize;

use crate::{
  BuildEnv, Devtool, FilenameTemplate, FontOutput, Mode, NodeShim, NormalizedResolveOptions, PathTable,
  PerformanceBudget, Plugin, ResolvedChain, RuleSet,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputOptions {
  pub path: PathBuf,
  pub filename: FilenameTemplate,
}

/// The fully assembled configuration handed to the bundling engine.
///
/// Built once by a pure assembly pass and never mutated afterwards; assembling
/// twice from the same inputs yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
  pub env: BuildEnv,
  pub mode: Mode,
  pub devtool: Option<Devtool>,
  pub paths: PathTable,
  pub entry: FxIndexMap<String, PathBuf>,
  pub output: OutputOptions,
  pub css_filename: FilenameTemplate,
  pub fonts: FontOutput,
  pub resolve: NormalizedResolveOptions,
  pub node: FxIndexMap<String, NodeShim>,
  pub performance: PerformanceBudget,
  pub rules: RuleSet,
  pub plugins: Vec<Plugin>,
}

impl BuildConfig {
  pub fn resolve_chain(&self, request: &str) -> Option<ResolvedChain<'_>> {
    self.rules.resolve(request)
  }

  /// Where the script bundle of `entry_name` is written, or `None` for an
  /// unknown entry.
  pub fn output_path(&self, entry_name: &str) -> Option<PathBuf> {
    self.entry.contains_key(entry_name).then(|| {
      self.output.path.join(self.output.filename.render(entry_name, Some("js"), None))
    })
  }

  pub fn css_output_path(&self, entry_name: &str) -> Option<PathBuf> {
    self
      .entry
      .contains_key(entry_name)
      .then(|| self.output.path.join(self.css_filename.render(entry_name, Some("css"), None)))
  }

  /// Where the external source map of `entry_name` is written. `None` when the
  /// build emits no source map files or the entry is unknown.
  pub fn source_map_path(&self, entry_name: &str) -> Option<PathBuf> {
    if !self.entry.contains_key(entry_name) {
      return None;
    }
    self.plugins.iter().find_map(|plugin| match plugin {
      Plugin::SourceMapDevTool { filename } => {
        Some(self.output.path.join(filename.render(entry_name, Some("map"), None)))
      }
      Plugin::MiniCssExtract { .. } => None,
    })
  }

  pub fn emits_source_maps(&self) -> bool {
    self.devtool.is_some() || self.plugins.iter().any(Plugin::emits_source_maps)
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}
