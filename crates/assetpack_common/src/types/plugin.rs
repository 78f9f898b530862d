use serde::Serialize;

use crate::FilenameTemplate;

/// Whole-output post-processing steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin")]
pub enum Plugin {
  /// Pulls first-party styles out of the script bundle into a stylesheet per entry.
  #[serde(rename = "mini-css-extract")]
  MiniCssExtract { filename: FilenameTemplate },
  /// Writes external source map files next to the bundle.
  #[serde(rename = "source-map-dev-tool")]
  SourceMapDevTool { filename: FilenameTemplate },
}

impl Plugin {
  pub fn name(&self) -> &'static str {
    match self {
      Self::MiniCssExtract { .. } => "mini-css-extract",
      Self::SourceMapDevTool { .. } => "source-map-dev-tool",
    }
  }

  pub fn emits_source_maps(&self) -> bool {
    matches!(self, Self::SourceMapDevTool { .. })
  }
}
