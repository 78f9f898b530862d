use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Devtool {
  /// Source maps embedded as data URLs in each emitted script.
  #[serde(rename = "inline-source-map")]
  InlineSourceMap,
}
