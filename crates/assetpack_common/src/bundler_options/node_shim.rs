use serde::{Deserialize, Serialize};

/// What the engine should substitute for a Node.js core module requested from
/// browser code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShim {
  /// Resolve to an empty module.
  Empty,
  /// Leave the request to normal resolution.
  Native,
}
