use std::fmt::Display;

use crate::PerformanceHints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeHintKind {
  Asset,
  Entrypoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeHint {
  pub kind: SizeHintKind,
  pub name: String,
  pub size: u64,
  pub limit: u64,
  pub severity: PerformanceHints,
}

impl SizeHint {
  pub fn is_error(&self) -> bool {
    matches!(self.severity, PerformanceHints::Error)
  }
}

impl Display for SizeHint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let kind = match self.kind {
      SizeHintKind::Asset => "asset",
      SizeHintKind::Entrypoint => "entrypoint",
    };
    write!(f, "{kind} \"{}\" is {} bytes, exceeding the limit of {} bytes", self.name, self.size, self.limit)
  }
}
