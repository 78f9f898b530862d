use serde::{Deserialize, Serialize};

use crate::{EmittedAsset, SizeHint, SizeHintKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceHints {
  Warning,
  Error,
  Off,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceOptions {
  pub hints: Option<PerformanceHints>,
  pub max_entrypoint_size: Option<u64>,
  pub max_asset_size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceBudget {
  pub hints: PerformanceHints,
  pub max_entrypoint_size: u64,
  pub max_asset_size: u64,
}

impl PerformanceBudget {
  pub const DEFAULT_MAX_SIZE: u64 = 1_512_000;

  /// Hints for every asset over `max_asset_size` and every entrypoint whose
  /// assets add up to more than `max_entrypoint_size`.
  pub fn check(&self, assets: &[EmittedAsset]) -> Vec<SizeHint> {
    if matches!(self.hints, PerformanceHints::Off) {
      return vec![];
    }

    let mut hints = assets
      .iter()
      .filter(|asset| asset.size > self.max_asset_size)
      .map(|asset| SizeHint {
        kind: SizeHintKind::Asset,
        name: asset.filename.clone(),
        size: asset.size,
        limit: self.max_asset_size,
        severity: self.hints,
      })
      .collect::<Vec<_>>();

    let mut entrypoints: Vec<(&str, u64)> = vec![];
    for asset in assets {
      let Some(entry) = asset.entry.as_deref() else { continue };
      match entrypoints.iter_mut().find(|(name, _)| *name == entry) {
        Some((_, size)) => *size += asset.size,
        None => entrypoints.push((entry, asset.size)),
      }
    }

    hints.extend(entrypoints.into_iter().filter(|(_, size)| *size > self.max_entrypoint_size).map(
      |(name, size)| SizeHint {
        kind: SizeHintKind::Entrypoint,
        name: name.to_string(),
        size,
        limit: self.max_entrypoint_size,
        severity: self.hints,
      },
    ));

    hints
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn asset(filename: &str, size: u64, entry: Option<&str>) -> EmittedAsset {
    EmittedAsset { filename: filename.to_string(), size, entry: entry.map(ToString::to_string) }
  }

  #[test]
  fn reports_oversized_assets_and_entrypoints() {
    let budget =
      PerformanceBudget { hints: PerformanceHints::Warning, max_entrypoint_size: 150, max_asset_size: 100 };
    let hints = budget.check(&[
      asset("app.js", 120, Some("app")),
      asset("app.css", 40, Some("app")),
      asset("fonts/abc.woff", 90, None),
    ]);

    assert_eq!(hints.len(), 2);
    assert_eq!(hints[0].kind, SizeHintKind::Asset);
    assert_eq!(hints[0].name, "app.js");
    assert_eq!(hints[1].kind, SizeHintKind::Entrypoint);
    assert_eq!(hints[1].name, "app");
    assert_eq!(hints[1].size, 160);
    assert_eq!(hints[1].severity, PerformanceHints::Warning);
  }

  #[test]
  fn off_reports_nothing() {
    let budget = PerformanceBudget { hints: PerformanceHints::Off, max_entrypoint_size: 1, max_asset_size: 1 };
    assert!(budget.check(&[asset("app.js", 10, Some("app"))]).is_empty());
  }
}
