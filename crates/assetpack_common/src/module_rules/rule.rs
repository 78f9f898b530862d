use std::path::Path;

use assetpack_utils::path_ext::PathExt;
use serde::Serialize;

use crate::{Condition, Loader, RulePattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
  Pre,
  Post,
}

/// One entry of the module rule list.
///
/// `test` is matched against the whole request, query included, so patterns
/// like `\.woff(\?v=\d+)?$` work. `include` and `exclude` only see the path
/// part, with `.` and `..` collapsed first. An empty `include` places no
/// restriction; any `exclude` hit rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
  pub name: String,
  pub test: RulePattern,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub include: Vec<Condition>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub exclude: Vec<Condition>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enforce: Option<Enforce>,
  /// Loaders in declaration order; the engine applies them last to first.
  #[serde(rename = "use")]
  pub uses: Vec<Loader>,
}

impl Rule {
  pub fn matches(&self, request: &str) -> bool {
    let resource_path = Path::new(split_query(request).0).normalized();
    self.test.is_match(request)
      && (self.include.is_empty() || self.include.iter().any(|c| c.matches(&resource_path)))
      && !self.exclude.iter().any(|c| c.matches(&resource_path))
  }
}

/// Splits `path?query` at the first `?`.
pub fn split_query(request: &str) -> (&str, Option<&str>) {
  match request.split_once('?') {
    Some((path, query)) => (path, Some(query)),
    None => (request, None),
  }
}
