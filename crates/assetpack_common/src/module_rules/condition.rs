use std::path::{Path, PathBuf};

use assetpack_utils::path_ext::PathExt;
use regex::Regex;
use serde::{Serialize, Serializer};

/// A compiled regular expression that remembers its source, so rules compare
/// and serialize by what the user wrote.
#[derive(Debug, Clone)]
pub struct RulePattern {
  source: String,
  regex: Regex,
}

impl RulePattern {
  pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
    let source = source.into();
    let regex = Regex::new(&source)?;
    Ok(Self { source, regex })
  }

  pub fn source(&self) -> &str {
    &self.source
  }

  pub fn is_match(&self, haystack: &str) -> bool {
    self.regex.is_match(haystack)
  }
}

impl PartialEq for RulePattern {
  fn eq(&self, other: &Self) -> bool {
    self.source == other.source
  }
}

impl Eq for RulePattern {}

impl Serialize for RulePattern {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("/{}/", self.source))
  }
}

/// Predicate over the path part of a resource, used by `include` and `exclude`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Condition {
  /// The resource is this path or lives below it.
  Path(PathBuf),
  /// The forward-slash form of the resource path contains a match.
  Pattern(RulePattern),
}

impl Condition {
  pub fn matches(&self, resource_path: &Path) -> bool {
    match self {
      Self::Path(prefix) => resource_path.starts_with(prefix),
      Self::Pattern(pattern) => pattern.is_match(&resource_path.slash_lossy()),
    }
  }
}
