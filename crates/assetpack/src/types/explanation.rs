use std::fmt::Display;

/// How the configuration treats one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
  pub request: String,
  /// The file the request refers to; `None` when it is shimmed to an empty module.
  pub resource: Option<String>,
  pub rules: Vec<String>,
  /// Loader names in the order they transform the file.
  pub loaders: Vec<String>,
}

impl Explanation {
  pub fn is_unhandled(&self) -> bool {
    self.rules.is_empty()
  }
}

impl Display for Explanation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.resource {
      None => write!(f, "{} -> (empty module)", self.request),
      Some(_) if self.is_unhandled() => write!(f, "{} -> (no matching rule)", self.request),
      Some(_) => write!(f, "{} -> [{}] {}", self.request, self.rules.join(", "), self.loaders.join(" -> ")),
    }
  }
}
