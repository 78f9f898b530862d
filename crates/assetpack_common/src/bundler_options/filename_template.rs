use std::fmt::Display;

use assetpack_error::ConfigError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
  Name,
  Hash,
  Ext,
}

impl Placeholder {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Name => "name",
      Self::Hash => "hash",
      Self::Ext => "ext",
    }
  }

  fn from_key(key: &str) -> Option<Self> {
    match key {
      "name" => Some(Self::Name),
      "hash" => Some(Self::Hash),
      "ext" => Some(Self::Ext),
      _ => None,
    }
  }
}

/// An output file name pattern such as `[name].js` or `[hash].[ext]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  /// Parses `template`, accepting only the placeholders listed in `allowed`.
  pub fn parse(template: impl Into<String>, allowed: &[Placeholder]) -> Result<Self, ConfigError> {
    let template = template.into();
    let invalid = |reason: String| ConfigError::InvalidTemplate {
      template: template.clone(),
      reason,
    };

    if template.is_empty() {
      return Err(invalid("template is empty".to_string()));
    }

    let mut rest = template.as_str();
    while let Some(start) = rest.find('[') {
      let Some(len) = rest[start..].find(']') else {
        return Err(invalid("unclosed `[`".to_string()));
      };
      let key = &rest[start + 1..start + len];
      match Placeholder::from_key(key) {
        Some(placeholder) if allowed.contains(&placeholder) => {}
        Some(placeholder) => {
          return Err(invalid(format!("`[{}]` is not supported here", placeholder.as_str())));
        }
        None => return Err(invalid(format!("unknown placeholder `[{key}]`"))),
      }
      rest = &rest[start + len + 1..];
    }

    if rest.contains(']') || template.ends_with('/') {
      return Err(invalid("template does not name a file".to_string()));
    }

    Ok(Self { template })
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn has(&self, placeholder: Placeholder) -> bool {
    self.template.contains(&format!("[{}]", placeholder.as_str()))
  }

  /// Substitutes placeholders. Placeholders without a value are left verbatim.
  pub fn render(&self, name: &str, ext: Option<&str>, hash: Option<&str>) -> String {
    let mut rendered = self.template.replace("[name]", name);
    if let Some(ext) = ext {
      rendered = rendered.replace("[ext]", ext);
    }
    if let Some(hash) = hash {
      rendered = rendered.replace("[hash]", hash);
    }
    rendered
  }
}

impl Display for FilenameTemplate {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.template)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_entry_and_font_templates() {
    let entry = FilenameTemplate::parse("[name].js", &[Placeholder::Name]).unwrap();
    assert_eq!(entry.render("app", None, None), "app.js");

    let font =
      FilenameTemplate::parse("[hash].[ext]", &[Placeholder::Name, Placeholder::Hash, Placeholder::Ext])
        .unwrap();
    assert!(font.has(Placeholder::Hash));
    assert_eq!(font.render("roboto", Some("woff2"), Some("0f3a")), "0f3a.woff2");
  }

  #[test]
  fn rejects_disallowed_and_unknown_placeholders() {
    let err = FilenameTemplate::parse("[name].[hash].js", &[Placeholder::Name]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTemplate { ref reason, .. } if reason.contains("[hash]")));

    let err = FilenameTemplate::parse("[chunkhash].js", &[Placeholder::Name]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTemplate { ref reason, .. } if reason.contains("unknown")));

    assert!(FilenameTemplate::parse("[name.js", &[Placeholder::Name]).is_err());
    assert!(FilenameTemplate::parse("", &[Placeholder::Name]).is_err());
    assert!(FilenameTemplate::parse("name].js", &[Placeholder::Name]).is_err());
  }
}
