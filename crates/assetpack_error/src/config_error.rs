use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("No project root was given.")]
  MissingRoot,
  #[error("Project root must be an absolute path, got \"{}\".", .0.display())]
  RelativeRoot(PathBuf),
  #[error("Entry \"{name}\" points to \"{}\", which is not a file.", path.display())]
  MissingEntry { name: String, path: PathBuf },
  #[error("Style root \"{}\" is not a directory.", .0.display())]
  MissingCssRoot(PathBuf),
  #[error("Invalid build environment \"{0}\", expected \"development\" or \"production\".")]
  InvalidMode(String),
  #[error("Rule \"{rule}\" has an invalid pattern /{pattern}/: {reason}")]
  InvalidPattern { rule: String, pattern: String, reason: String },
  #[error("Invalid filename template \"{template}\": {reason}")]
  InvalidTemplate { template: String, reason: String },
  #[error("No entry points were configured.")]
  EmptyInput,
  #[error("Entry name \"{0}\" must be a plain file name without path separators.")]
  InvalidEntryName(String),
  #[error("Entry name \"{0}\" is used more than once.")]
  DuplicateEntryName(String),
  #[error("Failed to read config file \"{}\": {reason}", path.display())]
  ReadConfig { path: PathBuf, reason: String },
  #[error("Failed to parse config file \"{}\": {reason}", path.display())]
  ParseConfig { path: PathBuf, reason: String },
}
