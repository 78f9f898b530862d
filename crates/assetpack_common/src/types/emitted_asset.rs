/// A file found in the build output, with the entry it belongs to if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
  pub filename: String,
  pub size: u64,
  pub entry: Option<String>,
}
