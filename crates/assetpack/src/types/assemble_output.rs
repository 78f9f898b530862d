use assetpack_common::BuildConfig;

#[derive(Debug)]
pub struct AssembleOutput {
  pub config: BuildConfig,
  /// Findings that do not stop the build but deserve the user's attention.
  pub warnings: Vec<anyhow::Error>,
}
