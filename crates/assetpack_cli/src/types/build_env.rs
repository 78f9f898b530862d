use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum BuildEnv {
  Development,
  Production,
}

impl From<BuildEnv> for assetpack::BuildEnv {
  fn from(value: BuildEnv) -> Self {
    match value {
      BuildEnv::Development => assetpack::BuildEnv::Development,
      BuildEnv::Production => assetpack::BuildEnv::Production,
    }
  }
}
