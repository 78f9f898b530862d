use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Mode {
  Development,
  Production,
  None,
}

impl From<Mode> for assetpack::Mode {
  fn from(value: Mode) -> Self {
    match value {
      Mode::Development => assetpack::Mode::Development,
      Mode::Production => assetpack::Mode::Production,
      Mode::None => assetpack::Mode::None,
    }
  }
}
