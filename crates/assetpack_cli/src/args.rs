use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::{build_env::BuildEnv, mode::Mode};

#[derive(Args)]
pub struct InputArgs {
  /// Config file; its directory becomes the project root.
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  /// Project root used when no config file is given.
  #[clap(long)]
  pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct EnvArgs {
  /// Overrides `NODE_ENV` and the config file.
  #[clap(long, short = 'e')]
  pub env: Option<BuildEnv>,

  #[clap(long)]
  pub mode: Option<Mode>,
}

#[derive(Subcommand)]
pub enum Command {
  /// Print the assembled configuration as JSON.
  Print,
  /// Show the rules and loaders applied to each request.
  Explain {
    #[clap(required = true)]
    requests: Vec<String>,
  },
  /// Check files in the build output against the performance budget.
  Check,
}
