mod args;
mod types;

use std::{env::VarError, path::PathBuf, process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{Command, EnvArgs, InputArgs};
use clap::Parser;
use sugar_path::SugarPath;
use tracing_subscriber::EnvFilter;

use assetpack::{
  assemble, check_output_sizes, explain_request, load_options, BuildConfig, BuildEnv,
  BundlerOptions, ConfigError, OsFileSystem, Resolver,
};

const CONFIG_FILE: &str = "assetpack.toml";

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  env: EnvArgs,

  #[command(subcommand)]
  command: Option<Command>,
}

/// Raw options from the config file, or defaults rooted at `--root`. The
/// environment flag is decided here, the only place that reads `NODE_ENV`.
fn read_options(input: InputArgs, env: EnvArgs) -> Result<BundlerOptions, ConfigError> {
  let root = input.root.unwrap_or_else(|| PathBuf::from(".")).absolutize();
  let config_file = input.config.map(|path| path.absolutize()).or_else(|| {
    let default = root.join(CONFIG_FILE);
    default.is_file().then_some(default)
  });

  let mut options = match config_file {
    Some(path) => load_options(&path)?,
    None => BundlerOptions { cwd: Some(root), ..Default::default() },
  };

  if let Some(cli_env) = env.env {
    options.env = Some(cli_env.into());
  } else if let Some(node_env) = node_env(std::env::var("NODE_ENV"))? {
    options.env = Some(node_env);
  }

  if let Some(mode) = env.mode {
    options.mode = Some(mode.into());
  }

  Ok(options)
}

/// `None` when `NODE_ENV` is unset, so the config file keeps its say. A value
/// that is not valid unicode is rejected rather than read as unset.
fn node_env(value: Result<String, VarError>) -> Result<Option<BuildEnv>, ConfigError> {
  match value {
    Ok(value) => BuildEnv::from_node_env(Some(&value)).map(Some),
    Err(VarError::NotPresent) => Ok(None),
    Err(VarError::NotUnicode(value)) => {
      Err(ConfigError::InvalidMode(value.to_string_lossy().into_owned()))
    }
  }
}

fn print_summary(config: &BuildConfig) {
  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  println!("{} {} {}", dim.paint("env:"), config.env, dim.paint(format!("(mode: {})", config.mode)));

  let names = config.entry.keys().collect::<Vec<_>>();
  let left = names.iter().map(|name| name.len()).max().unwrap_or_default();
  for name in names {
    let Some(output) = config.output_path(name) else { continue };
    println!(
      "{}{:left$} {} {}",
      color.paint(name.as_str()),
      "",
      dim.paint("→"),
      output.display(),
      left = left - name.len()
    );
  }

  let rules = config.rules.rules().iter().map(|rule| rule.name.as_str()).collect::<Vec<_>>();
  println!("{} {}", dim.paint("rules:"), rules.join(", "));
  let plugins = config.plugins.iter().map(|plugin| plugin.name()).collect::<Vec<_>>();
  println!("{} {}", dim.paint("plugins:"), plugins.join(", "));
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  let args = Commands::parse();
  let start = Instant::now();

  let output = match read_options(args.input, args.env) {
    Ok(options) => assemble(options, OsFileSystem),
    Err(error) => Err(error.into()),
  };

  let config = match output {
    Ok(output) => {
      for warning in output.warnings {
        eprintln!("{} {}", Colour::Yellow.paint("Warning:"), warning);
      }
      output.config
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
      }
      return ExitCode::FAILURE;
    }
  };

  let code = match args.command {
    None => {
      print_summary(&config);
      ExitCode::SUCCESS
    }
    Some(Command::Print) => match config.to_json() {
      Ok(json) => {
        println!("{json}");
        ExitCode::SUCCESS
      }
      Err(error) => {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
        ExitCode::FAILURE
      }
    },
    Some(Command::Explain { requests }) => {
      let resolver = Resolver::from_config(&config);
      let mut code = ExitCode::SUCCESS;
      for request in requests {
        match explain_request(&config, &resolver, &request) {
          Ok(explanation) if explanation.is_unhandled() => {
            println!("{}", Colour::White.dimmed().paint(explanation.to_string()));
          }
          Ok(explanation) => println!("{explanation}"),
          Err(error) => {
            eprintln!("{} {request}: {error}", Colour::Red.paint("Error:"));
            code = ExitCode::FAILURE;
          }
        }
      }
      code
    }
    Some(Command::Check) => match check_output_sizes(&config, &OsFileSystem) {
      Ok(hints) => {
        for hint in &hints {
          let label = if hint.is_error() { Colour::Red.paint("Error:") } else { Colour::Yellow.paint("Warning:") };
          println!("{label} {hint}");
        }
        if hints.iter().any(assetpack::SizeHint::is_error) {
          ExitCode::FAILURE
        } else {
          ExitCode::SUCCESS
        }
      }
      Err(error) => {
        eprintln!(
          "{} could not read \"{}\": {error}",
          Colour::Red.paint("Error:"),
          config.output.path.display()
        );
        ExitCode::FAILURE
      }
    },
  };

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  eprintln!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
  code
}
