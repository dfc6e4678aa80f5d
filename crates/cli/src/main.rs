mod cmd;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// Infer build targets from a C source tree's layout.
#[derive(Parser)]
#[command(name = "min-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Source directory to scan [env: MIN_BUILD_SOURCE] [default: ./source]
  path: Option<String>,

  /// Print the classified tree with source and output modification times
  #[arg(long, conflicts_with = "json")]
  dump: bool,

  /// Print the classified tree and a summary as JSON
  #[arg(long)]
  json: bool,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  init_logging(cli.verbose);

  let format = if cli.json {
    Some(OutputFormat::Json)
  } else if cli.dump {
    Some(OutputFormat::Text)
  } else {
    None
  };

  cmd::cmd_scan(cli.path.as_deref(), format)
}

fn init_logging(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("min_build=debug,min_build_lib=debug")
    } else {
      EnvFilter::new("warn")
    }
  });

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
