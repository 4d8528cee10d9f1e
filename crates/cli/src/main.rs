//! emforge: inspect dual-target build configuration.
//!
//! Every subcommand is read-only: the CLI reports what platform setup
//! would do to a build environment, it never runs a build.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use cmd::{cmd_plan, cmd_status, cmd_tools};

/// Build-environment configurator for native and Emscripten web targets
#[derive(Parser)]
#[command(name = "emforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the resolved platform and the host facts behind it
  Status {
    /// Emit machine-readable JSON
    #[arg(long)]
    json: bool,
  },

  /// Show the environment changes a platform setup would apply
  Plan {
    /// Target platform (resolved from the environment when omitted)
    #[arg(short, long)]
    platform: Option<String>,

    /// Emit machine-readable JSON
    #[arg(long)]
    json: bool,
  },

  /// List registered external tools and their availability
  Tools {
    /// Emit machine-readable JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Status { json } => cmd_status(json),
    Commands::Plan { platform, json } => cmd_plan(platform.as_deref(), json),
    Commands::Tools { json } => cmd_tools(json),
  }
}
