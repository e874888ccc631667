mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use samplefs_lib::VfsConfig;

use output::{OutputFormat, print_error};

/// samplefs - work with an in-memory sample store as if it were a directory
#[derive(Parser)]
#[command(name = "samplefs")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Load every file under DIR into the store (repeatable)
  #[arg(short, long, global = true, value_name = "DIR")]
  load: Vec<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List samples with their size and SHA-256
  Ls {
    /// Glob patterns to filter by (all samples if omitted)
    patterns: Vec<String>,
  },

  /// Remove samples matching glob patterns
  Rm {
    /// Write the remaining samples to DIR
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Glob patterns of samples to remove
    #[arg(required = true)]
    patterns: Vec<String>,
  },

  /// Run a program against a staged copy of the store
  Run {
    /// Write the store to DIR after the program finishes
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Program to run
    program: String,

    /// Arguments passed to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
  },

  /// Print a file, reading through the store for paths under SAMPLEFS_ROOT
  Cat {
    path: PathBuf,
  },

  /// Show a file's status, synthesized for store entries under SAMPLEFS_ROOT
  Stat {
    path: PathBuf,
  },
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "info" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match dispatch(cli) {
    Ok(code) => std::process::exit(code),
    Err(e) => {
      print_error(&format!("{:#}", e));
      std::process::exit(1);
    }
  }
}

fn dispatch(cli: Cli) -> Result<i32> {
  let load = &cli.load;
  let output = cli.output;

  match cli.command {
    Commands::Ls { patterns } => cmd::cmd_ls(load, &patterns, output)?,
    Commands::Rm { export, patterns } => cmd::cmd_rm(load, export.as_deref(), &patterns, output)?,
    Commands::Run { export, program, args } => {
      return cmd::cmd_run(load, export.as_deref(), &program, &args, output);
    }
    Commands::Cat { path } => cmd::cmd_cat(&VfsConfig::from_env()?, load, &path)?,
    Commands::Stat { path } => cmd::cmd_stat(&VfsConfig::from_env()?, load, &path, output)?,
  }

  Ok(0)
}
