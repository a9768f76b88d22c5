//! Command-line interface for depsync
//!
//! Provides `generate`, `check`, `list` and `completions` subcommands.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod generate;
mod list;
mod utils;

/// Generate packaging and CI configuration files from a dependency registry
#[derive(Parser)]
#[command(name = "depsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the dpkg control file, requirements.txt, setup.cfg and install script
    Generate(generate::GenerateArgs),

    /// Verify that required dependencies are installed
    Check(check::CheckArgs),

    /// Print the dependency expressions used by each output format
    List(list::ListArgs),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Check(args) => check::run(args),
        Commands::List(args) => list::run(args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "depsync", &mut std::io::stdout());
            Ok(())
        }
    }
}
