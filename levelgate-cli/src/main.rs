//! levelgate CLI - Command-line interface
//!
//! Drives the levelgate logging façade from the command line.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use levelgate::severity::{Severity, StackTraceVerbosity};

use error::CliError;
use runner::{load_config, CliRunner, Overrides};

#[derive(Parser)]
#[command(name = "levelgate")]
#[command(version = levelgate::VERSION)]
#[command(about = "Level-gated logging with stack trace deduplication", long_about = None)]
struct Args {
    /// Config file (default: ~/.levelgate/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Severity for the logger: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    level: Option<Severity>,

    /// Fault rendering: full or unique-only
    #[arg(long, global = true)]
    stack_traces: Option<StackTraceVerbosity>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a message verbatim
    Log {
        /// Message text
        message: String,
    },
    /// Format a printf-style template (%s, %d, %N$s, %n, %%) and log it
    Format {
        /// Template text
        template: String,
        /// Template arguments
        args: Vec<String>,
    },
    /// Retry a failing operation, logging each failure with its stack trace
    Retry {
        /// Number of attempts
        #[arg(default_value = "3")]
        attempts: u32,
    },
    /// Print the effective configuration
    Config {
        /// Also write it to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        e.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let overrides = Overrides {
        level: args.level,
        stack_traces: args.stack_traces,
    };
    let config = load_config(args.config.as_deref(), &overrides)?;

    if let Commands::Config { save } = args.command {
        return commands::config::run(&config, args.config.as_deref(), save);
    }

    let runner = CliRunner::new(config)?;
    match args.command {
        Commands::Log { message } => commands::log::run(&runner, &message)?,
        Commands::Format { template, args } => commands::format::run(&runner, &template, &args)?,
        Commands::Retry { attempts } => commands::retry::run(&runner, attempts)?,
        Commands::Config { .. } => {}
    }

    if !runner.config().logging.stdout || !atty::is(atty::Stream::Stdout) {
        println!("Log written to {}", runner.log_path().display());
    }
    Ok(())
}
