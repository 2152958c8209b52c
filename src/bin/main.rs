//! daxls CLI - serve the DAX intelligence protocol
//!
//! Usage:
//!   daxls serve
//!   daxls keywords
//!
//! `serve` speaks the line protocol on stdin/stdout; logs go to stderr.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use daxls::capabilities::completions::KEYWORDS;
use daxls::Dispatcher;

#[derive(Parser)]
#[command(name = "daxls")]
#[command(about = "DAX language intelligence service over a line-oriented JSON protocol")]
#[command(version)]
struct Cli {
    /// Log filter override (e.g. "daxls=debug"); defaults to RUST_LOG
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the line protocol over stdin/stdout
    Serve,

    /// Print the static keyword set, one per line
    Keywords,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    match cli.command {
        Commands::Serve => cmd_serve(),
        Commands::Keywords => {
            for keyword in KEYWORDS {
                println!("{}", keyword);
            }
            ExitCode::SUCCESS
        }
    }
}

fn init_tracing(filter: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::from_default_env(),
    };

    // stdout carries the protocol; logging must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_serve() -> ExitCode {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut dispatcher = Dispatcher::new();
    match dispatcher.run(stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daxls: {}", e);
            ExitCode::FAILURE
        }
    }
}
