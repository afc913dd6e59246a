//! Number Draw - command-line front end
//!
//! Draws numbers from a range with optional exclusions, repetition control
//! and reproducible seeds, and keeps a local history that can be exported
//! as CSV.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use draw_engine::clipboard_text;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;
mod state;

use commands::*;

#[derive(Parser, Debug)]
#[command(name = "number-draw")]
#[command(about = "Draw random numbers, optionally reproducible from a seed")]
struct Cli {
    /// History file
    #[arg(long = "history", global = true, default_value = state::DEFAULT_HISTORY_PATH)]
    history_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw numbers and print them
    Draw(DrawArgs),
    /// List past draws or export them as CSV
    History(HistoryArgs),
    /// Forget all past draws
    ClearHistory,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
        eprintln!("tracing init failed: {}", e);
    }

    let cli = Cli::parse();
    let outcome = match &cli.command {
        Command::Draw(args) => {
            run_draw(args, &cli.history_file).map(|results| println!("{}", clipboard_text(&results)))
        }
        Command::History(args) => run_history(args, &cli.history_file).map(|lines| {
            for line in lines {
                println!("{}", line);
            }
        }),
        Command::ClearHistory => run_clear_history(&cli.history_file),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}
