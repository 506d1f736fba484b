mod api;
mod cli_messages;
mod consts;
mod error_classifier;
mod events;
mod loader;
mod logging;
mod models;
mod session;
mod ui;

use crate::session::{run_snapshot_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Paint a dark background behind the dashboard
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Load the dashboard once and print it as plain text
    Snapshot,
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let session = setup_session()?;
    match command {
        Command::Start { with_background } => run_tui_mode(session, with_background).await,
        Command::Snapshot => {
            run_snapshot_mode(session).await?;
            print_cmd_success!("Snapshot complete", "");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_from_env();
    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_cmd_error!("Failed to load dashboard data", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
