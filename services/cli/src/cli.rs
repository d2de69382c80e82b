use clap::{Parser, Subcommand};
use leavedesk::config::AppConfig;
use leavedesk::error::AppError;
use leavedesk::telemetry;
use tracing::info;

use crate::demo::{run_board, run_demo, run_import, BoardArgs, DemoArgs, ImportArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Hostel Leave Desk",
    about = "Walk through and inspect the hostel leave request workflow from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted end-to-end walkthrough (default command)
    Demo(DemoArgs),
    /// Render the leave board as one actor sees it
    Board(BoardArgs),
    /// Validate a JSON export and show the board it would produce
    Import(ImportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "hostel leave desk ready");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(&config, args),
        Command::Board(args) => run_board(&config, args),
        Command::Import(args) => run_import(args),
    }
}
