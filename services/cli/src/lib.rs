mod cli;
mod demo;
mod infra;

use leavedesk::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
