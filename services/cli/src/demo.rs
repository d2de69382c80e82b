use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use clap::Args;
use serde_json::Value;

use leavedesk::config::AppConfig;
use leavedesk::error::AppError;
use leavedesk::workflows::leave::domain::{LeaveDecision, LeaveDraft, LeaveRequest, LeaveStatus};
use leavedesk::workflows::leave::{
    seed, views, LeaveDeskService, LeaveImportError, LeaveImporter, LeaveRequestStore,
};

use crate::infra::RosterDirectory;

const STUDENT: &str = "student@example.com";
const FACULTY: &str = "madhusudhan@gmail.com";
const WARDEN: &str = "geetha@gmail.com";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Start from an empty collection instead of the seeded demo records.
    #[arg(long)]
    pub(crate) empty: bool,
    /// JSON export to use for the bulk import step (defaults to a built-in sample).
    #[arg(long)]
    pub(crate) import: Option<PathBuf>,
    /// Skip the bulk import portion of the walkthrough.
    #[arg(long)]
    pub(crate) skip_import: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BoardArgs {
    /// Actor id the board is rendered for.
    #[arg(long = "as", default_value = "geetha@gmail.com")]
    pub(crate) actor: String,
    /// Start from an empty collection instead of the seeded demo records.
    #[arg(long)]
    pub(crate) empty: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// Path to a JSON array of leave requests.
    #[arg(long)]
    pub(crate) path: PathBuf,
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        empty,
        import,
        skip_import,
    } = args;

    let mut desk = build_desk(config, empty);

    println!("Hostel leave desk demo");
    render_board("Current board", desk.store().list());

    println!("\nStudent submission");
    let request = match desk.submit(STUDENT, weekend_draft()) {
        Ok(request) => request,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- {} requested leave {} -> {} ({})",
        request.student_name, request.start_date, request.end_date, request.reason
    );
    match serde_json::to_string_pretty(&request.to_view()) {
        Ok(json) => println!("  Stored record:\n{json}"),
        Err(err) => println!("  Stored record unavailable: {err}"),
    }

    println!("\nStaff decisions");
    match desk.decide(FACULTY, &request.id.0, LeaveDecision::Approved) {
        Ok(updated) => println!(
            "- Faculty approved {} -> status {}",
            updated.id.0,
            updated.status.label()
        ),
        Err(err) => println!("- Faculty decision failed: {err}"),
    }

    let next_pending = desk
        .store()
        .list()
        .iter()
        .find(|record| record.is_pending())
        .map(|record| record.id.0.clone());
    match next_pending {
        Some(id) => match desk.decide(WARDEN, &id, LeaveDecision::Rejected) {
            Ok(updated) => println!(
                "- Warden rejected {} -> status {}",
                updated.id.0,
                updated.status.label()
            ),
            Err(err) => println!("- Warden decision failed: {err}"),
        },
        None => println!("- Nothing left for the warden to decide"),
    }

    render_board("Board after decisions", desk.store().list());

    if skip_import {
        return Ok(());
    }

    println!("\nBulk import");
    let payload = match import {
        Some(path) => load_payload(&path)?,
        None => seed::sample_import(),
    };
    match desk.import(WARDEN, &payload) {
        Ok(accepted) => println!("- Warden imported {accepted} leave requests"),
        Err(err) => {
            println!("- Import rejected: {err}");
            return Ok(());
        }
    }

    render_board("Board after import", desk.store().list());
    Ok(())
}

pub(crate) fn run_board(config: &AppConfig, args: BoardArgs) -> Result<(), AppError> {
    let BoardArgs { actor, empty } = args;

    let desk = build_desk(config, empty);
    let visible = desk.requests_for(&actor)?;
    render_board(&format!("Leave board for {actor}"), &visible);
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let ImportArgs { path } = args;

    let mut store = LeaveRequestStore::new();
    let accepted = LeaveImporter::from_path(&path, &mut store)?;
    println!(
        "Loaded {} leave requests from {}",
        accepted,
        path.display()
    );
    render_board("Imported board", store.list());
    Ok(())
}

fn build_desk(config: &AppConfig, empty: bool) -> LeaveDeskService<RosterDirectory> {
    let directory = Arc::new(RosterDirectory::with_accounts(seed::sample_roster()));
    let store = if empty || !config.desk.seed_demo_data {
        LeaveRequestStore::new()
    } else {
        seed::seeded_store()
    };
    LeaveDeskService::with_store(directory, store)
}

fn weekend_draft() -> LeaveDraft {
    let start = Local::now().date_naive() + chrono::Duration::days(7);
    LeaveDraft {
        reason: "Family wedding".to_string(),
        start_date: start,
        end_date: start + chrono::Duration::days(3),
        contact_number: "9876543210".to_string(),
    }
}

fn load_payload(path: &Path) -> Result<Value, AppError> {
    let text = std::fs::read_to_string(path)?;
    let payload = serde_json::from_str(&text).map_err(LeaveImportError::Json)?;
    Ok(payload)
}

fn render_board(title: &str, requests: &[LeaveRequest]) {
    println!("\n{title}");
    if requests.is_empty() {
        println!("- no leave requests on file");
        return;
    }

    for tally in views::status_totals(requests) {
        println!("- {}: {}", tally.status_label, tally.count);
    }

    let buckets = views::partition(requests);
    for status in LeaveStatus::ordered() {
        let section = buckets.bucket(status);
        if section.is_empty() {
            continue;
        }
        println!("\n{} requests", status.badge());
        for request in section {
            println!(
                "- {} | {} | {} -> {} | contact {}",
                request.id.0,
                request.student_name,
                request.start_date,
                request.end_date,
                request.contact_number
            );
        }
    }
}
