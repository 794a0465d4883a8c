//! Score sheet CLI: plays recorded Spades matches through the scoring engine.
//!
//! Each `--input` file holds one match (teams plus the rounds as called at
//! the table). Results are printed as a score sheet and written as JSONL or
//! JSON records with a CSV summary alongside.

mod output;
mod report;
mod types;

use clap::Parser;
use output::OutputWriter;
use report::{render_record, render_sheet};
use scorekeeper::{
    DomainError, InMemoryMatchStore, MatchRecord, MatchService, MatchSettings, MatchState, MatchStore,
    TeamId,
};
use scorekeeper::telemetry::{init_tracing, LogFormat};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use types::{parse_goal, MatchInput, OutputFormat};

#[derive(Parser)]
#[command(name = "score-sheet")]
#[command(about = "Score recorded Spades matches and write their score sheets")]
struct Args {
    /// Match input file (JSON); repeat for several matches
    #[arg(short, long, required = true)]
    input: Vec<PathBuf>,

    /// Output directory for records and the CSV summary
    #[arg(long, default_value = "./score-sheets")]
    output_dir: PathBuf,

    /// Output format for match records
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,

    /// Goal score; overrides SPADES_GOAL_SCORE and the input file
    #[arg(long, value_parser = parse_goal)]
    goal: Option<u32>,

    /// Bid the first round like any other instead of bidding books taken
    #[arg(long)]
    no_self_bid: bool,

    /// Fail a round when a team's books are missing instead of counting 0
    #[arg(long)]
    strict_books: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose { "debug" } else { "warn" };
    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    init_tracing(format, filter)?;

    let mut settings = MatchSettings::from_env()?;
    if args.no_self_bid {
        settings = settings.with_first_round_self_bid(false);
    }
    if args.strict_books {
        settings = settings.with_missing_books(scorekeeper::domain::MissingBooks::Reject);
    }
    if let Some(goal) = args.goal {
        settings = settings.with_goal_score(goal);
    }

    let service = MatchService::new(InMemoryMatchStore::new(), settings);
    let mut writer = OutputWriter::new(&args.output_dir, args.output_format.clone())?;
    let mut failures = 0;

    for path in &args.input {
        match score_file(&service, path, args.goal.is_some()) {
            Ok(record) => {
                println!("{}", render_sheet(&record));
                if let Err(e) = writer.write_match(&record) {
                    warn!("Failed to write match {}: {}", record.id, e);
                }
            }
            Err(e) => {
                failures += 1;
                warn!("{}: {}", path.display(), e);
            }
        }
    }

    let (records_path, csv_path) = writer.output_paths();
    let (records_path, csv_path) = (records_path.to_path_buf(), csv_path.to_path_buf());
    writer.finish()?;
    info!("Match records written to: {}", records_path.display());
    info!("Summary CSV written to: {}", csv_path.display());

    print_records(&service);

    if failures > 0 {
        return Err(format!("{failures} of {} matches failed", args.input.len()).into());
    }
    Ok(())
}

fn score_file(
    service: &MatchService<InMemoryMatchStore>,
    path: &Path,
    goal_from_args: bool,
) -> Result<MatchRecord, Box<dyn std::error::Error>> {
    let input: MatchInput = serde_json::from_slice(&std::fs::read(path)?)?;
    let file_goal = input.goal()?;
    let [one, two] = input.teams;
    let mut state = service.start([one.into_team()?, two.into_team()?])?;
    if let (Some(goal), false) = (file_goal, goal_from_args) {
        let settings = state.settings().with_goal_score(goal);
        state.update_settings(settings);
    }

    let team_ids: [TeamId; 2] = [
        state.teams()[0].id().clone(),
        state.teams()[1].id().clone(),
    ];
    for (i, round) in input.rounds.iter().enumerate() {
        play(&mut state, round, &team_ids)
            .map_err(|e| format!("round entry {}: {} ({})", i + 1, e, e.code()))?;
    }
    if state.goal_reached() {
        info!(match_id = %state.id(), "goal reached");
    }

    Ok(service.finish(state, time::OffsetDateTime::now_utc())?)
}

fn play(
    state: &mut MatchState,
    round: &types::RoundInput,
    team_ids: &[TeamId; 2],
) -> Result<(), DomainError> {
    if round.undo {
        state.undo_last_round()?;
        return Ok(());
    }
    if let Some([one, two]) = round.bids {
        state.place_bids([one.to_entry()?, two.to_entry()?])?;
    }
    state.record_books(&round.book_entries(team_ids)?)?;
    Ok(())
}

fn print_records(service: &MatchService<InMemoryMatchStore>) {
    let history = service.history();
    if history.len() < 2 {
        return;
    }
    println!("=== Records ({} matches) ===", history.len());
    let mut seen: Vec<TeamId> = Vec::new();
    for record in service.store().records() {
        for side in [&record.team_one, &record.team_two] {
            if seen.contains(&side.team_id) {
                continue;
            }
            seen.push(side.team_id.clone());
            println!(
                "{}",
                render_record(&side.label, &service.team_record(&side.team_id))
            );
        }
    }
}
