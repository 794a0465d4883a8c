//! Score sheet rendering and the CSV summary row.

use scorekeeper::domain::Record;
use scorekeeper::{MatchRecord, Outcome};
use serde::Serialize;

/// One CSV line per scored match.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: String,
    pub date: String,
    pub team_one: String,
    pub team_two: String,
    pub team_one_total: i32,
    pub team_two_total: i32,
    pub rounds: usize,
    pub outcome: String,
    pub winner: String,
}

impl From<&MatchRecord> for CsvSummaryRow {
    fn from(record: &MatchRecord) -> Self {
        let summary = record.summary();
        Self {
            match_id: record.id.to_string(),
            date: summary.date,
            team_one: record.team_one.label.clone(),
            team_two: record.team_two.label.clone(),
            team_one_total: record.final_totals[0],
            team_two_total: record.final_totals[1],
            rounds: record.rounds.len(),
            outcome: outcome_label(record.outcome).to_string(),
            winner: record
                .winner()
                .map(|side| side.label.clone())
                .unwrap_or_default(),
        }
    }
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::TeamOneWins => "team_one",
        Outcome::TeamTwoWins => "team_two",
        Outcome::Tie => "tie",
    }
}

/// Per-round table followed by the result line.
pub fn render_sheet(record: &MatchRecord) -> String {
    let mut out = String::new();
    let one = &record.team_one.label;
    let two = &record.team_two.label;
    out.push_str(&format!("{:>5}  {:<28}  {:<28}\n", "Round", one, two));
    for round in &record.rounds {
        let cells: Vec<String> = round
            .lines
            .iter()
            .map(|line| {
                format!(
                    "{:>2}{} {:>2}  {:>+5}  {:>5}",
                    line.bid,
                    if line.blind { "B" } else { " " },
                    line.books,
                    line.score_change,
                    line.running_total
                )
            })
            .collect();
        out.push_str(&format!(
            "{:>5}  {:<28}  {:<28}\n",
            round.number,
            cells.first().map(String::as_str).unwrap_or(""),
            cells.get(1).map(String::as_str).unwrap_or("")
        ));
    }
    let result = match record.winner() {
        Some(winner) => format!("{} win", winner.label),
        None => "Tie".to_string(),
    };
    out.push_str(&format!("Final: {} ({result})\n", record.final_score));
    out
}

pub fn render_record(name: &str, record: &Record) -> String {
    format!(
        "{name}: {}W {}L {}T ({}%)",
        record.wins,
        record.losses,
        record.ties,
        record.win_rate()
    )
}
