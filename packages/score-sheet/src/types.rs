//! Input file shape and shared CLI types.

use clap::ValueEnum;
use scorekeeper::config::match_settings::check_goal_score;
use scorekeeper::{Bid, BidEntry, Books, DomainError, Member, Team, TeamId};
use serde::Deserialize;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

/// One match to score, as read from `--input`.
#[derive(Debug, Deserialize)]
pub struct MatchInput {
    pub teams: [TeamInput; 2],
    #[serde(default)]
    pub goal_score: Option<u32>,
    #[serde(default)]
    pub rounds: Vec<RoundInput>,
}

impl MatchInput {
    /// The file's goal override, if any; 0 is rejected like `SPADES_GOAL_SCORE=0`.
    pub fn goal(&self) -> Result<Option<u32>, DomainError> {
        self.goal_score
            .map(|goal| check_goal_score("goal_score", goal))
            .transpose()
    }
}

/// `--goal` value parser.
pub fn parse_goal(raw: &str) -> Result<u32, String> {
    let goal: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number"))?;
    check_goal_score("--goal", goal).map_err(|e| e.to_string())
}

#[derive(Debug, Deserialize)]
pub struct TeamInput {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub members: [Member; 2],
}

impl TeamInput {
    pub fn into_team(self) -> Result<Team, DomainError> {
        Team::new(TeamId::new(self.id), &self.label, self.members)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BidInput {
    pub bid: u8,
    #[serde(default)]
    pub blind: bool,
}

impl BidInput {
    pub fn to_entry(self) -> Result<BidEntry, DomainError> {
        Ok(BidEntry::new(Bid::new(self.bid)?, self.blind))
    }
}

/// A scored round, or `{"undo": true}` to take back the previous one.
///
/// `bids` is omitted for a self-bid first round. A `null` book count is left
/// to the match's missing-books policy.
#[derive(Debug, Default, Deserialize)]
pub struct RoundInput {
    #[serde(default)]
    pub undo: bool,
    #[serde(default)]
    pub bids: Option<[BidInput; 2]>,
    #[serde(default)]
    pub books: [Option<u8>; 2],
}

impl RoundInput {
    pub fn book_entries(&self, teams: &[TeamId; 2]) -> Result<Vec<(TeamId, Books)>, DomainError> {
        let mut entries = Vec::with_capacity(2);
        for (team, books) in teams.iter().zip(self.books) {
            if let Some(b) = books {
                entries.push((team.clone(), Books::new(b)?));
            }
        }
        Ok(entries)
    }
}
