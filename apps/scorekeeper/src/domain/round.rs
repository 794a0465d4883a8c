//! Settled round records.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{Bid, Books};
use crate::domain::team::TeamId;

/// One team's inputs for a round that is about to be settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoundInput {
    pub team_id: TeamId,
    pub bid: Bid,
    pub blind: bool,
    /// `None` when books were never entered for the team.
    pub books: Option<Books>,
}

impl TeamRoundInput {
    pub fn new(team_id: TeamId, bid: Bid, blind: bool, books: Option<Books>) -> Self {
        Self {
            team_id,
            bid,
            blind,
            books,
        }
    }
}

/// One team's line in a settled round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub team_id: TeamId,
    pub bid: Bid,
    pub books: Books,
    pub blind: bool,
    pub score_change: i32,
    pub running_total: i32,
}

/// A settled round. Immutable once built; running totals are derived at settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    number: u32,
    entries: [TeamEntry; 2],
}

impl Round {
    pub(crate) fn new(number: u32, entries: [TeamEntry; 2]) -> Self {
        Self { number, entries }
    }

    /// 1-based round number.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn entries(&self) -> &[TeamEntry; 2] {
        &self.entries
    }

    pub fn entry(&self, team_id: &TeamId) -> Option<&TeamEntry> {
        self.entries.iter().find(|e| &e.team_id == team_id)
    }
}
