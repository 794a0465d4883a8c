//! Win/loss/tie records over finished matches.

use serde::{Deserialize, Serialize};

use crate::domain::finalize::{MatchRecord, Outcome, Side};
use crate::domain::team::TeamId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Record {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Wins as a whole percentage of games played, rounded half up; 0 with no games.
    pub fn win_rate(&self) -> u32 {
        let games = self.games();
        if games == 0 {
            return 0;
        }
        (self.wins * 200 + games) / (games * 2)
    }

    /// Count one finished match from `side`'s point of view.
    pub fn add(&mut self, outcome: Outcome, side: Side) {
        match outcome.winner() {
            None => self.ties += 1,
            Some(winner) if winner == side => self.wins += 1,
            Some(_) => self.losses += 1,
        }
    }
}

/// Record of one team across `matches`; matches it did not play are skipped.
pub fn tally_team<'a>(
    matches: impl IntoIterator<Item = &'a MatchRecord>,
    team_id: &TeamId,
) -> Record {
    let mut record = Record::default();
    for m in matches {
        if let Some(side) = m.side_of(team_id) {
            record.add(m.outcome, side);
        }
    }
    record
}

/// Record of one player (registered user id or guest id) across every team they played on.
pub fn tally_member<'a>(
    matches: impl IntoIterator<Item = &'a MatchRecord>,
    member_key: &str,
) -> Record {
    let mut record = Record::default();
    for m in matches {
        let side = if m.team_one.member_keys.iter().any(|k| k == member_key) {
            Side::TeamOne
        } else if m.team_two.member_keys.iter().any(|k| k == member_key) {
            Side::TeamTwo
        } else {
            continue;
        };
        record.add(m.outcome, side);
    }
    record
}
