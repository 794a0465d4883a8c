use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::round::Round;
use crate::domain::team::TeamId;

/// Per-team running totals, updated once per settled round.
///
/// Teams with no recorded rounds read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotals {
    totals: HashMap<TeamId, i32>,
}

impl RunningTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, team_id: &TeamId) -> i32 {
        self.totals.get(team_id).copied().unwrap_or(0)
    }

    /// Add `delta` to a team's total and return the new total.
    pub fn apply(&mut self, team_id: &TeamId, delta: i32) -> i32 {
        let total = self.totals.entry(team_id.clone()).or_insert(0);
        *total += delta;
        *total
    }

    /// Adopt the running totals carried by a settled round.
    pub fn record(&mut self, round: &Round) {
        for entry in round.entries() {
            self.totals.insert(entry.team_id.clone(), entry.running_total);
        }
    }

    /// Undo a round's deltas.
    pub fn revert(&mut self, round: &Round) {
        for entry in round.entries() {
            self.apply(&entry.team_id, -entry.score_change);
        }
    }

    /// Rebuild totals from a round history.
    pub fn from_rounds<'a>(rounds: impl IntoIterator<Item = &'a Round>) -> Self {
        let mut totals = Self::new();
        for round in rounds {
            totals.record(round);
        }
        totals
    }
}
