//! Match domain service.

use time::OffsetDateTime;
use tracing::info;

use crate::config::MatchSettings;
use crate::domain::finalize::{MatchRecord, MatchSummary};
use crate::domain::records::{tally_member, tally_team, Record};
use crate::domain::state::{MatchId, MatchState};
use crate::domain::team::{Team, TeamId};
use crate::errors::domain::DomainError;
use crate::repos::matches::MatchStore;

/// Starts matches with the table's settings and files finished ones in the store.
pub struct MatchService<S: MatchStore> {
    store: S,
    settings: MatchSettings,
}

impl<S: MatchStore> MatchService<S> {
    pub fn new(store: S, settings: MatchSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// New match with a generated id, started now.
    pub fn start(&self, teams: [Team; 2]) -> Result<MatchState, DomainError> {
        let state = MatchState::new(teams, self.settings)?;
        info!(
            match_id = %state.id(),
            team_one = %state.teams()[0].id(),
            team_two = %state.teams()[1].id(),
            goal = self.settings.goal_score,
            "match started"
        );
        Ok(state)
    }

    /// Finalize `state` and persist the record.
    pub fn finish(
        &self,
        state: MatchState,
        ended_at: OffsetDateTime,
    ) -> Result<MatchRecord, DomainError> {
        let record = state.finish(ended_at);
        self.store.add(record.clone())?;
        info!(
            match_id = %record.id,
            final_score = %record.final_score,
            rounds = record.rounds.len(),
            outcome = ?record.outcome,
            "match finished"
        );
        Ok(record)
    }

    pub fn history(&self) -> Vec<MatchSummary> {
        self.store.summaries()
    }

    pub fn detail(&self, id: &MatchId) -> Result<MatchRecord, DomainError> {
        self.store.get(id)
    }

    pub fn team_record(&self, team_id: &TeamId) -> Record {
        tally_team(&self.store.records(), team_id)
    }

    /// Record for a registered user id or guest id.
    pub fn member_record(&self, member_key: &str) -> Record {
        tally_member(&self.store.records(), member_key)
    }
}
