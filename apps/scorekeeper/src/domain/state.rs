//! The live match aggregate: teams, settings, settled rounds and running totals.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;
use ulid::Ulid;

use crate::config::MatchSettings;
use crate::domain::bidding::{Bid, Books};
use crate::domain::finalize::{finalize, MatchRecord, Outcome};
use crate::domain::round::{Round, TeamRoundInput};
use crate::domain::settlement::{settle_round, BidMode, SettleOptions};
use crate::domain::team::{Team, TeamId};
use crate::domain::totals::RunningTotals;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh `game-{ulid}` id.
    pub fn generate() -> Self {
        Self(format!("game-{}", Ulid::new()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the next round currently stands.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for both teams' bids.
    Bidding,
    /// Bids are in (or skipped for a self-bid round); waiting for books.
    AwaitingBooks,
}

/// A team's bid for the round being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidEntry {
    pub bid: Bid,
    pub blind: bool,
}

impl BidEntry {
    pub fn new(bid: Bid, blind: bool) -> Self {
        Self { bid, blind }
    }
}

/// Bids placed for the next round, team-one first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRound {
    pub number: u32,
    pub bids: [BidEntry; 2],
}

#[derive(Debug, Clone)]
pub struct MatchState {
    id: MatchId,
    teams: [Team; 2],
    settings: MatchSettings,
    rounds: Vec<Round>,
    totals: RunningTotals,
    pending: Option<PendingRound>,
    started_at: OffsetDateTime,
}

impl MatchState {
    /// Start a match between two distinct teams.
    pub fn new(teams: [Team; 2], settings: MatchSettings) -> Result<Self, DomainError> {
        Self::with_id(
            MatchId::generate(),
            teams,
            settings,
            OffsetDateTime::now_utc(),
        )
    }

    pub fn with_id(
        id: MatchId,
        teams: [Team; 2],
        settings: MatchSettings,
        started_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        if teams[0].id() == teams[1].id() {
            return Err(DomainError::validation(
                ValidationKind::InvalidTeam,
                format!("a match needs two different teams, got {} twice", teams[0].id()),
            ));
        }
        Ok(Self {
            id,
            teams,
            settings,
            rounds: Vec::new(),
            totals: RunningTotals::new(),
            pending: None,
            started_at,
        })
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn totals(&self) -> &RunningTotals {
        &self.totals
    }

    pub fn pending(&self) -> Option<&PendingRound> {
        self.pending.as_ref()
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    /// Number the next settled round will get.
    pub fn current_round_number(&self) -> u32 {
        self.rounds.len() as u32 + 1
    }

    /// True while round 1 is pending and the match skips its bidding.
    pub fn is_self_bid_round(&self) -> bool {
        self.settings.first_round_self_bid && self.rounds.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() || self.is_self_bid_round() {
            Phase::AwaitingBooks
        } else {
            Phase::Bidding
        }
    }

    pub fn final_totals(&self) -> [i32; 2] {
        [
            self.totals.get(self.teams[0].id()),
            self.totals.get(self.teams[1].id()),
        ]
    }

    pub fn outcome(&self) -> Outcome {
        let [one, two] = self.final_totals();
        Outcome::from_totals(one, two)
    }

    /// True once either team's total has reached the goal.
    pub fn goal_reached(&self) -> bool {
        let goal = i64::from(self.settings.goal_score);
        self.final_totals().iter().any(|t| i64::from(*t) >= goal)
    }

    /// Place (or replace) both teams' bids for the next round.
    pub fn place_bids(&mut self, bids: [BidEntry; 2]) -> Result<&PendingRound, DomainError> {
        if self.is_self_bid_round() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "round 1 is a self-bid round; record books instead",
            ));
        }
        let pending = self.pending.insert(PendingRound {
            number: self.rounds.len() as u32 + 1,
            bids,
        });
        Ok(pending)
    }

    /// Drop bids placed for the next round.
    pub fn cancel_pending(&mut self) -> Option<PendingRound> {
        self.pending.take()
    }

    /// Settle the next round from books taken and append it.
    ///
    /// `books` holds at most one entry per team (a repeated team is an
    /// `InvalidTeam` error); a team without an entry is handled by the match's
    /// missing-books policy.
    pub fn record_books(&mut self, books: &[(TeamId, Books)]) -> Result<&Round, DomainError> {
        for (i, (team_id, _)) in books.iter().enumerate() {
            if self.team_index(team_id).is_none() {
                return Err(DomainError::not_found(
                    NotFoundKind::Team,
                    format!("team {team_id} is not playing match {}", self.id),
                ));
            }
            if books[..i].iter().any(|(seen, _)| seen == team_id) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidTeam,
                    format!("books entered twice for team {team_id}"),
                ));
            }
        }
        let books_for = |team: &Team| {
            books
                .iter()
                .find(|(id, _)| id == team.id())
                .map(|(_, b)| *b)
        };

        let (bid_mode, bids) = if self.is_self_bid_round() {
            let skipped = BidEntry::new(Bid::NIL, false);
            (BidMode::SelfBid, [skipped, skipped])
        } else {
            let pending = self.pending.as_ref().ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    format!(
                        "round {} has no bids yet",
                        self.current_round_number()
                    ),
                )
            })?;
            (BidMode::Declared, pending.bids)
        };

        let inputs = [0, 1].map(|i| {
            TeamRoundInput::new(
                self.teams[i].id().clone(),
                bids[i].bid,
                bids[i].blind,
                books_for(&self.teams[i]),
            )
        });
        let options = SettleOptions {
            bid_mode,
            missing_books: self.settings.missing_books,
            rules: self.settings.rules,
        };

        let round = settle_round(&self.totals, self.current_round_number(), inputs, &options)?;
        self.totals.record(&round);
        self.pending = None;
        info!(
            match_id = %self.id,
            round = round.number(),
            totals = ?self.final_totals(),
            "round recorded"
        );
        self.rounds.push(round);
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// Remove the most recent round and roll its deltas back.
    ///
    /// Bids already placed for the following round are discarded.
    pub fn undo_last_round(&mut self) -> Result<Round, DomainError> {
        let round = self.rounds.pop().ok_or_else(|| {
            DomainError::validation(ValidationKind::NoRounds, "no rounds to undo")
        })?;
        self.totals.revert(&round);
        self.pending = None;
        info!(match_id = %self.id, round = round.number(), "round undone");
        Ok(round)
    }

    /// Rename a team; a blank label becomes "Team 1" / "Team 2".
    pub fn rename_team(&mut self, team_id: &TeamId, label: &str) -> Result<(), DomainError> {
        let index = self.team_index(team_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Team, format!("team {team_id}"))
        })?;
        self.teams[index].rename(label, index + 1);
        Ok(())
    }

    pub fn team_mut(&mut self, team_id: &TeamId) -> Option<&mut Team> {
        let index = self.team_index(team_id)?;
        Some(&mut self.teams[index])
    }

    /// Replace the match settings mid-game.
    ///
    /// Turning self-bid on before round 1 discards pending bids, since that
    /// round no longer has a bidding step.
    pub fn update_settings(&mut self, settings: MatchSettings) {
        self.settings = settings;
        if self.is_self_bid_round() {
            self.pending = None;
        }
    }

    /// End the match and derive its persisted record.
    pub fn finish(self, ended_at: OffsetDateTime) -> MatchRecord {
        if self.pending.is_some() {
            info!(match_id = %self.id, "finishing with unsettled bids; they are dropped");
        }
        finalize(
            self.id,
            &self.teams,
            self.settings.goal_score,
            &self.rounds,
            self.started_at,
            ended_at,
        )
    }

    fn team_index(&self, team_id: &TeamId) -> Option<usize> {
        self.teams.iter().position(|t| t.id() == team_id)
    }
}
