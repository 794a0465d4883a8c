//! Match finalization: totals, outcome and the flattened score sheet.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::domain::round::Round;
use crate::domain::state::MatchId;
use crate::domain::team::{Team, TeamId};

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TeamOneWins,
    TeamTwoWins,
    Tie,
}

/// Side of a match, for summaries that still store a two-valued winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    TeamOne,
    TeamTwo,
}

impl Outcome {
    pub fn from_totals(team_one: i32, team_two: i32) -> Self {
        match team_one.cmp(&team_two) {
            std::cmp::Ordering::Greater => Outcome::TeamOneWins,
            std::cmp::Ordering::Less => Outcome::TeamTwoWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::TeamOneWins => Some(Side::TeamOne),
            Outcome::TeamTwoWins => Some(Side::TeamTwo),
            Outcome::Tie => None,
        }
    }

    /// Two-valued winner where a tie counts for team one.
    pub fn legacy_winner(self) -> Side {
        self.winner().unwrap_or(Side::TeamOne)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSide {
    pub team_id: TeamId,
    pub label: String,
    /// Registered user ids and guest ids, slot order.
    pub member_keys: Vec<String>,
}

impl From<&Team> for TeamSide {
    fn from(team: &Team) -> Self {
        Self {
            team_id: team.id().clone(),
            label: team.label().to_string(),
            member_keys: team
                .members()
                .iter()
                .map(|s| s.member.key().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheetLine {
    pub team_id: TeamId,
    pub team_label: String,
    pub bid: u8,
    pub books: u8,
    pub blind: bool,
    pub score_change: i32,
    pub running_total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheetRound {
    pub number: u32,
    pub lines: Vec<ScoreSheetLine>,
}

/// A finished match, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub team_one: TeamSide,
    pub team_two: TeamSide,
    pub goal_score: u32,
    pub final_totals: [i32; 2],
    pub outcome: Outcome,
    /// "512 – 347", team one first.
    pub final_score: String,
    pub rounds: Vec<ScoreSheetRound>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
}

/// List projection of a [`MatchRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: MatchId,
    pub team_one: String,
    pub team_two: String,
    pub outcome: Outcome,
    pub winning_team: Side,
    pub final_score: String,
    /// e.g. "Apr 2, 2024"
    pub date: String,
}

impl MatchRecord {
    pub fn winner(&self) -> Option<&TeamSide> {
        self.outcome.winner().map(|side| self.side(side))
    }

    pub fn side(&self, side: Side) -> &TeamSide {
        match side {
            Side::TeamOne => &self.team_one,
            Side::TeamTwo => &self.team_two,
        }
    }

    pub fn side_of(&self, team_id: &TeamId) -> Option<Side> {
        if &self.team_one.team_id == team_id {
            Some(Side::TeamOne)
        } else if &self.team_two.team_id == team_id {
            Some(Side::TeamTwo)
        } else {
            None
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            id: self.id.clone(),
            team_one: self.team_one.label.clone(),
            team_two: self.team_two.label.clone(),
            outcome: self.outcome,
            winning_team: self.outcome.legacy_winner(),
            final_score: self.final_score.clone(),
            date: display_date(self.ended_at),
        }
    }
}

pub fn format_final_score(team_one: i32, team_two: i32) -> String {
    format!("{team_one} – {team_two}")
}

/// Short calendar date, e.g. "Mar 5, 2024".
pub fn display_date(at: OffsetDateTime) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    at.format(&format)
        .unwrap_or_else(|_| at.date().to_string())
}

/// Derive the persisted record for two teams and their settled rounds.
///
/// With no rounds both totals are 0 and the outcome is a tie.
pub fn finalize(
    id: MatchId,
    teams: &[Team; 2],
    goal_score: u32,
    rounds: &[Round],
    started_at: OffsetDateTime,
    ended_at: OffsetDateTime,
) -> MatchRecord {
    let [team_one, team_two] = teams;
    let final_totals = match rounds.last() {
        Some(last) => [
            last.entry(team_one.id()).map_or(0, |e| e.running_total),
            last.entry(team_two.id()).map_or(0, |e| e.running_total),
        ],
        None => [0, 0],
    };

    let score_sheet = rounds
        .iter()
        .map(|round| ScoreSheetRound {
            number: round.number(),
            lines: round
                .entries()
                .iter()
                .map(|entry| ScoreSheetLine {
                    team_id: entry.team_id.clone(),
                    team_label: teams
                        .iter()
                        .find(|t| t.id() == &entry.team_id)
                        .map(|t| t.label().to_string())
                        .unwrap_or_default(),
                    bid: entry.bid.value(),
                    books: entry.books.value(),
                    blind: entry.blind,
                    score_change: entry.score_change,
                    running_total: entry.running_total,
                })
                .collect(),
        })
        .collect();

    MatchRecord {
        id,
        team_one: TeamSide::from(team_one),
        team_two: TeamSide::from(team_two),
        goal_score,
        final_totals,
        outcome: Outcome::from_totals(final_totals[0], final_totals[1]),
        final_score: format_final_score(final_totals[0], final_totals[1]),
        rounds: score_sheet,
        started_at,
        ended_at,
    }
}
