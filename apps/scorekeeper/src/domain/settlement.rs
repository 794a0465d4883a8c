//! Round settlement: inputs plus prior totals in, an immutable [`Round`] out.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::bidding::Books;
use crate::domain::round::{Round, TeamEntry, TeamRoundInput};
use crate::domain::scoring::ScoringRules;
use crate::domain::totals::RunningTotals;
use crate::errors::domain::{DomainError, ValidationKind};

/// What to do when a round is confirmed without books for a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingBooks {
    /// Treat missing books as zero.
    #[default]
    DefaultZero,
    /// Refuse to settle the round.
    Reject,
}

/// How the bid used for scoring is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BidMode {
    /// Use the bid declared before the hand.
    #[default]
    Declared,
    /// Infer the bid from books taken (self-bid first round).
    SelfBid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettleOptions {
    pub bid_mode: BidMode,
    pub missing_books: MissingBooks,
    pub rules: ScoringRules,
}

/// Settle one round for both teams against `prior` totals.
///
/// `prior` is not modified; callers fold the result in with
/// [`RunningTotals::record`] so a failed settlement leaves nothing half-applied.
pub fn settle_round(
    prior: &RunningTotals,
    number: u32,
    inputs: [TeamRoundInput; 2],
    options: &SettleOptions,
) -> Result<Round, DomainError> {
    if number == 0 {
        return Err(DomainError::validation_other("round numbers start at 1"));
    }
    if inputs[0].team_id == inputs[1].team_id {
        return Err(DomainError::validation(
            ValidationKind::InvalidTeam,
            format!("both entries belong to team {}", inputs[0].team_id),
        ));
    }

    let [first, second] = inputs;
    let entries = [
        settle_entry(prior, number, first, options)?,
        settle_entry(prior, number, second, options)?,
    ];
    Ok(Round::new(number, entries))
}

fn settle_entry(
    prior: &RunningTotals,
    number: u32,
    input: TeamRoundInput,
    options: &SettleOptions,
) -> Result<TeamEntry, DomainError> {
    let books = match (input.books, options.missing_books) {
        (Some(books), _) => books,
        (None, MissingBooks::DefaultZero) => {
            warn!(round = number, team = %input.team_id, "books missing; defaulting to 0");
            Books::ZERO
        }
        (None, MissingBooks::Reject) => {
            return Err(DomainError::validation(
                ValidationKind::MissingBooks,
                format!("round {number}: no books entered for team {}", input.team_id),
            ));
        }
    };

    let bid = match options.bid_mode {
        BidMode::Declared => input.bid,
        BidMode::SelfBid => books.as_self_bid(),
    };

    let score_change = options.rules.delta(bid, books, input.blind);
    let running_total = prior.get(&input.team_id) + score_change;
    debug!(
        round = number,
        team = %input.team_id,
        bid = bid.value(),
        books = books.value(),
        blind = input.blind,
        score_change,
        running_total,
        "settled team entry"
    );

    Ok(TeamEntry {
        team_id: input.team_id,
        bid,
        books,
        blind: input.blind,
        score_change,
        running_total,
    })
}
