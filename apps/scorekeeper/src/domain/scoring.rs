//! Spades score arithmetic.
//!
//! One point per bag is the canonical rule. [`ScoringRules`] lets a table opt
//! into ten-point bags or doubled blind nil without touching callers.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{Bid, Books};
use crate::domain::rules::{
    bag_points_range, blind_nil_multiplier_range, NIL_POINTS, POINTS_PER_BID_BOOK,
};
use crate::errors::domain::DomainError;

/// Table rule variants. Both values are bounded, so [`ScoringRules::delta`]
/// cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScoringRules")]
pub struct ScoringRules {
    /// Points per overtrick (bag).
    bag_points: i32,
    /// Multiplier on the nil stake when the nil was bid blind.
    blind_nil_multiplier: i32,
}

#[derive(Deserialize)]
struct RawScoringRules {
    bag_points: i32,
    blind_nil_multiplier: i32,
}

impl TryFrom<RawScoringRules> for ScoringRules {
    type Error = DomainError;

    fn try_from(raw: RawScoringRules) -> Result<Self, Self::Error> {
        ScoringRules::new(raw.bag_points, raw.blind_nil_multiplier)
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            bag_points: 1,
            blind_nil_multiplier: 1,
        }
    }
}

impl ScoringRules {
    /// Rules with `bag_points` in 0..=10 and `blind_nil_multiplier` in 1..=4.
    pub fn new(bag_points: i32, blind_nil_multiplier: i32) -> Result<Self, DomainError> {
        if !bag_points_range().contains(&bag_points) {
            return Err(DomainError::validation_other(format!(
                "bag points must be within {:?}, got {bag_points}",
                bag_points_range()
            )));
        }
        if !blind_nil_multiplier_range().contains(&blind_nil_multiplier) {
            return Err(DomainError::validation_other(format!(
                "blind nil multiplier must be within {:?}, got {blind_nil_multiplier}",
                blind_nil_multiplier_range()
            )));
        }
        Ok(Self {
            bag_points,
            blind_nil_multiplier,
        })
    }

    pub fn bag_points(&self) -> i32 {
        self.bag_points
    }

    pub fn blind_nil_multiplier(&self) -> i32 {
        self.blind_nil_multiplier
    }

    /// Signed score change for one team's round.
    pub fn delta(&self, bid: Bid, books: Books, blind: bool) -> i32 {
        let bid = i32::from(bid.value());
        let books = i32::from(books.value());

        if bid == 0 {
            let stake = if blind {
                NIL_POINTS * self.blind_nil_multiplier
            } else {
                NIL_POINTS
            };
            return if books == 0 { stake } else { -stake };
        }

        let base = bid * POINTS_PER_BID_BOOK;
        if books < bid {
            return if blind { -(base * 2) } else { -base };
        }

        let bags = (books - bid).max(0);
        let blind_bonus = if blind { base } else { 0 };
        base + bags * self.bag_points + blind_bonus
    }
}

/// Score delta under the default rules.
pub fn score_delta(bid: Bid, books: Books, blind: bool) -> i32 {
    ScoringRules::default().delta(bid, books, blind)
}

/// Score delta from raw integers, validating the declared-bid and books ranges.
pub fn compute_score_delta(bid: u8, books: u8, blind: bool) -> Result<i32, DomainError> {
    Ok(score_delta(Bid::new(bid)?, Books::new(books)?, blind))
}
