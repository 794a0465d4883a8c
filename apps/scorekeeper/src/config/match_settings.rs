//! Per-match scoring settings, optionally loaded from the environment.
//!
//! Variables (all optional):
//! - `SPADES_GOAL_SCORE`: target total; non-digits are stripped, blank falls back to 500
//! - `SPADES_FIRST_ROUND_SELF_BID`: `true`/`false`, default `true`
//! - `SPADES_STRICT_BOOKS`: when `true`, a round without books for a team is rejected
//! - `SPADES_BAG_POINTS`: points per overtrick, 0..=10, default 1
//! - `SPADES_BLIND_NIL_MULTIPLIER`: multiplier on a blind nil stake, 1..=4, default 1

use std::env;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::bidding::coerce_numeric;
use crate::domain::rules::{bag_points_range, blind_nil_multiplier_range, DEFAULT_GOAL_SCORE};
use crate::domain::scoring::ScoringRules;
use crate::domain::settlement::MissingBooks;
use crate::errors::domain::DomainError;

pub const ENV_GOAL_SCORE: &str = "SPADES_GOAL_SCORE";
pub const ENV_FIRST_ROUND_SELF_BID: &str = "SPADES_FIRST_ROUND_SELF_BID";
pub const ENV_STRICT_BOOKS: &str = "SPADES_STRICT_BOOKS";
pub const ENV_BAG_POINTS: &str = "SPADES_BAG_POINTS";
pub const ENV_BLIND_NIL_MULTIPLIER: &str = "SPADES_BLIND_NIL_MULTIPLIER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub goal_score: u32,
    /// Round 1 skips bidding; each team's bid is its books taken.
    pub first_round_self_bid: bool,
    pub missing_books: MissingBooks,
    pub rules: ScoringRules,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            goal_score: DEFAULT_GOAL_SCORE,
            first_round_self_bid: true,
            missing_books: MissingBooks::DefaultZero,
            rules: ScoringRules::default(),
        }
    }
}

impl MatchSettings {
    pub fn with_goal_score(mut self, goal_score: u32) -> Self {
        self.goal_score = goal_score;
        self
    }

    pub fn with_first_round_self_bid(mut self, enabled: bool) -> Self {
        self.first_round_self_bid = enabled;
        self
    }

    pub fn with_missing_books(mut self, policy: MissingBooks) -> Self {
        self.missing_books = policy;
        self
    }

    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.rules = rules;
        self
    }

    /// Load settings from process environment variables.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup (unset keys return `None`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_GOAL_SCORE) {
            let goal = check_goal_score(ENV_GOAL_SCORE, coerce_numeric(&raw, DEFAULT_GOAL_SCORE))?;
            if !raw.chars().any(|c| c.is_ascii_digit()) {
                warn!(value = %raw, "{ENV_GOAL_SCORE} not numeric; using default goal");
            }
            settings.goal_score = goal;
        }

        if let Some(raw) = lookup(ENV_FIRST_ROUND_SELF_BID) {
            settings.first_round_self_bid = parse_flag(ENV_FIRST_ROUND_SELF_BID, &raw)?;
        }

        if let Some(raw) = lookup(ENV_STRICT_BOOKS) {
            if parse_flag(ENV_STRICT_BOOKS, &raw)? {
                settings.missing_books = MissingBooks::Reject;
            }
        }

        let mut bag_points = settings.rules.bag_points();
        if let Some(raw) = lookup(ENV_BAG_POINTS) {
            bag_points = parse_int_in(ENV_BAG_POINTS, &raw, bag_points_range())?;
        }
        let mut blind_nil_multiplier = settings.rules.blind_nil_multiplier();
        if let Some(raw) = lookup(ENV_BLIND_NIL_MULTIPLIER) {
            blind_nil_multiplier =
                parse_int_in(ENV_BLIND_NIL_MULTIPLIER, &raw, blind_nil_multiplier_range())?;
        }
        settings.rules = ScoringRules::new(bag_points, blind_nil_multiplier)
            .map_err(|e| DomainError::config(e.to_string()))?;

        Ok(settings)
    }
}

/// A goal of 0 would count as reached before the first round; `source`
/// names where the value came from in the error.
pub fn check_goal_score(source: &str, goal: u32) -> Result<u32, DomainError> {
    if goal == 0 {
        return Err(DomainError::config(format!(
            "{source} must be positive, got {goal}"
        )));
    }
    Ok(goal)
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, DomainError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(DomainError::config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

fn parse_int_in(key: &str, raw: &str, range: RangeInclusive<i32>) -> Result<i32, DomainError> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::config(format!("{key} must be an integer, got '{raw}'")))?;
    if !range.contains(&value) {
        return Err(DomainError::config(format!(
            "{key} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )));
    }
    Ok(value)
}
