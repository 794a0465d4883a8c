//! Error codes for the scorekeeper.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are the strings the CLI prints
//! and persisted error payloads carry.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input validation
    /// Bid outside {0} ∪ 4..=13
    InvalidBid,
    /// Books outside 0..=13
    InvalidBooks,
    /// Books not entered for a team under the strict policy
    MissingBooks,
    /// Operation not valid for the current match phase
    PhaseMismatch,
    /// Operation needs at least one recorded round
    NoRounds,
    /// Malformed team roster
    InvalidTeam,
    /// General validation error
    ValidationError,

    // Not found
    MatchNotFound,
    TeamNotFound,
    GuestNotFound,
    NotFound,

    // Conflicts
    /// A match with the same id was already recorded
    DuplicateMatch,
    Conflict,

    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBid => "INVALID_BID",
            Self::InvalidBooks => "INVALID_BOOKS",
            Self::MissingBooks => "MISSING_BOOKS",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::NoRounds => "NO_ROUNDS",
            Self::InvalidTeam => "INVALID_TEAM",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::GuestNotFound => "GUEST_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateMatch => "DUPLICATE_MATCH",
            Self::Conflict => "CONFLICT",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
