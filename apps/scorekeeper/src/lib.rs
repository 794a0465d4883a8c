#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::MatchSettings;
pub use domain::{
    Bid, BidEntry, Books, MatchId, MatchRecord, MatchState, MatchSummary, Member, Outcome, Round,
    ScoringRules, Team, TeamId,
};
pub use errors::{DomainError, ErrorCode};
pub use repos::{InMemoryMatchStore, MatchStore};
pub use services::MatchService;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::*;
    pub use super::domain::*;
    pub use super::errors::*;
    pub use super::repos::{InMemoryMatchStore, MatchStore, SubscriptionId};
    pub use super::services::MatchService;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
