//! Domain layer: pure Spades scoring logic and match bookkeeping.

pub mod bidding;
pub mod finalize;
pub mod records;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod settlement;
pub mod state;
pub mod team;
pub mod totals;

#[cfg(test)]
mod tests_finalize;
#[cfg(test)]
mod tests_match_lifecycle;
#[cfg(test)]
mod tests_records;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use bidding::{coerce_numeric, next_bid_value, Bid, Books, Step};
pub use finalize::{finalize, MatchRecord, MatchSummary, Outcome, Side};
pub use records::{tally_member, tally_team, Record};
pub use round::{Round, TeamEntry, TeamRoundInput};
pub use scoring::{compute_score_delta, score_delta, ScoringRules};
pub use settlement::{settle_round, BidMode, MissingBooks, SettleOptions};
pub use state::{BidEntry, MatchId, MatchState, PendingRound, Phase};
pub use team::{Member, MemberSlot, Team, TeamId};
pub use totals::RunningTotals;
