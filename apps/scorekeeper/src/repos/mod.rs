//! Persistence seams for finished matches.

pub mod matches;

pub use matches::{InMemoryMatchStore, MatchStore, SubscriptionId};
