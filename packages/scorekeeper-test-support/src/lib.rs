//! Scorekeeper test support utilities
//!
//! Shared logging initialization and unique id helpers for unit and
//! integration tests.

pub mod logging;
pub mod unique_helpers;
