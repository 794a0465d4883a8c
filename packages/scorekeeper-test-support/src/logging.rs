//! Test logging initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet unless asked: only warnings from the engine and its tests.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Filter directive: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_TEST_FILTER`].
pub fn filter_directive(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("TEST_LOG")
        .or_else(|| lookup("RUST_LOG"))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TEST_FILTER.to_string())
}

/// Initialize logging for tests. Safe to call any number of times and from
/// several test binaries; the first caller wins.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directive = filter_directive(|key| std::env::var(key).ok());
        fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
