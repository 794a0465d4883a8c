//! Unique ids for test data, so parallel tests sharing a store never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use scorekeeper_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("team");
/// assert_ne!(a, unique_str("team"));
/// assert!(a.starts_with("team-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Match id in the same `game-{ulid}` shape the engine generates.
pub fn unique_match_id() -> String {
    unique_str("game")
}

/// Guest id scoped to a display name, e.g. `guest-kai-01J…`.
pub fn unique_guest_id(display_name: &str) -> String {
    unique_str(&format!("guest-{}", display_name.to_lowercase()))
}
