pub mod matches;

pub use matches::MatchService;
