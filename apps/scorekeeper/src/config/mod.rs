pub mod match_settings;

pub use match_settings::MatchSettings;
