use time::macros::datetime;

use crate::domain::finalize::{finalize, format_final_score, Outcome, Side};
use crate::domain::state::MatchId;
use crate::domain::test_state_helpers::{declared_match, play_round, two_teams};

#[test]
fn no_rounds_finalizes_to_a_zero_tie() {
    let record = finalize(
        MatchId::new("game-empty"),
        &two_teams(),
        500,
        &[],
        datetime!(2024-03-01 19:00 UTC),
        datetime!(2024-03-01 19:05 UTC),
    );
    assert_eq!(record.final_totals, [0, 0]);
    assert_eq!(record.outcome, Outcome::Tie);
    assert_eq!(record.final_score, "0 – 0");
    assert!(record.rounds.is_empty());
    assert!(record.winner().is_none());
}

#[test]
fn finish_builds_score_sheet_and_winner() {
    let mut state = declared_match();
    play_round(&mut state, (5, false, 6), (4, false, 3));
    play_round(&mut state, (7, false, 7), (5, false, 5));

    let record = state.finish(datetime!(2024-04-02 21:30 UTC));
    assert_eq!(record.id.as_str(), "game-test");
    assert_eq!(record.goal_score, 500);
    assert_eq!(record.final_totals, [121, 10]);
    assert_eq!(record.final_score, "121 – 10");
    assert_eq!(record.outcome, Outcome::TeamOneWins);
    assert_eq!(record.winner().unwrap().label, "Avery & Kai");

    assert_eq!(record.rounds.len(), 2);
    let line = &record.rounds[1].lines[1];
    assert_eq!(line.team_label, "Jess & Malik");
    assert_eq!((line.bid, line.books), (5, 5));
    assert_eq!((line.score_change, line.running_total), (50, 10));

    assert_eq!(
        record.team_one.member_keys,
        vec!["team-1-Avery".to_string(), "team-1-Kai".to_string()]
    );
}

#[test]
fn tie_is_reported_as_tie_but_legacy_winner_is_team_one() {
    let mut state = declared_match();
    play_round(&mut state, (5, false, 5), (5, false, 5));
    let record = state.finish(datetime!(2024-04-02 21:30 UTC));
    assert_eq!(record.outcome, Outcome::Tie);
    assert_eq!(record.outcome.legacy_winner(), Side::TeamOne);
    assert_eq!(record.summary().winning_team, Side::TeamOne);
}

#[test]
fn team_two_wins_on_higher_total() {
    assert_eq!(Outcome::from_totals(347, 512), Outcome::TeamTwoWins);
    assert_eq!(Outcome::TeamTwoWins.winner(), Some(Side::TeamTwo));
}

#[test]
fn summary_formats_date_and_score() {
    let mut state = declared_match();
    play_round(&mut state, (4, false, 4), (6, false, 8));
    let summary = state.finish(datetime!(2024-03-05 23:10 UTC)).summary();
    assert_eq!(summary.date, "Mar 5, 2024");
    assert_eq!(summary.final_score, "40 – 62");
    assert_eq!(summary.winning_team, Side::TeamTwo);
    assert_eq!(summary.team_one, "Avery & Kai");
}

#[test]
fn final_score_keeps_negative_sign() {
    assert_eq!(format_final_score(-41, 9), "-41 – 9");
}

#[test]
fn record_serializes_with_rfc3339_timestamps() {
    let mut state = declared_match();
    play_round(&mut state, (4, false, 4), (4, true, 5));
    let record = state.finish(datetime!(2024-04-02 21:30 UTC));

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["started_at"], "2024-04-02T18:00:00Z");
    assert_eq!(json["outcome"], "team_two_wins");
    assert_eq!(json["rounds"][0]["lines"][1]["blind"], true);
    assert_eq!(json["rounds"][0]["lines"][1]["score_change"], 81);

    let back: crate::domain::MatchRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}
