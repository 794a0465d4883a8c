use crate::config::MatchSettings;
use crate::domain::settlement::MissingBooks;
use crate::domain::state::{MatchState, Phase};
use crate::domain::team::TeamId;
use crate::domain::test_state_helpers::{
    books, declared_match, entry, make_match, play_round, team, two_teams,
};
use crate::domain::Outcome;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[test]
fn new_match_starts_in_bidding_without_self_bid() {
    let state = declared_match();
    assert_eq!(state.phase(), Phase::Bidding);
    assert_eq!(state.current_round_number(), 1);
    assert_eq!(state.final_totals(), [0, 0]);
    assert_eq!(state.outcome(), Outcome::Tie);
    assert!(state.id().as_str().starts_with("game-"));
}

#[test]
fn generated_ids_are_unique() {
    let a = MatchState::new(two_teams(), MatchSettings::default()).unwrap();
    let b = MatchState::new(two_teams(), MatchSettings::default()).unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn same_team_on_both_sides_is_rejected() {
    let t = team("team-1", "Avery", "Kai");
    let err = MatchState::new([t.clone(), t], MatchSettings::default()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidTeam, _)
    ));
}

#[test]
fn self_bid_round_skips_bidding() {
    let mut state = make_match(MatchSettings::default());
    assert!(state.is_self_bid_round());
    assert_eq!(state.phase(), Phase::AwaitingBooks);

    let err = state
        .place_bids([entry(4, false), entry(4, false)])
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));

    let ids = [TeamId::new("team-1"), TeamId::new("team-2")];
    let round = state
        .record_books(&[(ids[0].clone(), books(8)), (ids[1].clone(), books(5))])
        .unwrap();
    assert_eq!(round.number(), 1);
    assert_eq!(round.entry(&ids[0]).unwrap().bid.value(), 8);
    assert_eq!(state.final_totals(), [80, 50]);

    // round 2 bids normally
    assert!(!state.is_self_bid_round());
    assert_eq!(state.phase(), Phase::Bidding);
}

#[test]
fn books_without_bids_is_a_phase_error() {
    let mut state = declared_match();
    let err = state
        .record_books(&[(TeamId::new("team-1"), books(5))])
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    assert!(state.rounds().is_empty());
}

#[test]
fn bids_can_be_replaced_before_books() {
    let mut state = declared_match();
    state.place_bids([entry(4, false), entry(5, false)]).unwrap();
    state.place_bids([entry(6, true), entry(0, false)]).unwrap();
    let pending = state.pending().unwrap();
    assert_eq!(pending.number, 1);
    assert_eq!(pending.bids[0].bid.value(), 6);
    assert!(pending.bids[0].blind);

    assert!(state.cancel_pending().is_some());
    assert_eq!(state.phase(), Phase::Bidding);
}

#[test]
fn sample_match_totals() {
    let mut state = declared_match();
    play_round(&mut state, (5, false, 6), (4, false, 3));
    play_round(&mut state, (7, false, 7), (5, false, 5));
    play_round(&mut state, (6, false, 6), (0, false, 2));

    let totals: Vec<[i32; 2]> = state
        .rounds()
        .iter()
        .map(|r| [r.entries()[0].running_total, r.entries()[1].running_total])
        .collect();
    assert_eq!(totals, vec![[51, -40], [121, 10], [181, -90]]);
    assert_eq!(state.outcome(), Outcome::TeamOneWins);
}

#[test]
fn unknown_team_in_books_is_not_found() {
    let mut state = declared_match();
    state.place_bids([entry(4, false), entry(4, false)]).unwrap();
    let err = state
        .record_books(&[(TeamId::new("team-9"), books(4))])
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Team, _)));
    // the pending bids survive the failed attempt
    assert!(state.pending().is_some());
}

#[test]
fn books_entered_twice_for_one_team_are_rejected() {
    let mut state = declared_match();
    state.place_bids([entry(4, false), entry(5, false)]).unwrap();
    let team_one = TeamId::new("team-1");
    let err = state
        .record_books(&[(team_one.clone(), books(5)), (team_one, books(8))])
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidTeam, _)
    ));
    // nothing scored; the bids are still waiting for books
    assert!(state.rounds().is_empty());
    assert!(state.pending().is_some());
    assert_eq!(state.final_totals(), [0, 0]);
}

#[test]
fn strict_policy_keeps_pending_round_on_missing_books() {
    let mut state = make_match(
        MatchSettings::default()
            .with_first_round_self_bid(false)
            .with_missing_books(MissingBooks::Reject),
    );
    state.place_bids([entry(4, false), entry(4, false)]).unwrap();
    let err = state
        .record_books(&[(TeamId::new("team-1"), books(4))])
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MissingBooks, _)
    ));
    assert!(state.rounds().is_empty());
    assert!(state.pending().is_some());
    assert_eq!(state.final_totals(), [0, 0]);
}

#[test]
fn undo_restores_previous_totals() {
    let mut state = declared_match();
    play_round(&mut state, (5, false, 6), (4, false, 3));
    play_round(&mut state, (7, false, 7), (5, false, 5));
    let first = state.rounds()[0].clone();

    let undone = state.undo_last_round().unwrap();
    assert_eq!(undone.number(), 2);
    assert_eq!(state.rounds(), std::slice::from_ref(&first));
    assert_eq!(state.final_totals(), [51, -40]);
    assert_eq!(state.current_round_number(), 2);

    // replaying the same books reproduces the same round
    play_round(&mut state, (7, false, 7), (5, false, 5));
    assert_eq!(state.rounds()[1], undone);
}

#[test]
fn undo_with_no_rounds_fails() {
    let mut state = declared_match();
    let err = state.undo_last_round().unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::NoRounds, _)
    ));
}

#[test]
fn undo_of_round_one_reenters_self_bid() {
    let mut state = make_match(MatchSettings::default());
    state
        .record_books(&[
            (TeamId::new("team-1"), books(6)),
            (TeamId::new("team-2"), books(7)),
        ])
        .unwrap();
    state.undo_last_round().unwrap();
    assert!(state.is_self_bid_round());
    assert_eq!(state.final_totals(), [0, 0]);
}

#[test]
fn undo_discards_bids_for_the_next_round() {
    let mut state = declared_match();
    play_round(&mut state, (5, false, 6), (4, false, 3));
    state.place_bids([entry(4, false), entry(4, false)]).unwrap();
    state.undo_last_round().unwrap();
    assert!(state.pending().is_none());
}

#[test]
fn goal_reached_when_a_team_hits_the_target() {
    let mut state = make_match(
        MatchSettings::default()
            .with_first_round_self_bid(false)
            .with_goal_score(100),
    );
    play_round(&mut state, (5, false, 6), (4, false, 4));
    assert!(!state.goal_reached());
    play_round(&mut state, (5, false, 5), (0, false, 1));
    assert!(state.goal_reached());
}

#[test]
fn rename_team_falls_back_to_position() {
    let mut state = declared_match();
    let id = TeamId::new("team-2");
    state.rename_team(&id, "  ").unwrap();
    assert_eq!(state.teams()[1].label(), "Team 2");
    assert!(state.rename_team(&TeamId::new("nope"), "x").is_err());
}

#[test]
fn enabling_self_bid_before_round_one_drops_pending_bids() {
    let mut state = declared_match();
    state.place_bids([entry(4, false), entry(5, false)]).unwrap();
    let settings = state.settings().with_first_round_self_bid(true);
    state.update_settings(settings);
    assert!(state.pending().is_none());
    assert_eq!(state.phase(), Phase::AwaitingBooks);
}
