use crate::domain::finalize::Outcome;
use crate::domain::scoring::{compute_score_delta, score_delta, ScoringRules};
use crate::domain::test_state_helpers::{bid, books};
use crate::domain::team::TeamId;
use crate::domain::totals::RunningTotals;
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn made_bid_with_one_bag() {
    // base 50 + 1 bag
    assert_eq!(score_delta(bid(5), books(6), false), 51);
}

#[test]
fn set_bid_loses_base() {
    assert_eq!(score_delta(bid(4), books(3), false), -40);
}

#[test]
fn successful_nil() {
    assert_eq!(score_delta(bid(0), books(0), false), 100);
}

#[test]
fn failed_nil() {
    assert_eq!(score_delta(bid(0), books(1), false), -100);
    assert_eq!(score_delta(bid(0), books(13), false), -100);
}

#[test]
fn blind_does_not_change_nil_under_default_rules() {
    assert_eq!(score_delta(bid(0), books(0), true), 100);
    assert_eq!(score_delta(bid(0), books(2), true), -100);
}

#[test]
fn blind_bid_crushed() {
    // base 60 + 7 bags + 60 blind bonus
    assert_eq!(score_delta(bid(6), books(13), true), 127);
}

#[test]
fn blind_bid_set_is_doubled() {
    assert_eq!(score_delta(bid(7), books(6), true), -140);
}

#[test]
fn exact_bid_has_no_bags() {
    assert_eq!(score_delta(bid(7), books(7), false), 70);
    assert_eq!(score_delta(bid(13), books(13), false), 130);
}

#[test]
fn ten_point_bags_rule() {
    let rules = ScoringRules::new(10, 1).unwrap();
    assert_eq!(rules.delta(bid(5), books(6), false), 60);
    // a set bid is unaffected by the bag value
    assert_eq!(rules.delta(bid(5), books(4), false), -50);
}

#[test]
fn doubled_blind_nil_rule() {
    let rules = ScoringRules::new(1, 2).unwrap();
    assert_eq!(rules.delta(bid(0), books(0), true), 200);
    assert_eq!(rules.delta(bid(0), books(3), true), -200);
    // a sighted nil keeps the normal stake
    assert_eq!(rules.delta(bid(0), books(0), false), 100);
}

#[test]
fn rule_values_are_bounded() {
    for (bags, multiplier) in [(-1, 1), (11, 1), (i32::MAX, 1), (1, 0), (1, 5), (1, i32::MAX)] {
        let err = ScoringRules::new(bags, multiplier).unwrap_err();
        assert_eq!(err.code().as_str(), "VALIDATION_ERROR", "{bags}/{multiplier}");
    }
    assert!(ScoringRules::new(0, 1).is_ok());
    assert!(ScoringRules::new(10, 4).is_ok());
}

#[test]
fn largest_rules_score_a_full_hand_without_overflow() {
    let rules = ScoringRules::new(10, 4).unwrap();
    assert_eq!(rules.delta(bid(4), books(13), true), 40 + 90 + 40);
    assert_eq!(rules.delta(bid(0), books(0), true), 400);
}

#[test]
fn deserialized_rules_are_validated() {
    let rules: ScoringRules =
        serde_json::from_str(r#"{"bag_points":10,"blind_nil_multiplier":2}"#).unwrap();
    assert_eq!(rules, ScoringRules::new(10, 2).unwrap());

    let too_big = r#"{"bag_points":2147483647,"blind_nil_multiplier":1}"#;
    assert!(serde_json::from_str::<ScoringRules>(too_big).is_err());
    let zero = r#"{"bag_points":1,"blind_nil_multiplier":0}"#;
    assert!(serde_json::from_str::<ScoringRules>(zero).is_err());
}

#[test]
fn raw_entry_point_rejects_out_of_range_inputs() {
    assert_eq!(compute_score_delta(5, 6, false), Ok(51));

    let err = compute_score_delta(3, 3, false).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidBid, _)
    ));

    let err = compute_score_delta(4, 14, false).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidBooks, _)
    ));
}

#[test]
fn two_round_running_totals_pick_team_one() {
    // Per-round deltas as they appear on a sample score sheet.
    let a = TeamId::new("team-a");
    let b = TeamId::new("team-b");
    let mut totals = RunningTotals::new();

    let a_totals: Vec<i32> = [52, 70].iter().map(|d| totals.apply(&a, *d)).collect();
    let b_totals: Vec<i32> = [-41, 50].iter().map(|d| totals.apply(&b, *d)).collect();

    assert_eq!(a_totals, vec![52, 122]);
    assert_eq!(b_totals, vec![-41, 9]);
    assert_eq!(
        Outcome::from_totals(totals.get(&a), totals.get(&b)),
        Outcome::TeamOneWins
    );
}
