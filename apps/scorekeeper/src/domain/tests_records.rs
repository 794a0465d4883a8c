use time::macros::datetime;

use crate::domain::records::{tally_member, tally_team, Record};
use crate::domain::team::TeamId;
use crate::domain::test_state_helpers::{declared_match, play_round};
use crate::domain::{MatchRecord, Outcome, Side};

fn finished(one: (u8, bool, u8), two: (u8, bool, u8)) -> MatchRecord {
    let mut state = declared_match();
    play_round(&mut state, one, two);
    state.finish(datetime!(2024-02-12 20:00 UTC))
}

#[test]
fn record_counts_wins_losses_ties() {
    let mut record = Record::default();
    record.add(Outcome::TeamOneWins, Side::TeamOne);
    record.add(Outcome::TeamOneWins, Side::TeamTwo);
    record.add(Outcome::Tie, Side::TeamTwo);
    assert_eq!(
        record,
        Record {
            wins: 1,
            losses: 1,
            ties: 1
        }
    );
    assert_eq!(record.games(), 3);
}

#[test]
fn win_rate_rounds_to_nearest_percent() {
    assert_eq!(Record::default().win_rate(), 0);
    let two_of_three = Record {
        wins: 2,
        losses: 1,
        ties: 0,
    };
    assert_eq!(two_of_three.win_rate(), 67);
    let one_of_eight = Record {
        wins: 1,
        losses: 7,
        ties: 0,
    };
    // 12.5 rounds up
    assert_eq!(one_of_eight.win_rate(), 13);
    let all = Record {
        wins: 4,
        losses: 0,
        ties: 0,
    };
    assert_eq!(all.win_rate(), 100);
}

#[test]
fn tally_team_over_history() {
    let history = vec![
        finished((5, false, 6), (4, false, 3)),
        finished((4, false, 3), (4, false, 6)),
        finished((5, false, 5), (5, false, 5)),
    ];
    let team_one = tally_team(&history, &TeamId::new("team-1"));
    assert_eq!((team_one.wins, team_one.losses, team_one.ties), (1, 1, 1));

    let team_two = tally_team(&history, &TeamId::new("team-2"));
    assert_eq!((team_two.wins, team_two.losses, team_two.ties), (1, 1, 1));

    let stranger = tally_team(&history, &TeamId::new("team-x"));
    assert_eq!(stranger.games(), 0);
}

#[test]
fn tally_member_follows_the_player() {
    let history = vec![
        finished((5, false, 6), (4, false, 3)),
        finished((4, false, 3), (4, false, 6)),
    ];
    let kai = tally_member(&history, "team-1-Kai");
    assert_eq!((kai.wins, kai.losses), (1, 1));
    assert_eq!(kai.win_rate(), 50);
    assert_eq!(tally_member(&history, "nobody").games(), 0);
}
