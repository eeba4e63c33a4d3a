use std::collections::{HashSet, VecDeque};

use kuhn3p_engine::betting::{self, Action, BettingState};
use kuhn3p_engine::errors::EngineError;

fn apply_seq(actions: &[Action]) -> BettingState {
    let mut s = betting::root();
    for &a in actions {
        s = s.apply(a).expect("sequence must stay legal");
    }
    s
}

const C: Action = Action::Passive;
const B: Action = Action::Aggressive;

#[test]
fn exhaustive_bfs_reaches_exactly_25_states() {
    let mut seen = HashSet::new();
    let mut frontier = VecDeque::new();
    seen.insert(betting::root().id());
    frontier.push_back(betting::root());
    let mut internal = 0;
    let mut terminal = 0;
    while let Some(s) = frontier.pop_front() {
        if s.is_terminal() {
            terminal += 1;
            continue;
        }
        internal += 1;
        for a in [Action::Passive, Action::Aggressive] {
            let child = s.apply(a).expect("internal states accept both actions");
            assert!(seen.insert(child.id()), "tree, not a DAG: {} revisited", child);
            frontier.push_back(child);
        }
    }
    assert_eq!(seen.len(), 25);
    assert_eq!(internal, 12);
    assert_eq!(terminal, 13);
    assert_eq!(betting::num_states(), 25);
}

#[test]
fn internal_and_terminal_partition_the_states() {
    for s in betting::states() {
        assert_ne!(s.is_internal(), s.is_terminal(), "{} must be exactly one kind", s);
        assert_eq!(s.can_bet() || s.facing_bet(), s.is_internal());
        assert!(!(s.can_bet() && s.facing_bet()));
    }
}

#[test]
fn every_internal_state_has_exactly_two_legal_actions() {
    for s in betting::states().filter(|s| s.is_internal()) {
        assert_eq!(s.legal_action_count(), 2, "{}", s);
        assert!(s.apply(Action::Passive).is_ok());
        assert!(s.apply(Action::Aggressive).is_ok());
    }
}

#[test]
fn terminal_states_reject_actions_and_have_no_actor() {
    for s in betting::states().filter(|s| s.is_terminal()) {
        assert_eq!(s.legal_action_count(), 0);
        assert_eq!(
            s.apply(Action::Passive),
            Err(EngineError::IllegalAction {
                state: s.id(),
                action: 0
            })
        );
        assert_eq!(s.actor(), Err(EngineError::NoActor { state: s.id() }));
    }
}

#[test]
fn rotation_starts_at_seat_zero_and_wraps() {
    assert_eq!(betting::root().actor().unwrap(), 0);
    assert_eq!(apply_seq(&[C]).actor().unwrap(), 1);
    assert_eq!(apply_seq(&[C, C]).actor().unwrap(), 2);
}

#[test]
fn a_bet_reopens_the_action_for_prior_checkers() {
    // Seats 0 and 1 check, seat 2 bets: seat 0 then seat 1 owe a response.
    let bet = apply_seq(&[C, C, B]);
    assert!(bet.facing_bet());
    assert_eq!(bet.actor().unwrap(), 0);
    assert_eq!(bet.bettor(), Some(2));

    // One call is not enough: seat 1 still owes a response.
    let one_call = apply_seq(&[C, C, B, C]);
    assert!(one_call.is_internal(), "seat 1 still owes a response");
    assert_eq!(one_call.actor().unwrap(), 1);

    // Both responses discharge the hand into a three-way showdown.
    let done = apply_seq(&[C, C, B, C, C]);
    assert!(done.is_terminal());
    assert!(done.is_showdown());
    assert!((0..3).all(|seat| done.is_active(seat)));
}

#[test]
fn seats_acting_after_a_bet_respond_in_their_normal_turn() {
    // Seat 0 checks, seat 1 bets: seat 2 responds first, then seat 0.
    let s = apply_seq(&[C, B]);
    assert_eq!(s.actor().unwrap(), 2);
    let s = s.apply(B).unwrap(); // seat 2 folds
    assert_eq!(s.actor().unwrap(), 0);
    assert!(s.is_internal());
}

#[test]
fn all_checks_ends_the_hand_without_a_bet() {
    let s = apply_seq(&[C, C, C]);
    assert!(s.is_terminal());
    assert!(s.is_showdown());
    assert_eq!(s.bettor(), None);
    assert_eq!(s.pot_size(), 3);
}

#[test]
fn folding_to_a_bet_leaves_a_sole_survivor() {
    let s = apply_seq(&[B, B, B]); // seat 0 bets, seats 1 and 2 fold
    assert!(s.is_terminal());
    assert!(!s.is_showdown());
    assert_eq!(s.sole_survivor(), Ok(0));
    assert!(s.is_active(0));
    assert!(!s.is_active(1));
    assert!(!s.is_active(2));
    assert!(!s.at_showdown(0), "an uncontested winner never reveals");
}

#[test]
fn sole_survivor_is_an_integrity_fault_elsewhere() {
    let showdown = apply_seq(&[C, C, C]);
    assert_eq!(
        showdown.sole_survivor(),
        Err(EngineError::NoSoleSurvivor {
            state: showdown.id(),
            active: 3
        })
    );
    assert_eq!(
        betting::root().sole_survivor(),
        Err(EngineError::NotTerminal { state: 0 })
    );
}

#[test]
fn folded_seats_never_act_again() {
    // Seat 0 bets, seat 1 folds, seat 2 calls: terminal two-way showdown.
    let s = apply_seq(&[B, B, C]);
    assert!(s.is_terminal());
    assert!(s.is_showdown());
    assert!(s.at_showdown(0));
    assert!(!s.at_showdown(1));
    assert!(s.at_showdown(2));
}

#[test]
fn contributions_are_ante_plus_bet_or_call() {
    let root = betting::root();
    assert_eq!(root.pot_size(), 3);
    for seat in 0..3 {
        assert_eq!(root.contribution(seat), 1);
    }

    let s = apply_seq(&[C, B, C, B]); // 0 checks, 1 bets, 2 calls, 0 folds
    assert_eq!(s.contribution(0), 1);
    assert_eq!(s.contribution(1), 2);
    assert_eq!(s.contribution(2), 2);
    assert_eq!(s.pot_size(), 5);
    assert!(s.is_terminal());
}

#[test]
fn pot_size_always_equals_total_contributions() {
    for s in betting::states() {
        let total: u32 = (0..3).map(|seat| s.contribution(seat)).sum();
        assert_eq!(s.pot_size(), total, "{}", s);
    }
}

#[test]
fn decision_depth_increases_along_every_path() {
    assert_eq!(betting::root().decision_depth(), 0);
    for s in betting::states().filter(|s| s.is_internal()) {
        assert!(s.decision_depth() <= 4, "internal states stop at depth 4");
        for a in [Action::Passive, Action::Aggressive] {
            let child = s.apply(a).unwrap();
            assert_eq!(child.decision_depth(), s.decision_depth() + 1);
        }
    }
}

#[test]
fn ids_are_stable_across_queries() {
    let a = apply_seq(&[C, B, B]);
    let b = apply_seq(&[C, B, B]);
    assert_eq!(a, b);
    assert_eq!(a.id(), b.id());
    assert_eq!(BettingState::from_id(a.id()), Some(a));
}

#[test]
fn history_matches_the_path_taken() {
    let s = apply_seq(&[C, B, B, C]);
    assert_eq!(
        s.history(),
        [(0usize, C), (1, B), (2, B), (0, C)].as_slice(),
        "ordered (seat, action) pairs"
    );
    assert_eq!(s.describe(), "0:check 1:bet 2:fold 0:call");
}
