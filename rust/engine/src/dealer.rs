use crate::betting::{self, Action, BettingState, Seat, NUM_SEATS};
use crate::cards::Rank;
use crate::errors::{EngineError, Forfeit};
use crate::logger::ActionRecord;
use crate::player::Player;
use crate::sandbox::Sandbox;

/// Result of one completed hand.
#[derive(Debug)]
pub struct HandOutcome {
    /// State the hand stopped at: terminal unless a forfeit cut it short.
    pub state: BettingState,
    /// Per-seat monetary deltas; they sum to exactly zero.
    pub deltas: [i64; NUM_SEATS],
    /// Every action applied to the automaton, forced ones included.
    pub actions: Vec<ActionRecord>,
    /// The seat whose turn was forfeited, if any, and why.
    pub forfeit: Option<(Seat, Forfeit)>,
}

/// Play exactly one hand end-to-end and compute payouts.
///
/// Each player is wrapped in its own [`Sandbox`] for the duration of the
/// hand. A forfeit reported by a sandbox is local to that seat's turn:
/// the dealer substitutes the minimum-risk action (check when the seat
/// could bet, fold when it faces one), applies it, and stops the hand at
/// the resulting state even when that state is not terminal. The hand
/// therefore always completes with a well-defined stopping state and a
/// full payout vector; one misbehaving seat can only cut the hand short,
/// never abort it.
///
/// The winner takes the whole pot: delta = pot for the winner minus each
/// seat's own contribution, which makes the three deltas zero-sum by
/// construction.
pub fn play_hand(
    players: [&mut dyn Player; NUM_SEATS],
    ranks: [Rank; NUM_SEATS],
) -> Result<HandOutcome, EngineError> {
    if ranks[0] == ranks[1] || ranks[0] == ranks[2] || ranks[1] == ranks[2] {
        return Err(EngineError::DuplicateRanks);
    }

    let [p0, p1, p2] = players;
    let mut sandboxes = [Sandbox::new(0, p0), Sandbox::new(1, p1), Sandbox::new(2, p2)];
    for (seat, sandbox) in sandboxes.iter_mut().enumerate() {
        sandbox.start_hand(ranks[seat]);
    }

    let mut state = betting::root();
    let mut actions = Vec::new();
    let mut forfeit = None;
    while state.is_internal() {
        let seat = state.actor()?;
        match sandboxes[seat].act(state, ranks[seat])? {
            Ok(action) => {
                actions.push(ActionRecord::new(seat, action, state.facing_bet()));
                state = state.apply(action)?;
            }
            Err(reason) => {
                let forced = if state.can_bet() {
                    Action::Passive
                } else {
                    Action::Aggressive
                };
                actions.push(ActionRecord::new(seat, forced, state.facing_bet()));
                state = state.apply(forced)?;
                forfeit = Some((seat, reason));
                // Stop at the resulting state instead of driving the hand
                // to a normal conclusion; containment over completeness.
                break;
            }
        }
    }

    let mut revealed = [None; NUM_SEATS];
    for (seat, slot) in revealed.iter_mut().enumerate() {
        if state.at_showdown(seat) {
            *slot = Some(ranks[seat]);
        }
    }
    for (seat, sandbox) in sandboxes.iter_mut().enumerate() {
        sandbox.end_hand(ranks[seat], state, revealed);
    }

    let the_winner = winner(state, ranks);
    let pot = state.pot_size() as i64;
    let mut deltas = [0i64; NUM_SEATS];
    for (seat, delta) in deltas.iter_mut().enumerate() {
        let winnings = if seat == the_winner { pot } else { 0 };
        *delta = winnings - state.contribution(seat) as i64;
    }

    Ok(HandOutcome {
        state,
        deltas,
        actions,
        forfeit,
    })
}

/// The seat that takes the pot: the highest active rank when two or more
/// seats are still in, otherwise the lone survivor. Ranks are distinct
/// within a hand, so no tie-break exists. Total over every state the
/// dealer can stop at, including the internal states a forfeit leaves
/// behind -- folds only happen against a bet and the bettor never folds,
/// so at least one seat is always active.
pub fn winner(state: BettingState, ranks: [Rank; NUM_SEATS]) -> Seat {
    let mut best: Option<Seat> = None;
    for seat in 0..NUM_SEATS {
        if state.is_active(seat) && best.is_none_or(|b| ranks[seat] > ranks[b]) {
            best = Some(seat);
        }
    }
    best.unwrap_or_default()
}
