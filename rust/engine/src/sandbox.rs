use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::betting::{Action, BettingState, Seat, NUM_SEATS};
use crate::cards::Rank;
use crate::errors::{EngineError, Forfeit};
use crate::player::Player;

/// The only permitted channel between the dealer and one seat's decision
/// logic. Each seat gets its own sandbox; sandboxes share no state with
/// each other or with the automaton, and the wrapped player only ever
/// sees value types (state, rank), never the dealer or other seats.
///
/// Fault policy follows the two error classes of the engine: anything
/// the wrapped player does wrong (panic, out-of-range return) comes back
/// as a [`Forfeit`]; calling the sandbox itself incorrectly (non-internal
/// state) is an [`EngineError`] and fails loudly, since it indicates a
/// dealer bug rather than a misbehaving agent.
pub struct Sandbox<'a> {
    seat: Seat,
    player: &'a mut dyn Player,
    last_error: Option<String>,
}

impl<'a> Sandbox<'a> {
    pub fn new(seat: Seat, player: &'a mut dyn Player) -> Self {
        Self {
            seat,
            player,
            last_error: None,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Most recent advisory-hook failure, retained for diagnostics.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Advisory hook: panics are recorded and discarded, never propagated.
    pub fn start_hand(&mut self, rank: Rank) {
        let seat = self.seat;
        let player = &mut self.player;
        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| player.start_hand(seat, rank))) {
            self.last_error = Some(format!("start_hand: {}", panic_message(payload.as_ref())));
        }
    }

    /// Request this seat's decision at `state`.
    ///
    /// The outer `Result` is the integrity channel: `state` must be
    /// internal and must report exactly two legal actions, or the caller
    /// drove the sandbox incorrectly. The inner `Result` is the agent
    /// channel: `Ok` carries a validated action, `Err` a forfeit that is
    /// local to this one turn.
    pub fn act(
        &mut self,
        state: BettingState,
        rank: Rank,
    ) -> Result<Result<Action, Forfeit>, EngineError> {
        state.actor()?;
        // Invariant check on the automaton, not a per-agent rule: every
        // internal state has exactly two legal actions by construction.
        let count = state.legal_action_count();
        if count != 2 {
            return Err(EngineError::LegalActionCount {
                state: state.id(),
                count,
            });
        }

        let player = &mut self.player;
        let raw = match catch_unwind(AssertUnwindSafe(|| player.act(state, rank))) {
            Ok(v) => v,
            Err(payload) => {
                return Ok(Err(Forfeit::Crashed(panic_message(payload.as_ref()))));
            }
        };
        Ok(Action::from_index(raw).ok_or(Forfeit::BadReturn(raw)))
    }

    /// Advisory hook: same swallow-on-failure policy as `start_hand`.
    pub fn end_hand(&mut self, rank: Rank, state: BettingState, revealed: [Option<Rank>; NUM_SEATS]) {
        let seat = self.seat;
        let player = &mut self.player;
        if let Err(payload) =
            catch_unwind(AssertUnwindSafe(|| player.end_hand(seat, rank, state, revealed)))
        {
            self.last_error = Some(format!("end_hand: {}", panic_message(payload.as_ref())));
        }
    }
}

// Callers must deref the payload box: a `&Box<dyn Any>` coerces to a
// `&dyn Any` whose concrete type is the box itself, and both downcasts miss.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
