use crate::betting::{BettingState, Seat, NUM_SEATS};
use crate::cards::Rank;

/// Decision-making capability occupying one seat for the duration of a
/// hand. Owned by the orchestration layer and borrowed by the dealer,
/// which only ever talks to it through a [`crate::sandbox::Sandbox`].
///
/// `act` is the only required method and returns a raw index: 0 for the
/// passive action (check/call), 1 for the aggressive one (bet/fold). The
/// sandbox validates the value; returning anything else, or panicking,
/// forfeits that turn. The advisory hooks default to no-ops and their
/// failures never affect a hand.
pub trait Player {
    /// Advisory: a new hand has started and this seat holds `rank`.
    fn start_hand(&mut self, _seat: Seat, _rank: Rank) {}

    /// Decide at an internal state. Must return 0 or 1.
    fn act(&mut self, state: BettingState, rank: Rank) -> u8;

    /// Advisory: the hand reached `state`. `revealed[s]` holds seat `s`'s
    /// rank when that seat showed down, `None` otherwise.
    fn end_hand(
        &mut self,
        _seat: Seat,
        _rank: Rank,
        _state: BettingState,
        _revealed: [Option<Rank>; NUM_SEATS],
    ) {
    }

    /// Human-readable label for reporting.
    fn name(&self) -> &str {
        "anonymous"
    }
}
