use kuhn3p_engine::betting::BettingState;
use kuhn3p_engine::cards::Rank;
use kuhn3p_engine::player::Player;

/// Deterministic baseline: always takes the passive action, checking when
/// it can bet and calling when it faces one. Never folds, never bets.
#[derive(Debug, Clone, Default)]
pub struct Caller;

impl Caller {
    pub fn new() -> Self {
        Self
    }
}

impl Player for Caller {
    fn act(&mut self, _state: BettingState, _rank: Rank) -> u8 {
        0
    }

    fn name(&self) -> &str {
        "caller"
    }
}
