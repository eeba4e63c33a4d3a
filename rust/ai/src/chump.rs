use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use kuhn3p_engine::betting::BettingState;
use kuhn3p_engine::cards::Rank;
use kuhn3p_engine::player::Player;

/// Plays fixed action probabilities and ignores its rank entirely: bets
/// with probability `bet_p` when no bet is outstanding, calls with
/// probability `call_p` when facing one. Useful as a tunable punching bag
/// for stronger agents.
#[derive(Debug, Clone)]
pub struct Chump {
    name: String,
    bet_p: f64,
    call_p: f64,
    rng: ChaCha20Rng,
}

impl Chump {
    pub fn new(name: impl Into<String>, bet_p: f64, call_p: f64, seed: u64) -> Self {
        Self {
            name: name.into(),
            bet_p: bet_p.clamp(0.0, 1.0),
            call_p: call_p.clamp(0.0, 1.0),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Player for Chump {
    fn act(&mut self, state: BettingState, _rank: Rank) -> u8 {
        if state.can_bet() {
            u8::from(self.rng.random_bool(self.bet_p))
        } else {
            // Passive (call) on success, aggressive (fold) otherwise.
            u8::from(!self.rng.random_bool(self.call_p))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
