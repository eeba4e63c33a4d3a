use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use kuhn3p_engine::betting::BettingState;
use kuhn3p_engine::cards::Rank;
use kuhn3p_engine::player::Player;

/// Plays its rank honestly and mixes in bluffs: bets and calls with King
/// or better, and with a weaker rank bluff-bets with probability `bluff`
/// but always folds to a real bet.
#[derive(Debug, Clone)]
pub struct Bluffer {
    name: String,
    bluff: f64,
    rng: ChaCha20Rng,
}

impl Bluffer {
    pub fn new(name: impl Into<String>, bluff: f64, seed: u64) -> Self {
        Self {
            name: name.into(),
            bluff: bluff.clamp(0.0, 1.0),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn strong(rank: Rank) -> bool {
        rank >= Rank::King
    }
}

impl Player for Bluffer {
    fn act(&mut self, state: BettingState, rank: Rank) -> u8 {
        if state.can_bet() {
            if Self::strong(rank) || self.rng.random_bool(self.bluff) {
                1 // bet
            } else {
                0 // check
            }
        } else if Self::strong(rank) {
            0 // call
        } else {
            1 // fold; a caught bluff is not worth another unit
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
