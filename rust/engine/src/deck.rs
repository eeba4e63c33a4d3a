use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::betting::NUM_SEATS;
use crate::cards::{all_ranks, Rank};

/// Shuffles the four-rank Kuhn deck and deals three ranks per hand.
/// Deterministic for a given seed, so whole simulations replay exactly.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Rank>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: all_ranks().to_vec(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = all_ranks().to_vec();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Rank> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Shuffle and deal one hand: the first three ranks of the permutation
    /// go to seats 0, 1, 2 in order; the fourth stays buried.
    pub fn deal(&mut self) -> [Rank; NUM_SEATS] {
        self.shuffle();
        let mut ranks = [Rank::Jack; NUM_SEATS];
        for slot in ranks.iter_mut() {
            // The deck holds four cards and we take three, so this cannot run dry.
            *slot = self.deal_card().unwrap_or(Rank::Jack);
        }
        ranks
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
