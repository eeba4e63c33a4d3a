use serde::{Deserialize, Serialize};

/// Represents the rank of a card in the four-card Kuhn deck.
/// Ranks are totally ordered; comparison is the only operation showdown
/// resolution needs, since the three dealt ranks are always distinct.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Jack (lowest)
    Jack = 0,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace (highest)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            0 => Rank::Jack,
            1 => Rank::Queen,
            2 => Rank::King,
            _ => Rank::Ace,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

pub fn all_ranks() -> [Rank; 4] {
    [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
}
