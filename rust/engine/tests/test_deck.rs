use std::collections::HashSet;

use kuhn3p_engine::cards::Rank;
use kuhn3p_engine::deck::Deck;

#[test]
fn every_deal_has_three_pairwise_distinct_ranks() {
    let mut deck = Deck::new_with_seed(99);
    for _ in 0..200 {
        let ranks = deck.deal();
        let unique: HashSet<Rank> = ranks.iter().copied().collect();
        assert_eq!(unique.len(), 3, "deal {:?} repeats a rank", ranks);
    }
}

#[test]
fn same_seed_same_sequence_of_deals() {
    let mut a = Deck::new_with_seed(42);
    let mut b = Deck::new_with_seed(42);
    for _ in 0..20 {
        assert_eq!(a.deal(), b.deal());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    let deals_a: Vec<_> = (0..20).map(|_| a.deal()).collect();
    let deals_b: Vec<_> = (0..20).map(|_| b.deal()).collect();
    assert_ne!(deals_a, deals_b);
}

#[test]
fn one_rank_stays_buried_each_hand() {
    let mut deck = Deck::new_with_seed(7);
    let _ = deck.deal();
    assert_eq!(deck.remaining(), 1);
}

#[test]
fn every_rank_eventually_appears_in_a_deal() {
    let mut deck = Deck::new_with_seed(5);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        for r in deck.deal() {
            seen.insert(r);
        }
    }
    assert_eq!(seen.len(), 4, "all four ranks should circulate");
}
