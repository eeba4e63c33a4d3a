//! Deal command handler for single hand dealing and display.
//!
//! Deals one three-card hand from a shuffled four-card deck and prints
//! the rank each seat receives plus the burned card. Supports optional
//! seeding for deterministic dealing.

use crate::error::CliError;
use kuhn3p_engine::cards::all_ranks;
use kuhn3p_engine::deck::Deck;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    let ranks = deck.deal();

    writeln!(out, "Seed: {}", base_seed)?;
    for (seat, rank) in ranks.iter().enumerate() {
        writeln!(out, "Seat {}: {} ({:?})", seat, rank.symbol(), rank)?;
    }
    let burned = all_ranks()
        .into_iter()
        .find(|r| !ranks.contains(r))
        .ok_or_else(|| CliError::Engine("deal used all four ranks".into()))?;
    writeln!(out, "Burned: {} ({:?})", burned.symbol(), burned)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_with_seed_prints_all_seats() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Seat 0:"));
        assert!(output.contains("Seat 1:"));
        assert!(output.contains("Seat 2:"));
        assert!(output.contains("Burned:"));
    }

    #[test]
    fn deal_is_deterministic_for_a_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(12345), &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn deal_without_seed_succeeds() {
        let mut out = Vec::new();
        assert!(handle_deal_command(None, &mut out).is_ok());
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 5);
    }
}
