//! Sim command handler.
//!
//! Plays a fixed number of hands between exactly three agent presets,
//! optionally writing a JSONL hand history, and prints the final chip
//! totals per agent. Seeds, hand counts, and button rotation resolve
//! from flags first and the configuration layer second.

use crate::config;
use crate::error::CliError;
use crate::tournament::play_match;
use crate::ui;
use kuhn3p_ai::default_registry;
use kuhn3p_engine::betting::NUM_SEATS;
use kuhn3p_engine::logger::HandLogger;
use std::io::Write;

/// Handle the sim command.
///
/// # Arguments
///
/// * `agents` - Exactly three preset names, seated in order
/// * `hands` - Hand count; falls back to configuration when `None`
/// * `seed` - Base seed for deck and agents; random when `None`
/// * `output` - Optional JSONL hand-history path
/// * `no_rotate` - Keep seat order fixed instead of rotating the button
pub fn handle_sim_command(
    agents: Vec<String>,
    hands: Option<u32>,
    seed: Option<u64>,
    output: Option<String>,
    no_rotate: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if agents.len() != NUM_SEATS {
        ui::write_error(err, "sim takes exactly three agents")?;
        return Err(CliError::InvalidInput(format!(
            "sim takes exactly three agents, got {}",
            agents.len()
        )));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let hands = hands.unwrap_or(cfg.hands);
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let rotate = !no_rotate && cfg.rotate_button;

    let registry = default_registry();
    let mut players = [
        registry.create(&agents[0], base_seed.wrapping_add(1))?,
        registry.create(&agents[1], base_seed.wrapping_add(2))?,
        registry.create(&agents[2], base_seed.wrapping_add(3))?,
    ];

    let mut logger = match &output {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };
    let result = play_match(&mut players, hands, base_seed, rotate, logger.as_mut())?;

    writeln!(out, "Simulated {} hands (seed {})", result.hands, base_seed)?;
    for (pos, name) in agents.iter().enumerate() {
        writeln!(
            out,
            "  {}: {:+} chips, {} forfeited turn(s)",
            name, result.scores[pos], result.forfeits[pos]
        )?;
    }
    if let Some(path) = &output {
        writeln!(out, "Hand history written to {}", path)?;
    }
    Ok(())
}
