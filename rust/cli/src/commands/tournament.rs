//! Tournament command handler.
//!
//! Runs a round-robin over every unique trio of the requested presets
//! and prints a rankings table. Standings can also be saved as CSV.

use crate::config;
use crate::error::CliError;
use crate::tournament::run_round_robin;
use crate::ui;
use kuhn3p_ai::default_registry;
use std::io::Write;

/// Handle the tournament command.
///
/// # Arguments
///
/// * `agents` - Preset names; every registered preset when empty
/// * `hands` - Hands per match; falls back to configuration when `None`
/// * `rounds` - Times each unique trio plays
/// * `seed` - Base seed; random when `None`
/// * `output` - Optional CSV path for the rankings
pub fn handle_tournament_command(
    agents: Vec<String>,
    hands: Option<u32>,
    rounds: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let hands = hands.unwrap_or(cfg.hands);
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let registry = default_registry();
    let names: Vec<String> = if agents.is_empty() {
        registry.names().iter().map(|s| s.to_string()).collect()
    } else {
        agents
    };

    let standings = run_round_robin(
        &registry,
        &names,
        hands,
        rounds,
        base_seed,
        cfg.rotate_button,
        Some(out),
    )?;

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(
        out,
        "{:<4} {:<22} {:>8} {:>8} {:>4} {:>4} {:>4}",
        "#", "agent", "chips", "matches", "1st", "2nd", "3rd"
    )?;
    for (place, s) in standings.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<22} {:>8} {:>8} {:>4} {:>4} {:>4}",
            place + 1,
            s.name,
            s.total,
            s.matches,
            s.firsts,
            s.seconds,
            s.thirds
        )?;
    }

    if let Some(path) = &output {
        write_csv(path, &standings)?;
        writeln!(out, "Rankings written to {}", path)?;
    }
    Ok(())
}

fn write_csv(path: &str, standings: &[crate::tournament::Standing]) -> Result<(), CliError> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "place,agent,chips,matches,firsts,seconds,thirds")?;
    for (place, s) in standings.iter().enumerate() {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            place + 1,
            s.name,
            s.total,
            s.matches,
            s.firsts,
            s.seconds,
            s.thirds
        )?;
    }
    Ok(())
}
