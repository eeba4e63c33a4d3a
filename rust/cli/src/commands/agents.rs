//! Agents command handler.
//!
//! Lists every registered agent preset with its one-line summary so
//! users can discover valid names for `sim` and `tournament`.

use crate::error::CliError;
use kuhn3p_ai::default_registry;
use std::io::Write;

/// Handle the agents command.
pub fn handle_agents_command(out: &mut dyn Write) -> Result<(), CliError> {
    let registry = default_registry();
    writeln!(out, "Available agents:")?;
    let width = registry
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);
    for preset in registry.iter() {
        writeln!(out, "  {:width$}  {}", preset.name, preset.summary)?;
    }
    Ok(())
}
