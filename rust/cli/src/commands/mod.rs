//! Command handler modules for the kuhn3p CLI.
//!
//! Each subcommand lives in its own module following a consistent
//! pattern: a public `handle_COMMAND_command(...) -> Result<(), CliError>`
//! entry point, module-private helpers, and output streams passed in as
//! `&mut dyn Write` so tests can capture everything the command prints.

mod agents;
mod cfg;
mod deal;
mod rng;
mod sim;
mod tournament;

pub use agents::handle_agents_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use tournament::handle_tournament_command;
