//! # kuhn3p-ai: Preset Agents for Three-Player Kuhn Poker
//!
//! Decision-making agents that plug into the engine's [`Player`] seat
//! capability, plus an explicit registry of named presets for the
//! orchestration layer. Every agent owns its own seeded RNG, so whole
//! tournaments replay exactly from a seed.
//!
//! ## Core Components
//!
//! - [`caller`] - Deterministic baseline that always checks or calls
//! - [`chump`] - Plays fixed bet/call probabilities, blind to its rank
//! - [`bluffer`] - Plays its rank honestly and bluffs weak ones
//! - [`registry`] - Explicit preset-name-to-constructor table
//!
//! ## Quick Start
//!
//! ```rust
//! use kuhn3p_ai::default_registry;
//!
//! let registry = default_registry();
//! let mut agent = registry.create("bluffer", 42).expect("preset exists");
//! assert_eq!(agent.name(), "bluffer");
//! ```

pub mod bluffer;
pub mod caller;
pub mod chump;
pub mod registry;

pub use kuhn3p_engine::player::Player;
pub use registry::{default_registry, Registry, UnknownAgent};
