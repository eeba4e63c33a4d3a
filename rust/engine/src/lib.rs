//! # kuhn3p-engine: Three-Player Kuhn Poker Core
//!
//! A deterministic engine for three-player Kuhn poker: a one-round betting
//! game over a four-card deck with a single fixed bet size and no raising.
//! Provides the betting automaton, a sandboxed boundary for untrusted
//! agents, and a dealer that plays hands to zero-sum payouts, all
//! reproducible from a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - The four-rank deck (Jack through Ace)
//! - [`deck`] - Deterministic dealing with ChaCha20 RNG
//! - [`betting`] - The betting automaton: 25 states, legality, pots
//! - [`player`] - The decision-making capability a seat provides
//! - [`sandbox`] - Per-seat trust boundary around agent code
//! - [`dealer`] - Plays one hand end-to-end and computes payouts
//! - [`logger`] - Hand-history records and JSONL serialization
//! - [`errors`] - Integrity faults vs. contained agent forfeits
//!
//! ## Quick Start
//!
//! ```rust
//! use kuhn3p_engine::betting::{self, Action};
//!
//! // Walk the betting tree: seat 0 checks, seat 1 bets, seat 2 folds,
//! // seat 0 still owes a response to the bet (reopening).
//! let s = betting::root()
//!     .apply(Action::Passive)
//!     .and_then(|s| s.apply(Action::Aggressive))
//!     .and_then(|s| s.apply(Action::Aggressive))
//!     .unwrap();
//! assert!(s.is_internal());
//! assert_eq!(s.actor().unwrap(), 0);
//! ```
//!
//! ## Deterministic Deals
//!
//! ```rust
//! use kuhn3p_engine::deck::Deck;
//!
//! // Same seed produces the same sequence of deals
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! assert_eq!(a.deal(), b.deal());
//! ```

pub mod betting;
pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod logger;
pub mod player;
pub mod sandbox;
