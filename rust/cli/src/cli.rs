//! Command-line argument types for the kuhn3p CLI.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kuhn3p",
    about = "Three-player Kuhn poker simulator",
    version
)]
pub struct Kuhn3pCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deal a single hand and print the ranks
    Deal {
        /// Deck seed; random if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play hands between three agent presets
    Sim {
        /// Exactly three preset names, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        agents: Vec<String>,
        /// Number of hands; falls back to configuration
        #[arg(long)]
        hands: Option<u32>,
        /// Base seed for the deck and the agents; random if omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Write a JSONL hand history to this file
        #[arg(long)]
        output: Option<String>,
        /// Keep seat order fixed instead of rotating the button
        #[arg(long)]
        no_rotate: bool,
    },
    /// Round-robin tournament over every trio of presets
    Tournament {
        /// Preset names, comma separated; all presets if omitted
        #[arg(long, value_delimiter = ',')]
        agents: Vec<String>,
        /// Hands per match; falls back to configuration
        #[arg(long)]
        hands: Option<u32>,
        /// Times each unique trio plays
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// Base seed; random if omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Save the rankings as CSV to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// List the available agent presets
    Agents,
    /// Show resolved configuration with sources
    Cfg,
    /// Verify RNG determinism
    Rng {
        /// Seed; random if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}
