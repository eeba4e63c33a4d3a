//! Explicit preset table mapping agent names to constructors.
//!
//! There is deliberately no process-wide registry and no runtime scanning
//! of agent code: the orchestration layer builds a table, passes it where
//! it is needed, and new agents join by explicit registration. Discovery
//! and sandboxing stay separate concerns; the sandbox wraps whatever
//! comes out of this table regardless of how it got in.

use std::fmt;

use kuhn3p_engine::player::Player;

use crate::bluffer::Bluffer;
use crate::caller::Caller;
use crate::chump::Chump;

type Constructor = Box<dyn Fn(u64) -> Box<dyn Player>>;

/// One named preset: a summary for listings and a constructor taking the
/// seed that makes the agent's own randomness reproducible.
pub struct Preset {
    pub name: &'static str,
    pub summary: &'static str,
    ctor: Constructor,
}

/// A plain, caller-owned table of presets.
#[derive(Default)]
pub struct Registry {
    presets: Vec<Preset>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: &'static str, summary: &'static str, ctor: F)
    where
        F: Fn(u64) -> Box<dyn Player> + 'static,
    {
        self.presets.push(Preset {
            name,
            summary,
            ctor: Box::new(ctor),
        });
    }

    /// Instantiate a preset. Unknown names are a recoverable error so a
    /// typo on the command line reports instead of panicking.
    pub fn create(&self, name: &str, seed: u64) -> Result<Box<dyn Player>, UnknownAgent> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .map(|p| (p.ctor)(seed))
            .ok_or_else(|| UnknownAgent {
                name: name.to_string(),
                known: self.names().iter().map(|n| n.to_string()).collect(),
            })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.presets.iter().map(|p| p.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAgent {
    pub name: String,
    pub known: Vec<String>,
}

impl fmt::Display for UnknownAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown agent '{}', available: {}",
            self.name,
            self.known.join(", ")
        )
    }
}

impl std::error::Error for UnknownAgent {}

/// The stock presets. Returns a fresh table each call; callers own it and
/// may extend it before use.
pub fn default_registry() -> Registry {
    let mut r = Registry::new();
    r.register("caller", "always checks or calls, never folds", |_| {
        Box::new(Caller::new())
    });
    r.register("bluffer", "honest with King+, bluffs 20% of weak hands", |seed| {
        Box::new(Bluffer::new("bluffer", 0.2, seed))
    });
    r.register("bluffer-aggressive", "honest with King+, bluffs 50%", |seed| {
        Box::new(Bluffer::new("bluffer-aggressive", 0.5, seed))
    });
    r.register("bluffer-conservative", "honest with King+, bluffs 10%", |seed| {
        Box::new(Bluffer::new("bluffer-conservative", 0.1, seed))
    });
    r.register("chump-passive", "rarely bets, usually calls", |seed| {
        Box::new(Chump::new("chump-passive", 0.05, 0.6, seed))
    });
    r.register("chump-aggressive", "bets often, calls often", |seed| {
        Box::new(Chump::new("chump-aggressive", 0.7, 0.8, seed))
    });
    r.register("chump-balanced", "coin-flip bets and calls", |seed| {
        Box::new(Chump::new("chump-balanced", 0.5, 0.5, seed))
    });
    r
}
