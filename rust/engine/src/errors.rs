use thiserror::Error;

/// Integrity faults: a defect in the engine or in how a caller drove it,
/// never in agent code. These must surface loudly; swallowing one would
/// mask a bug in the betting automaton or the dealer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("state {state} is terminal and has no actor")]
    NoActor { state: u8 },
    #[error("action {action} is illegal at state {state}")]
    IllegalAction { state: u8, action: u8 },
    #[error("state {state} is not terminal")]
    NotTerminal { state: u8 },
    #[error("state {state} has {active} active seats, expected exactly one survivor")]
    NoSoleSurvivor { state: u8, active: usize },
    #[error("internal state {state} reports {count} legal actions, expected 2")]
    LegalActionCount { state: u8, count: usize },
    #[error("deal contains duplicate ranks")]
    DuplicateRanks,
}

/// Agent faults: one seat's decision logic misbehaved on one turn.
/// Contained at the sandbox boundary and surfaced to the dealer only as
/// this signal; the dealer forces the minimum-risk action and stops the
/// hand at a well-defined state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Forfeit {
    #[error("agent returned {0}, expected 0 or 1")]
    BadReturn(u8),
    #[error("agent panicked during act: {0}")]
    Crashed(String),
}
