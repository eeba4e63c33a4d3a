//! The betting automaton: the single source of truth for which actions are
//! legal, whose turn it is, and how a hand resolves.
//!
//! Three seats act in rotation with a single fixed bet size and no raising.
//! A seat facing no outstanding bet may check or bet; a seat facing a bet
//! may call or fold. When a bet lands, every still-active seat that acted
//! before it owes exactly one response, in rotation order, before the hand
//! can end. Enumerating that tree from the empty history yields exactly
//! 25 reachable states: 12 internal and 13 terminal.
//!
//! States are indices into a transition table built once at startup, so
//! every query is O(1) and the automaton itself holds no mutable state.

use std::collections::VecDeque;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Number of seats in a hand. Turn order is always 0, 1, 2, wrapping,
/// skipping folded seats.
pub const NUM_SEATS: usize = 3;

/// A seat identifier in 0..NUM_SEATS, fixed for the duration of one hand.
pub type Seat = usize;

/// One of the two choices available at every internal state. The concrete
/// meaning depends on whether a bet is outstanding: `Passive` is a check
/// with no bet to face and a call against one; `Aggressive` is a bet with
/// none outstanding and a fold against one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Passive,
    Aggressive,
}

impl Action {
    /// Decode an agent's raw return value. Anything other than 0 or 1 is
    /// not an action; the sandbox treats that as a forfeit.
    pub fn from_index(v: u8) -> Option<Action> {
        match v {
            0 => Some(Action::Passive),
            1 => Some(Action::Aggressive),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Action::Passive => 0,
            Action::Aggressive => 1,
        }
    }

    /// The context-dependent name of this action.
    pub fn label(self, facing_bet: bool) -> &'static str {
        match (self, facing_bet) {
            (Action::Passive, false) => "check",
            (Action::Passive, true) => "call",
            (Action::Aggressive, false) => "bet",
            (Action::Aggressive, true) => "fold",
        }
    }
}

/// A node in the betting tree, identified by a stable index assigned by
/// breadth-first enumeration from the root. Id 0 is always the empty
/// history; the enumeration order is an internal detail, not a wire
/// contract.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct BettingState(u8);

#[derive(Debug, Clone)]
enum NodeKind {
    Internal { actor: Seat, facing_bet: bool },
    Terminal,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    active: [bool; NUM_SEATS],
    bettor: Option<Seat>,
    contributions: [u32; NUM_SEATS],
    depth: u8,
    children: [Option<u8>; 2],
    history: Vec<(Seat, Action)>,
}

/// Mutable cursor used only while building the table. Tracks which seats
/// still owe an action; a state is terminal exactly when nobody does.
#[derive(Clone)]
struct Walk {
    to_act: VecDeque<Seat>,
    active: [bool; NUM_SEATS],
    bettor: Option<Seat>,
    contributions: [u32; NUM_SEATS],
    history: Vec<(Seat, Action)>,
}

impl Walk {
    fn root() -> Self {
        Self {
            to_act: (0..NUM_SEATS).collect(),
            active: [true; NUM_SEATS],
            bettor: None,
            // Every seat antes one unit before acting.
            contributions: [1; NUM_SEATS],
            history: Vec::new(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.to_act.is_empty()
    }

    fn child(&self, action: Action) -> Self {
        let mut next = self.clone();
        let actor = next
            .to_act
            .pop_front()
            .expect("betting tree: expanded a terminal node");
        match (next.bettor, action) {
            (None, Action::Passive) => {}
            (None, Action::Aggressive) => {
                next.bettor = Some(actor);
                next.contributions[actor] += 1;
                // Reopening: seats that already checked owe one response
                // each, queued in rotation order behind the seats that have
                // not acted yet. Nobody can have folded before the first bet,
                // so every prior actor is still active.
                for offset in 1..NUM_SEATS {
                    let seat = (actor + offset) % NUM_SEATS;
                    if !next.to_act.contains(&seat) {
                        next.to_act.push_back(seat);
                    }
                }
            }
            (Some(_), Action::Passive) => next.contributions[actor] += 1,
            (Some(_), Action::Aggressive) => next.active[actor] = false,
        }
        next.history.push((actor, action));
        next
    }

    fn node(&self) -> Node {
        let kind = match self.to_act.front() {
            Some(&actor) => NodeKind::Internal {
                actor,
                facing_bet: self.bettor.is_some(),
            },
            None => NodeKind::Terminal,
        };
        Node {
            kind,
            active: self.active,
            bettor: self.bettor,
            contributions: self.contributions,
            depth: self.history.len() as u8,
            children: [None, None],
            history: self.history.clone(),
        }
    }
}

fn build() -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut frontier = VecDeque::new();
    let root = Walk::root();
    nodes.push(root.node());
    frontier.push_back((0usize, root));
    while let Some((id, walk)) = frontier.pop_front() {
        if walk.is_terminal() {
            continue;
        }
        for action in [Action::Passive, Action::Aggressive] {
            let child = walk.child(action);
            let child_id = nodes.len();
            nodes.push(child.node());
            nodes[id].children[action.index() as usize] = Some(child_id as u8);
            frontier.push_back((child_id, child));
        }
    }
    nodes
}

fn table() -> &'static [Node] {
    static TABLE: OnceLock<Vec<Node>> = OnceLock::new();
    TABLE.get_or_init(build)
}

/// The empty history: seat 0 to act, no bet outstanding.
pub fn root() -> BettingState {
    BettingState(0)
}

/// Total number of reachable states (25).
pub fn num_states() -> usize {
    table().len()
}

/// Iterate every reachable state in enumeration order, root first.
pub fn states() -> impl Iterator<Item = BettingState> {
    (0..table().len() as u8).map(BettingState)
}

impl BettingState {
    pub fn id(self) -> u8 {
        self.0
    }

    /// Reconstruct a state from a recorded id. Returns `None` for ids
    /// outside the reachable tree.
    pub fn from_id(id: u8) -> Option<BettingState> {
        if (id as usize) < table().len() {
            Some(BettingState(id))
        } else {
            None
        }
    }

    fn node(self) -> &'static Node {
        &table()[self.0 as usize]
    }

    /// An internal state has exactly one seat owing an action.
    pub fn is_internal(self) -> bool {
        matches!(self.node().kind, NodeKind::Internal { .. })
    }

    /// A terminal state has no seat owing an action: either all three
    /// checked, or every response owed to the single bet has been paid.
    pub fn is_terminal(self) -> bool {
        matches!(self.node().kind, NodeKind::Terminal)
    }

    /// The seat that owes an action. Integrity fault on terminal states.
    pub fn actor(self) -> Result<Seat, EngineError> {
        match self.node().kind {
            NodeKind::Internal { actor, .. } => Ok(actor),
            NodeKind::Terminal => Err(EngineError::NoActor { state: self.0 }),
        }
    }

    /// True when the acting seat faces no outstanding bet (check or bet
    /// available). Mutually exclusive with [`facing_bet`](Self::facing_bet);
    /// together they cover exactly the internal states.
    pub fn can_bet(self) -> bool {
        matches!(
            self.node().kind,
            NodeKind::Internal { facing_bet: false, .. }
        )
    }

    /// True when the acting seat owes a response to an outstanding bet
    /// (call or fold available).
    pub fn facing_bet(self) -> bool {
        matches!(
            self.node().kind,
            NodeKind::Internal { facing_bet: true, .. }
        )
    }

    /// Number of legal actions: 2 for every internal state, 0 for terminal
    /// ones. Anything else is an automaton defect, not an agent error.
    pub fn legal_action_count(self) -> usize {
        self.node().children.iter().flatten().count()
    }

    /// Transition to the successor state. Integrity fault when called on a
    /// terminal state.
    pub fn apply(self, action: Action) -> Result<BettingState, EngineError> {
        self.node().children[action.index() as usize]
            .map(BettingState)
            .ok_or(EngineError::IllegalAction {
                state: self.0,
                action: action.index(),
            })
    }

    /// Whether `seat` is still in the hand (has not folded) at this state.
    pub fn is_active(self, seat: Seat) -> bool {
        self.node().active.get(seat).copied().unwrap_or(false)
    }

    /// Terminal with two or more active seats: all of them reveal and the
    /// highest rank wins.
    pub fn is_showdown(self) -> bool {
        self.is_terminal() && self.active_count() >= 2
    }

    /// Whether `seat` reveals its rank at this state's showdown.
    pub fn at_showdown(self, seat: Seat) -> bool {
        self.is_showdown() && self.is_active(seat)
    }

    /// The one seat left active after everyone else folded. Integrity
    /// fault on non-terminal states or when a showdown is due instead.
    pub fn sole_survivor(self) -> Result<Seat, EngineError> {
        if !self.is_terminal() {
            return Err(EngineError::NotTerminal { state: self.0 });
        }
        let active = self.active_count();
        if active != 1 {
            return Err(EngineError::NoSoleSurvivor {
                state: self.0,
                active,
            });
        }
        Ok(self
            .node()
            .active
            .iter()
            .position(|&a| a)
            .unwrap_or_default())
    }

    /// The seat holding the single outstanding bet, if any.
    pub fn bettor(self) -> Option<Seat> {
        self.node().bettor
    }

    /// Sum of all contributions: three antes plus one unit per bet or call.
    pub fn pot_size(self) -> u32 {
        self.node().contributions.iter().sum()
    }

    /// What `seat` has put in so far: the ante, plus one unit if it ever
    /// bet or called.
    pub fn contribution(self, seat: Seat) -> u32 {
        self.node().contributions.get(seat).copied().unwrap_or(0)
    }

    /// Number of actions taken so far: 0 at the root, at most 5 at a
    /// terminal state. Internal states occur at depths 0 through 4.
    pub fn decision_depth(self) -> usize {
        self.node().depth as usize
    }

    /// The ordered (seat, action) pairs that led here.
    pub fn history(self) -> &'static [(Seat, Action)] {
        &self.node().history
    }

    /// Human-readable action trace, e.g. `0:check 1:bet 2:fold 0:call`.
    pub fn describe(self) -> String {
        if self.history().is_empty() {
            return "(root)".to_string();
        }
        let mut bettor: Option<Seat> = None;
        let mut parts = Vec::with_capacity(self.history().len());
        for &(seat, action) in self.history() {
            parts.push(format!("{}:{}", seat, action.label(bettor.is_some())));
            if bettor.is_none() && action == Action::Aggressive {
                bettor = Some(seat);
            }
        }
        parts.join(" ")
    }

    fn active_count(self) -> usize {
        self.node().active.iter().filter(|&&a| a).count()
    }
}

impl fmt::Display for BettingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds_once_with_root_at_zero() {
        assert_eq!(root().id(), 0);
        assert_eq!(root().decision_depth(), 0);
        assert!(root().history().is_empty());
        assert_eq!(num_states(), 25);
    }

    #[test]
    fn labels_depend_on_context() {
        assert_eq!(Action::Passive.label(false), "check");
        assert_eq!(Action::Passive.label(true), "call");
        assert_eq!(Action::Aggressive.label(false), "bet");
        assert_eq!(Action::Aggressive.label(true), "fold");
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(Action::from_index(0), Some(Action::Passive));
        assert_eq!(Action::from_index(1), Some(Action::Aggressive));
        assert_eq!(Action::from_index(2), None);
        assert_eq!(Action::from_index(255), None);
    }

    #[test]
    fn from_id_bounds_check() {
        assert_eq!(BettingState::from_id(0), Some(root()));
        assert!(BettingState::from_id(24).is_some());
        assert!(BettingState::from_id(25).is_none());
    }

    #[test]
    fn describe_traces_the_history() {
        let s = root()
            .apply(Action::Passive)
            .and_then(|s| s.apply(Action::Aggressive))
            .and_then(|s| s.apply(Action::Aggressive))
            .unwrap();
        assert_eq!(s.describe(), "0:check 1:bet 2:fold");
        assert_eq!(root().describe(), "(root)");
    }
}
