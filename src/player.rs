//! Data model shared by every stage of the scheduler: player identity,
//! sides, matches, and the arrangement produced for a round.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, stable identity for a player.
///
/// The reference implementation keys its opponent-history map by
/// pointer; a rewrite keys it by a stable id instead so the data model
/// never needs reference or cyclic-ownership semantics. Any caller
/// that needs to resolve a `PlayerId` back to a [`Player`] record
/// builds a `HashMap<PlayerId, &Player>` (or similar) for the duration
/// of one scheduling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A player's identity and current standing in the tournament.
///
/// `opponents` is kept symmetric by the caller: if `a.opponents[&b.id]
/// == k` then `b.opponents[&a.id] == k`. The scheduler never repairs
/// asymmetry, only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Tie-breaker used when ordering players; higher is picked first.
    pub priority: f32,
    /// Cumulative result so far; higher is stronger.
    pub score: f32,
    /// Rounds played. Non-negative; fractional values are permitted
    /// and preserved (a bye might count as half a match upstream).
    pub matches: f32,
    /// Prior-encounter counts against other players, by id.
    pub opponents: HashMap<PlayerId, u32>,
}

impl Player {
    pub fn new(name: impl Into<String>, score: f32, priority: f32) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            priority,
            score,
            matches: 0.0,
            opponents: HashMap::new(),
        }
    }

    /// How many times this player has faced `other`.
    pub fn encounters_with(&self, other: PlayerId) -> u32 {
        self.opponents.get(&other).copied().unwrap_or(0)
    }
}

/// One side of a match: one player for singles, two for doubles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Side {
    Singles(PlayerId),
    Doubles(PlayerId, PlayerId),
}

impl Side {
    /// The players on this side, in presentation order.
    pub fn players(&self) -> Vec<PlayerId> {
        match self {
            Side::Singles(a) => vec![*a],
            Side::Doubles(a, b) => vec![*a, *b],
        }
    }

    pub fn is_doubles(&self) -> bool {
        matches!(self, Side::Doubles(..))
    }
}

/// Two sides of matching arity facing off on one court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub side1: Side,
    pub side2: Side,
}

impl Match {
    pub fn is_doubles(&self) -> bool {
        self.side1.is_doubles()
    }
}

/// Ordered sequence of matches, one per used court. Index `k` is
/// court `k + 1` (externally 1-based).
pub type MatchArrangement = Vec<Match>;
