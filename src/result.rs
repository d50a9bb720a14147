//! Outcome types for turns, wars and complete games.

use crate::game::Seat;

/// Result of a war.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarResult {
    /// The seat that took the pool.
    pub winner: Seat,
    /// Number of cards in the pool, table cards included.
    pub pool_size: usize,
    /// Number of ante rounds played (1 for a war settled on the first
    /// face-up comparison).
    pub rounds: usize,
    /// Whether the war ended because a player could not ante.
    pub forfeit: bool,
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// The seat that won the turn.
    pub winner: Seat,
    /// Number of cards moved to the winner's hand.
    pub cards_won: usize,
    /// The war fought, if the played cards tied.
    pub war: Option<WarResult>,
}

/// Result of playing a game out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// The seat holding all remaining cards, or `None` if the turn limit
    /// stopped the game first.
    pub winner: Option<Seat>,
    /// Number of turns played.
    pub turns: usize,
    /// Number of turns that went to war.
    pub wars: usize,
}
