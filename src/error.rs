//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than two players are seated.
    #[error("two players must be seated before dealing")]
    NotEnoughPlayers,
}

/// Errors that can occur while playing turns and wars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Fewer than two players are seated.
    #[error("two players must be seated to play")]
    NotEnoughPlayers,
    /// A player has no card left to play.
    #[error("a player has no cards left to play")]
    EmptyHand,
    /// The deck still holds cards that have not been dealt.
    #[error("the deck has not been dealt")]
    NotDealt,
}
