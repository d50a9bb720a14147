//! Seat and game state types.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player seated.
    First,
    /// The second player seated.
    Second,
}

impl Seat {
    /// Returns the index of this seat in the players list.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Returns the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Game state, derived from the seated players and the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fewer than two players are seated.
    WaitingForPlayers,
    /// Both seats are taken and the deck still holds cards to deal.
    Dealing,
    /// Both players hold cards.
    Playing,
    /// One player has run out of cards.
    Finished,
}
