//! Card types and deck constants.

/// Card suit.
///
/// Suits never take part in comparisons; they only tell apart cards of the
/// same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in the order a freshly built deck lists them for each value.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The value of the card (2..=10 for pips, 11 = Jack, 12 = Queen,
    /// 13 = King, 14 = Ace).
    pub value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. Values outside
    /// `MIN_VALUE..=MAX_VALUE` are accepted and compare numerically.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }
}

/// Lowest card value (deuce).
pub const MIN_VALUE: u8 = 2;

/// Highest card value (ace).
pub const MAX_VALUE: u8 = 14;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
