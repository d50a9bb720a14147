//! Player and hand representation.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// A player and the ordered hand they hold.
///
/// Index 0 of the hand is the top card, the next one to be played. Cards won
/// are placed at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in the hand, top first.
    hand: VecDeque<Card>,
}

impl Player {
    /// Creates a new player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Places a card at the bottom of the hand.
    pub fn add_card_to_hand(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    /// Removes and returns the top card of the hand.
    ///
    /// Returns `None` if the hand is empty.
    pub fn play_card(&mut self) -> Option<Card> {
        self.hand.pop_front()
    }

    /// Removes and returns up to `size` cards from the top of the hand.
    ///
    /// A shorter deck is returned when the hand holds fewer cards; the game
    /// treats that as the player being unable to ante.
    pub fn deal_war_deck(&mut self, size: usize) -> Vec<Card> {
        let take = size.min(self.hand.len());
        self.hand.drain(..take).collect()
    }

    /// Drains `cards` onto the bottom of the hand.
    ///
    /// Cards are popped from the end of `cards`, so they land in reverse
    /// order. `cards` is left empty.
    pub fn add_multiple_cards_to_hand(&mut self, cards: &mut Vec<Card>) {
        while let Some(card) = cards.pop() {
            self.add_card_to_hand(card);
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn count_cards(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Returns the top card without playing it.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.hand.front()
    }

    /// Returns the hand, top card first.
    #[must_use]
    pub const fn hand(&self) -> &VecDeque<Card> {
        &self.hand
    }
}
