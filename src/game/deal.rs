use log::debug;

use crate::card::{Card, MAX_VALUE, MIN_VALUE, Suit};
use crate::error::DealError;

use super::Game;

impl Game {
    /// Appends a full 52 card deck, ordered by value and then by suit.
    ///
    /// No shuffling is performed; see [`Game::reorder_deck`].
    pub fn build_deck(&mut self) {
        for value in MIN_VALUE..=MAX_VALUE {
            for suit in Suit::ALL {
                self.add_card_to_deck(Card::new(suit, value));
            }
        }

        debug!("deck built, {} cards", self.count_cards());
    }

    /// Deals the whole deck to the two players.
    ///
    /// Cards are taken from the front of the deck. A card goes to the first
    /// player when an even number of cards remains after taking it, otherwise
    /// to the second, so a full deck splits 26/26.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are seated. The deck is
    /// left untouched in that case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        let [first, second] = self.players.as_mut_slice() else {
            return Err(DealError::NotEnoughPlayers);
        };

        while let Some(card) = self.deck.pop_front() {
            if self.deck.len() % 2 == 0 {
                first.add_card_to_hand(card);
            } else {
                second.add_card_to_hand(card);
            }
        }

        debug!(
            "dealt {} cards to {} and {} cards to {}",
            first.count_cards(),
            first.name(),
            second.count_cards(),
            second.name()
        );

        Ok(())
    }
}
