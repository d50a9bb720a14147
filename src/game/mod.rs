//! Game engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::warn;

use crate::card::Card;
use crate::options::GameOptions;
use crate::player::Player;

mod deal;
pub mod state;
mod turn;

pub use state::{GameState, Seat};

/// Maximum number of players at the table.
pub const MAX_PLAYERS: usize = 2;

/// A War game engine that owns the deck and both players.
///
/// Cards are only ever moved between the deck, the hands and the pool of a
/// war in progress, so the total number of cards never changes after the
/// deck is built.
#[derive(Debug, Clone, Default)]
pub struct Game {
    /// Seated players, at most [`MAX_PLAYERS`].
    players: Vec<Player>,
    /// Undealt cards, front first.
    deck: VecDeque<Card>,
    /// Game options.
    options: GameOptions,
}

impl Game {
    /// Creates a new game with no players and an empty deck.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default());
    /// assert!(game.players().is_empty());
    /// assert_eq!(game.count_cards(), 0);
    /// ```
    #[must_use]
    pub const fn new(options: GameOptions) -> Self {
        Self {
            players: Vec::new(),
            deck: VecDeque::new(),
            options,
        }
    }

    /// Seats a player.
    ///
    /// Once both seats are taken further players are ignored and `false` is
    /// returned.
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.players.len() >= MAX_PLAYERS {
            warn!("table is full, ignoring player {}", player.name());
            return false;
        }

        self.players.push(player);
        true
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in the given seat, if seated.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// Returns the undealt cards, front first.
    #[must_use]
    pub const fn deck(&self) -> &VecDeque<Card> {
        &self.deck
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn count_cards(&self) -> usize {
        self.deck.len()
    }

    /// Appends a card to the end of the deck.
    pub fn add_card_to_deck(&mut self, card: Card) {
        self.deck.push_back(card);
    }

    /// Lets the caller reorder the undealt cards in place.
    ///
    /// The engine never shuffles; this is the hook for callers that want to.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::Game;
    ///
    /// let mut game = Game::default();
    /// game.build_deck();
    /// game.reorder_deck(|cards| cards.reverse());
    /// assert_eq!(game.deck().front().map(|c| c.value), Some(14));
    /// ```
    pub fn reorder_deck<F>(&mut self, reorder: F)
    where
        F: FnOnce(&mut [Card]),
    {
        reorder(self.deck.make_contiguous());
    }

    /// Returns the number of cards in the deck and all hands combined.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.players.iter().map(Player::count_cards).sum::<usize>()
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        match self.players.as_slice() {
            [first, second] => {
                if !self.deck.is_empty() {
                    GameState::Dealing
                } else if first.is_empty() || second.is_empty() {
                    GameState::Finished
                } else {
                    GameState::Playing
                }
            }
            _ => GameState::WaitingForPlayers,
        }
    }
}
