use alloc::vec::Vec;
use core::cmp::Ordering;

use log::{debug, trace, warn};

use crate::card::Card;
use crate::error::TurnError;
use crate::options::PoolOrder;
use crate::player::Player;
use crate::result::{GameSummary, TurnResult, WarResult};

use super::{Game, GameState, Seat};

impl Game {
    /// Returns the card with the strictly higher value, or `None` on a tie.
    ///
    /// Suits are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, Game, Suit};
    ///
    /// let queen = Card::new(Suit::Clubs, 12);
    /// let two = Card::new(Suit::Diamonds, 2);
    /// assert_eq!(Game::find_winning_card(&two, &queen), Some(&queen));
    /// assert_eq!(
    ///     Game::find_winning_card(&Card::new(Suit::Hearts, 7), &Card::new(Suit::Spades, 7)),
    ///     None
    /// );
    /// ```
    #[must_use]
    pub fn find_winning_card<'a>(first: &'a Card, second: &'a Card) -> Option<&'a Card> {
        match first.value.cmp(&second.value) {
            Ordering::Greater => Some(first),
            Ordering::Less => Some(second),
            Ordering::Equal => None,
        }
    }

    /// Maps the winning card of a face-off back to the seat that played it.
    fn winning_seat(first: &Card, second: &Card) -> Option<Seat> {
        Self::find_winning_card(first, second).map(|winner| {
            if core::ptr::eq(winner, first) {
                Seat::First
            } else {
                Seat::Second
            }
        })
    }

    /// Plays one turn: each player plays their top card and the higher card
    /// takes both. Tied cards start a [war](Game::war).
    ///
    /// The winner receives the first player's card, then the second's.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are seated or either hand
    /// is empty. No card is moved in that case.
    pub fn play_turn(&mut self) -> Result<TurnResult, TurnError> {
        let [first, second] = self.players.as_mut_slice() else {
            return Err(TurnError::NotEnoughPlayers);
        };
        if first.is_empty() || second.is_empty() {
            return Err(TurnError::EmptyHand);
        }
        let (Some(first_card), Some(second_card)) = (first.play_card(), second.play_card()) else {
            return Err(TurnError::EmptyHand);
        };

        trace!(
            "{} plays {:?}, {} plays {:?}",
            first.name(),
            first_card,
            second.name(),
            second_card
        );

        let Some(seat) = Self::winning_seat(&first_card, &second_card) else {
            let war = self.war(alloc::vec![first_card, second_card])?;
            return Ok(TurnResult {
                winner: war.winner,
                cards_won: war.pool_size,
                war: Some(war),
            });
        };

        let winner = if seat == Seat::First { first } else { second };
        winner.add_card_to_hand(first_card);
        winner.add_card_to_hand(second_card);

        Ok(TurnResult {
            winner: seat,
            cards_won: 2,
            war: None,
        })
    }

    /// Settles a war over `table_cards`.
    ///
    /// Each round both players ante a war deck of
    /// [`war_deck_size`](crate::GameOptions::war_deck_size) cards, which joins
    /// the pool behind the cards already at stake. A player who cannot ante a
    /// full deck forfeits the whole pool, the first player being checked
    /// first. Otherwise the first cards of the two war decks are compared:
    /// the higher card takes the pool, and another tie starts a new round
    /// with the enlarged pool at stake.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are seated.
    pub fn war(&mut self, table_cards: Vec<Card>) -> Result<WarResult, TurnError> {
        let ante = self.options.war_deck_size.max(1);
        let order = self.options.pool_order;
        let [first, second] = self.players.as_mut_slice() else {
            return Err(TurnError::NotEnoughPlayers);
        };

        let mut pool = table_cards;
        let mut rounds = 0;

        let (seat, forfeit) = loop {
            rounds += 1;

            let first_deck = first.deal_war_deck(ante);
            let second_deck = second.deal_war_deck(ante);
            let first_short = first_deck.len() < ante;
            let second_short = second_deck.len() < ante;
            let face_up = first_deck
                .first()
                .zip(second_deck.first())
                .map(|(a, b)| Self::winning_seat(a, b));

            pool.extend(first_deck);
            pool.extend(second_deck);

            if first_short {
                break (Seat::Second, true);
            }
            if second_short {
                break (Seat::First, true);
            }
            if let Some(seat) = face_up.flatten() {
                break (seat, false);
            }

            trace!("war round {rounds} tied, {} cards at stake", pool.len());
        };

        let pool_size = pool.len();
        let winner = if seat == Seat::First { first } else { second };
        Self::collect_pool(winner, &mut pool, order);

        debug!(
            "{} takes a {pool_size} card war after {rounds} round(s){}",
            winner.name(),
            if forfeit { " by forfeit" } else { "" }
        );

        Ok(WarResult {
            winner: seat,
            pool_size,
            rounds,
            forfeit,
        })
    }

    fn collect_pool(winner: &mut Player, pool: &mut Vec<Card>, order: PoolOrder) {
        match order {
            PoolOrder::Reversed => winner.add_multiple_cards_to_hand(pool),
            PoolOrder::InOrder => {
                for card in pool.drain(..) {
                    winner.add_card_to_hand(card);
                }
            }
        }
    }

    /// Returns the seat of the player still holding cards.
    ///
    /// This is the first seat unless the first player's hand is empty. It
    /// does not detect a game in progress; check [`Game::state`] for that.
    /// Returns `None` if fewer than two players are seated.
    #[must_use]
    pub fn winner_seat(&self) -> Option<Seat> {
        let [first, _] = self.players.as_slice() else {
            return None;
        };

        Some(if first.is_empty() {
            Seat::Second
        } else {
            Seat::First
        })
    }

    /// Returns the player still holding cards. See [`Game::winner_seat`].
    #[must_use]
    pub fn get_winner(&self) -> Option<&Player> {
        self.winner_seat().and_then(|seat| self.player(seat))
    }

    /// Plays turns until a player runs out of cards or the turn limit is
    /// reached.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two players are seated, the deck has
    /// not been dealt, or neither player holds any card.
    pub fn play(&mut self) -> Result<GameSummary, TurnError> {
        match self.state() {
            GameState::WaitingForPlayers => return Err(TurnError::NotEnoughPlayers),
            GameState::Dealing => return Err(TurnError::NotDealt),
            GameState::Playing | GameState::Finished => {}
        }
        if self.players.iter().all(Player::is_empty) {
            return Err(TurnError::EmptyHand);
        }

        let mut turns = 0;
        let mut wars = 0;

        while self.state() == GameState::Playing {
            if self.options.turn_limit.is_some_and(|limit| turns >= limit) {
                warn!("turn limit reached after {turns} turns, stopping");
                return Ok(GameSummary {
                    winner: None,
                    turns,
                    wars,
                });
            }

            let result = self.play_turn()?;
            turns += 1;
            if result.war.is_some() {
                wars += 1;
            }
        }

        let winner = self.winner_seat();

        if let Some(player) = winner.and_then(|seat| self.player(seat)) {
            debug!("{} wins after {turns} turns and {wars} wars", player.name());
        }

        Ok(GameSummary {
            winner,
            turns,
            wars,
        })
    }
}
