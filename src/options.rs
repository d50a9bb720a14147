//! Game configuration options.

/// Order in which a won war pool is placed under the winner's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoolOrder {
    /// The pool is drained from its end, so the last card staked ends up
    /// highest in the winner's hand.
    #[default]
    Reversed,
    /// The pool is appended in the order it was staked.
    InOrder,
}

/// Configuration options for a War game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::{GameOptions, PoolOrder};
///
/// let options = GameOptions::default()
///     .with_war_deck_size(3)
///     .with_pool_order(PoolOrder::InOrder)
///     .with_turn_limit(Some(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards each player antes per war round. The first one is turned face
    /// up and compared; a player who cannot ante this many forfeits the war.
    pub war_deck_size: usize,
    /// How a won pool is added to the winner's hand.
    pub pool_order: PoolOrder,
    /// Maximum number of turns [`Game::play`](crate::Game::play) will run.
    /// `None` plays until one hand is empty.
    pub turn_limit: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            war_deck_size: 4,
            pool_order: PoolOrder::Reversed,
            turn_limit: Some(10_000),
        }
    }
}

impl GameOptions {
    /// Sets the number of cards anted per war round.
    ///
    /// Sizes below 1 are raised to 1, since every round needs a face-up card.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_deck_size(3);
    /// assert_eq!(options.war_deck_size, 3);
    ///
    /// let options = GameOptions::default().with_war_deck_size(0);
    /// assert_eq!(options.war_deck_size, 1);
    /// ```
    #[must_use]
    pub const fn with_war_deck_size(mut self, size: usize) -> Self {
        self.war_deck_size = if size == 0 { 1 } else { size };
        self
    }

    /// Sets how won war pools are added to the winner's hand.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{GameOptions, PoolOrder};
    ///
    /// let options = GameOptions::default().with_pool_order(PoolOrder::InOrder);
    /// assert_eq!(options.pool_order, PoolOrder::InOrder);
    /// ```
    #[must_use]
    pub const fn with_pool_order(mut self, order: PoolOrder) -> Self {
        self.pool_order = order;
        self
    }

    /// Sets the turn limit for a full play-out.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_turn_limit(None);
    /// assert_eq!(options.turn_limit, None);
    /// ```
    #[must_use]
    pub const fn with_turn_limit(mut self, limit: Option<usize>) -> Self {
        self.turn_limit = limit;
        self
    }
}
