//! Table configuration and dealing.
//!
//! The community cards come off the deck first, then two hole cards per
//! player in seat order.

use crate::deck::{Deck, DeckKind};
use crate::hand::{Board, HandError, HoleCards, BOARD_SIZE};
use crate::showdown::{Showdown, ShowdownError};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Hole cards dealt to each player.
pub const HOLE_CARDS: usize = 2;

/// Most players a deck can seat once the board is out: 23 standard, 30 extended.
pub const fn max_players(size: usize) -> usize {
    size.saturating_sub(BOARD_SIZE) / HOLE_CARDS
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("a table needs at least one player")]
    NoPlayers,
    #[error("{players} players do not fit a {deck} deck (max {max})")]
    TooManyPlayers { players: usize, deck: DeckKind, max: usize },
}

/// How a table is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub players: usize,
    pub deck: DeckKind,
    /// Seed for reproducible shuffles; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { players: 6, deck: DeckKind::Standard, seed: None }
    }
}

impl TableConfig {
    pub fn max_players(&self) -> usize {
        max_players(self.deck.size())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        let max = self.max_players();
        if self.players > max {
            return Err(ConfigError::TooManyPlayers { players: self.players, deck: self.deck, max });
        }
        Ok(())
    }

    /// RNG for this table: seeded when a seed is configured.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    /// Shuffle a fresh deck with `rng` and deal one hand.
    pub fn deal_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Deal, DealError> {
        self.validate()?;
        let mut deck = Deck::new(self.deck);
        deck.shuffle_with(rng);
        deal(&mut deck, self.players)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("deck has {available} cards, {needed} needed")]
    NotEnoughCards { needed: usize, available: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// One dealt hand: the board and every player's hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub board: Board,
    pub holes: Vec<HoleCards>,
}

impl Deal {
    pub fn players(&self) -> usize {
        self.holes.len()
    }

    pub fn showdown(&self) -> Result<Showdown, ShowdownError> {
        Showdown::evaluate(&self.board, &self.holes)
    }
}

/// Deal the board and `players` hands from the top of `deck`.
///
/// ```
/// use holdem_showdown::deck::Deck;
/// use holdem_showdown::table::deal;
///
/// let mut deck = Deck::standard();
/// deck.shuffle_seeded(3);
/// let hand = deal(&mut deck, 4).unwrap();
/// assert_eq!(hand.board.len(), 5);
/// assert_eq!(hand.players(), 4);
/// assert_eq!(deck.len(), 52 - 5 - 8);
/// ```
pub fn deal(deck: &mut Deck, players: usize) -> Result<Deal, DealError> {
    if players == 0 {
        return Err(ConfigError::NoPlayers.into());
    }
    let needed = BOARD_SIZE + HOLE_CARDS * players;
    if deck.len() < needed {
        return Err(DealError::NotEnoughCards { needed, available: deck.len() });
    }

    let board = Board::try_new(deck.draw_n(BOARD_SIZE))?;
    let holes = (0..players)
        .map(|_| HoleCards::from_slice(&deck.draw_n(HOLE_CARDS)))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("dealt {} players from a {} deck, {} cards left", players, deck.kind(), deck.len());
    Ok(Deal { board, holes })
}
