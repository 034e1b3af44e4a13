use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

/// Number of community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole card {0} is also on the board")]
    Overlap(Card),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_showdown::cards::{Card, Rank, Suit};
/// use holdem_showdown::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

/// Community cards shared by every player. Holds up to five distinct cards.
///
/// ```
/// use holdem_showdown::cards::{Card, Rank, Suit};
/// use holdem_showdown::hand::Board;
///
/// let board = Board::try_new(vec![
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Clubs),
/// ]).unwrap();
/// assert_eq!(board.len(), 3);
/// assert!(!board.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Build a board without validation; use [`validate_holdem`] before evaluating it.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        let board = Self { cards };
        board.check()?;
        Ok(board)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once all five community cards are out.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == BOARD_SIZE
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    fn check(&self) -> Result<(), HandError> {
        if self.cards.len() > BOARD_SIZE {
            return Err(HandError::TooManyBoardCards(self.cards.len()));
        }
        let set: HashSet<Card> = self.cards.iter().copied().collect();
        if set.len() != self.cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_new(parse_cards(s)?)
    }
}

/// Validate that a pair of hole cards and a board can share a table.
/// Allows 0..=5 board cards. Ensures uniqueness across all cards.
///
/// ```
/// use holdem_showdown::hand::{validate_holdem, Board, HoleCards};
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// validate_holdem(&hole, &board).unwrap();
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    // boards built via `new` skip the constructor checks
    board.check()?;
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateHoleCards);
    }
    if let Some(card) = hole.as_array().into_iter().find(|c| board.contains(*c)) {
        return Err(HandError::Overlap(card));
    }
    Ok(())
}

/// Join hole cards and a complete board into the seven cards a player plays from.
/// Returns `None` while the board is incomplete.
pub fn seven_cards(hole: &HoleCards, board: &Board) -> Option<[Card; 7]> {
    match board.as_slice() {
        [b0, b1, b2, b3, b4] => Some([hole.first(), hole.second(), *b0, *b1, *b2, *b3, *b4]),
        _ => None,
    }
}
