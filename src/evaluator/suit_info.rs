use crate::cards::{Card, Suit};

/// Suit distribution of a hand. A flush needs every card in one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub counts: [u8; 5],
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 5];
        for card in cards {
            counts[Self::index(card.suit())] += 1;
        }
        let flush_suit = Suit::EXTENDED
            .into_iter()
            .find(|&s| !cards.is_empty() && counts[Self::index(s)] as usize == cards.len());
        SuitInfo { counts, flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    fn index(suit: Suit) -> usize {
        match suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
            Suit::Sardines => 4,
        }
    }
}
