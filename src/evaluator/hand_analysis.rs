use super::rank_groups::{count_ranks, RankCounts, RankGroups};
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;
use crate::evaluator::{Category, ClassifiedHand};

/// Pre-computed facts about a five-card hand, shared by every category rule.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ascending by poker rank (then suit); ascending by natural rank for the wheel.
    pub sorted_cards: [Card; 5],
    pub rank_counts: RankCounts,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_unstable();

        let rank_counts = count_ranks(&sorted_cards);
        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&sorted_cards.map(Card::rank));

        if straight_info.is_wheel {
            // the Ace plays low
            sorted_cards.sort_unstable_by_key(|c| (c.rank().natural(), c.suit()));
        }

        Self { sorted_cards, rank_counts, rank_groups, suit_info, straight_info }
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush()
    }

    pub fn is_straight(&self) -> bool {
        self.straight_info.is_straight
    }

    /// Tie-break key for `category`. Straights compare by their card values from
    /// the top down, with the wheel's Ace worth 1; everything else by rank group.
    pub fn tie_break(&self, category: Category) -> [u8; 5] {
        match category {
            Category::Straight | Category::StraightFlush => {
                let wheel = self.straight_info.is_wheel;
                let mut key = self.sorted_cards.map(|c| {
                    if wheel {
                        c.rank().natural()
                    } else {
                        c.rank().poker()
                    }
                });
                key.sort_unstable_by(|a, b| b.cmp(a));
                key
            }
            _ => self.rank_groups.tie_break(),
        }
    }

    pub fn into_classified(self, category: Category) -> ClassifiedHand {
        let tie_break = self.tie_break(category);
        ClassifiedHand {
            category,
            cards: self.sorted_cards,
            rank_counts: self.rank_counts,
            groups: self.rank_groups,
            is_flush: self.suit_info.is_flush(),
            is_straight: self.straight_info.is_straight,
            is_wheel: self.straight_info.is_wheel,
            tie_break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_royal_flush_analysis() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Ten, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(analysis.is_flush());
        assert!(analysis.is_straight());
        assert!(!analysis.straight_info.is_wheel);
        assert_eq!(analysis.rank_groups.groups_of(1), 5);
        assert_eq!(analysis.tie_break(Category::StraightFlush), [14, 13, 12, 11, 10]);
    }

    #[test]
    fn test_cards_sorted_ascending() {
        let cards = [
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);
        let ranks = analysis.sorted_cards.map(Card::rank);
        assert_eq!(ranks, [Rank::Three, Rank::Five, Rank::Nine, Rank::King, Rank::Ace]);
    }

    #[test]
    fn test_wheel_sorts_ace_first() {
        let cards = [
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Three, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Four, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);
        assert!(analysis.straight_info.is_wheel);
        let ranks = analysis.sorted_cards.map(Card::rank);
        assert_eq!(ranks, [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert_eq!(analysis.tie_break(Category::Straight), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_full_house_counts() {
        let cards = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);
        assert_eq!(analysis.rank_counts[13], 3);
        assert_eq!(analysis.rank_counts[14], 2);
        assert_eq!(analysis.tie_break(Category::FullHouse), [13, 14, 0, 0, 0]);
    }

    #[test]
    fn test_flush_is_not_straight() {
        let cards = [
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);
        assert!(analysis.is_flush());
        assert!(!analysis.is_straight());
        assert_eq!(analysis.tie_break(Category::Flush), [14, 11, 9, 5, 2]);
    }
}
