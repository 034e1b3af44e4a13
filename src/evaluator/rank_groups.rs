use crate::cards::{Card, Rank};

/// Per-rank occurrence counts, indexed by poker value (2..=14). The Ace always lands in bucket 14.
pub type RankCounts = [u8; 15];

/// Largest number of cards that can share one rank inside a five-card hand.
pub const MAX_GROUP: usize = 5;

/// Count occurrences of each rank.
pub fn count_ranks(cards: &[Card]) -> RankCounts {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank().poker() as usize] += 1;
    }
    counts
}

/// Ranks grouped by how many cards share them, each group strongest-first.
///
/// Example: KKKAA groups as {3: [King], 2: [Ace]}; AKQ72 as {1: [A, K, Q, 7, 2]}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    by_count: [Vec<Rank>; MAX_GROUP + 1],
}

impl RankGroups {
    pub fn from_counts(counts: &RankCounts) -> Self {
        let mut by_count: [Vec<Rank>; MAX_GROUP + 1] = Default::default();
        for rank in Rank::ALL.iter().rev().copied() {
            let count = counts[rank.poker() as usize] as usize;
            if (1..=MAX_GROUP).contains(&count) {
                by_count[count].push(rank);
            }
        }
        Self { by_count }
    }

    /// Ranks that occur exactly `count` times, strongest first.
    pub fn with_count(&self, count: usize) -> &[Rank] {
        self.by_count.get(count).map(Vec::as_slice).unwrap_or(&[])
    }

    /// How many distinct ranks occur exactly `count` times.
    pub fn groups_of(&self, count: usize) -> usize {
        self.with_count(count).len()
    }

    /// Number of distinct ranks in the hand.
    pub fn distinct(&self) -> usize {
        self.by_count.iter().map(Vec::len).sum()
    }

    /// Tie-break key by multiplicity: the most numerous group first, each group
    /// strongest-first, padded with zeros to five entries.
    pub fn tie_break(&self) -> [u8; 5] {
        let mut key = [0u8; 5];
        let ranks = (1..=MAX_GROUP).rev().flat_map(|count| self.with_count(count).iter());
        for (slot, rank) in key.iter_mut().zip(ranks) {
            *slot = rank.poker();
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> RankCounts {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn quad_group() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 4), (13, 1)])); // AAAAK
        assert_eq!(groups.with_count(4), &[Rank::Ace]);
        assert_eq!(groups.with_count(1), &[Rank::King]);
        assert_eq!(groups.groups_of(3), 0);
        assert_eq!(groups.tie_break(), [14, 13, 0, 0, 0]);
    }

    #[test]
    fn full_house_trips_before_pair() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 2), (13, 3)])); // AAKKK
        assert_eq!(groups.groups_of(3), 1);
        assert_eq!(groups.groups_of(2), 1);
        assert_eq!(groups.tie_break(), [13, 14, 0, 0, 0]);
    }

    #[test]
    fn two_pair_sorted_strongest_first() {
        let groups = RankGroups::from_counts(&make_counts(&[(5, 2), (13, 2), (10, 1)])); // 55KKT
        assert_eq!(groups.with_count(2), &[Rank::King, Rank::Five]);
        assert_eq!(groups.with_count(1), &[Rank::Ten]);
        assert_eq!(groups.tie_break(), [13, 5, 10, 0, 0]);
    }

    #[test]
    fn one_pair_kickers() {
        let groups = RankGroups::from_counts(&make_counts(&[(8, 2), (14, 1), (12, 1), (5, 1)]));
        assert_eq!(groups.with_count(2), &[Rank::Eight]);
        assert_eq!(groups.with_count(1), &[Rank::Ace, Rank::Queen, Rank::Five]);
        assert_eq!(groups.distinct(), 4);
        assert_eq!(groups.tie_break(), [8, 14, 12, 5, 0]);
    }

    #[test]
    fn high_card_keeps_all_five() {
        let groups =
            RankGroups::from_counts(&make_counts(&[(5, 1), (14, 1), (10, 1), (7, 1), (2, 1)]));
        assert_eq!(groups.groups_of(1), 5);
        assert_eq!(groups.tie_break(), [14, 10, 7, 5, 2]);
    }

    #[test]
    fn five_of_a_kind_group() {
        let groups = RankGroups::from_counts(&make_counts(&[(9, 5)]));
        assert_eq!(groups.with_count(5), &[Rank::Nine]);
        assert_eq!(groups.distinct(), 1);
        assert_eq!(groups.tie_break(), [9, 0, 0, 0, 0]);
    }

    #[test]
    fn out_of_range_count_is_empty() {
        let groups = RankGroups::from_counts(&make_counts(&[(9, 1)]));
        assert!(groups.with_count(0).is_empty());
        assert!(groups.with_count(7).is_empty());
    }

    #[test]
    fn ace_counts_in_high_bucket() {
        use crate::cards::Suit;
        let counts = count_ranks(&[
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Two, Suit::Hearts),
        ]);
        assert_eq!(counts[14], 2);
        assert_eq!(counts[1], 0);
        assert_eq!(counts[2], 1);
    }
}
