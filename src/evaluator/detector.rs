use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// One row of the category table: a category and the test that admits a hand into it.
#[derive(Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub matches: fn(&HandAnalysis) -> bool,
}

/// Category rules from weakest to strongest.
///
/// The tests overlap (a full house also holds a pair and trips), so a hand's
/// category is the last rule in this order that matches it.
pub const CATEGORY_RULES: [CategoryRule; 10] = [
    CategoryRule { category: Category::HighCard, matches: |_| true },
    CategoryRule { category: Category::Pair, matches: |a| a.rank_groups.groups_of(2) == 1 },
    CategoryRule { category: Category::TwoPair, matches: |a| a.rank_groups.groups_of(2) == 2 },
    CategoryRule {
        category: Category::ThreeOfAKind,
        matches: |a| a.rank_groups.groups_of(3) == 1,
    },
    CategoryRule { category: Category::Straight, matches: |a| a.is_straight() },
    CategoryRule { category: Category::Flush, matches: |a| a.is_flush() },
    CategoryRule {
        category: Category::FullHouse,
        matches: |a| a.rank_groups.groups_of(3) == 1 && a.rank_groups.groups_of(2) == 1,
    },
    CategoryRule {
        category: Category::FourOfAKind,
        matches: |a| a.rank_groups.groups_of(4) == 1,
    },
    CategoryRule {
        category: Category::StraightFlush,
        matches: |a| a.is_straight() && a.is_flush(),
    },
    CategoryRule {
        category: Category::FiveOfAKind,
        matches: |a| a.rank_groups.groups_of(5) == 1,
    },
];

/// Scan the table weakest to strongest and keep the last match.
pub fn detect(analysis: &HandAnalysis) -> Category {
    CATEGORY_RULES
        .iter()
        .filter(|rule| (rule.matches)(analysis))
        .last()
        .map_or(Category::HighCard, |rule| rule.category)
}
