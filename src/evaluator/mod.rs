//! Hand classification, comparison and best-hand selection.
//!
//! [`classify_five`] turns five cards into a [`ClassifiedHand`]; [`compare`]
//! totally orders classified hands; [`select_best_seven`] picks the strongest
//! five-card subset out of seven cards.

pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use rank_groups::RankGroups;

use crate::cards::{Card, Rank};
use crate::hand::{seven_cards, validate_holdem, Board, HandError, HoleCards};
use combinations::Combinations;
use core::cmp::Ordering;
use hand_analysis::HandAnalysis;
use log::trace;
use std::collections::HashSet;

/// Cards in a classified hand.
pub const HAND_SIZE: usize = 5;
/// Cards a Hold'em player chooses from: two hole cards plus five on the board.
pub const HOLDEM_CARDS: usize = 7;

/// Poker hand category from weakest to strongest. The ordinal is the strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    /// Only reachable with the extended (five-suit) deck.
    FiveOfAKind = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::FiveOfAKind,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// The classification of exactly five cards.
///
/// Ordering and equality follow [`compare`]: category first, then the
/// tie-break key. Two hands with different suits can therefore be equal.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ClassifiedHand {
    pub category: Category,
    /// Ascending by poker rank; for the wheel, ascending by natural rank (Ace first).
    pub cards: [Card; 5],
    pub(crate) rank_counts: rank_groups::RankCounts,
    pub(crate) groups: RankGroups,
    pub(crate) is_flush: bool,
    pub(crate) is_straight: bool,
    pub(crate) is_wheel: bool,
    pub(crate) tie_break: [u8; 5],
}

impl ClassifiedHand {
    /// How many of the five cards have `rank`.
    pub fn rank_count(&self, rank: Rank) -> u8 {
        self.rank_counts[rank.poker() as usize]
    }

    /// Ranks grouped by occurrence count.
    pub fn groups(&self) -> &RankGroups {
        &self.groups
    }

    pub fn is_flush(&self) -> bool {
        self.is_flush
    }

    pub fn is_straight(&self) -> bool {
        self.is_straight
    }

    /// True for A-2-3-4-5, the lowest straight.
    pub fn is_wheel(&self) -> bool {
        self.is_wheel
    }

    /// Rank values compared left to right between hands of one category.
    ///
    /// Grouped hands list the most numerous group first, each group strongest
    /// first, then zeros. Straights list their five card values from the top,
    /// with the wheel's Ace counted as 1.
    pub fn tie_break(&self) -> [u8; 5] {
        self.tie_break
    }
}

impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ClassifiedHand {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for ClassifiedHand {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected {expected} cards, got {actual}")]
    InvalidInputSize { expected: usize, actual: usize },
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("not enough cards to evaluate")]
    NotEnoughCards,
}

/// Classify exactly five cards.
///
/// The cards must be distinct; this is not checked here (see [`classify`]).
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::evaluator::{classify_five, Category};
///
/// let cards: [_; 5] = parse_cards("Ah Ad Kc Ks Kh").unwrap().try_into().unwrap();
/// let hand = classify_five(&cards);
/// assert_eq!(hand.category, Category::FullHouse);
/// assert_eq!(hand.tie_break()[..2], [13, 14]);
/// ```
pub fn classify_five(cards: &[Card; 5]) -> ClassifiedHand {
    let analysis = HandAnalysis::new(cards);
    let category = detector::detect(&analysis);
    analysis.into_classified(category)
}

/// Classify a slice of cards, rejecting anything but five distinct cards.
pub fn classify(cards: &[Card]) -> Result<ClassifiedHand, EvalError> {
    let five: [Card; HAND_SIZE] = checked(cards)?;
    Ok(classify_five(&five))
}

/// Total order over classified hands: category ordinal, then the tie-break
/// key element by element. `Equal` is a genuine tie.
pub fn compare(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    a.category.cmp(&b.category).then_with(|| a.tie_break.cmp(&b.tie_break))
}

/// Best five-card hand out of seven cards.
///
/// Every one of the 21 subsets is classified. When several subsets tie for
/// best, the first in lexicographic index order is kept. Cards must be
/// distinct (see [`select_best`]).
pub fn select_best_seven(cards: &[Card; 7]) -> ClassifiedHand {
    let mut best: Option<ClassifiedHand> = None;

    for indices in Combinations::<HAND_SIZE>::new(HOLDEM_CARDS) {
        let hand = classify_five(&indices.map(|i| cards[i]));
        trace!("subset {indices:?}: {:?} {:?}", hand.category, hand.tie_break);

        if best.as_ref().map_or(true, |b| hand > *b) {
            best = Some(hand);
        }
    }

    best.unwrap_or_else(|| classify_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

/// Best five-card hand out of a slice, rejecting anything but seven distinct cards.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::evaluator::{select_best, Category, EvalError};
///
/// let cards = parse_cards("9c 9d 9h 9s 5c 6d 7h").unwrap();
/// assert_eq!(select_best(&cards).unwrap().category, Category::FourOfAKind);
///
/// let short = parse_cards("9c 9d").unwrap();
/// assert!(matches!(select_best(&short), Err(EvalError::InvalidInputSize { .. })));
/// ```
pub fn select_best(cards: &[Card]) -> Result<ClassifiedHand, EvalError> {
    let seven: [Card; HOLDEM_CARDS] = checked(cards)?;
    Ok(select_best_seven(&seven))
}

/// Evaluate a Hold'em hand given hole cards and a complete board.
///
/// ```
/// use holdem_showdown::evaluator::{evaluate_holdem, Category};
/// use holdem_showdown::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<ClassifiedHand, EvalError> {
    validate_holdem(hole, board)?;
    let seven = seven_cards(hole, board).ok_or(EvalError::NotEnoughCards)?;
    Ok(select_best_seven(&seven))
}

/// Compare two Hold'em hands on a shared board.
///
/// ```
/// use holdem_showdown::evaluator::compare_holdem;
/// use holdem_showdown::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "As Ah".parse().unwrap();
/// let b: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}

/// Require exactly `N` pairwise distinct cards.
fn checked<const N: usize>(cards: &[Card]) -> Result<[Card; N], EvalError> {
    let fixed: [Card; N] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidInputSize { expected: N, actual: cards.len() })?;
    let mut seen = HashSet::with_capacity(N);
    if let Some(dup) = fixed.iter().find(|c| !seen.insert(**c)) {
        return Err(EvalError::DuplicateCard(*dup));
    }
    Ok(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn five(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn hole(a: Card, b: Card) -> HoleCards {
        HoleCards::try_new(a, b).expect("valid hole cards")
    }

    #[test]
    fn not_enough_cards_errors() {
        let hole = hole(Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades));
        let board = Board::new(vec![Card::new(Rank::Two, Suit::Clubs)]);
        assert_eq!(evaluate_holdem(&hole, &board).unwrap_err(), EvalError::NotEnoughCards);
    }

    #[test]
    fn overlap_is_invalid_hand() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let hole = hole(a, Card::new(Rank::King, Suit::Spades));
        let board: Board = "As 2c 3d 4h 9s".parse().unwrap();
        let err = compare_holdem(&hole, &hole, &board).unwrap_err();
        assert_eq!(err, EvalError::InvalidHand(HandError::Overlap(a)));
    }

    #[test]
    fn classify_checks_size_and_duplicates() {
        let four = parse_cards("As Kd Qc Jh").unwrap();
        assert_eq!(
            classify(&four).unwrap_err(),
            EvalError::InvalidInputSize { expected: 5, actual: 4 }
        );

        let dup = parse_cards("As Kd Qc Jh As").unwrap();
        assert_eq!(
            classify(&dup).unwrap_err(),
            EvalError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades))
        );

        let eight = parse_cards("As Kd Qc Jh Ts 9s 8s 7s").unwrap();
        assert!(matches!(
            select_best(&eight),
            Err(EvalError::InvalidInputSize { expected: 7, actual: 8 })
        ));
    }

    #[test]
    fn classified_hand_exposes_analysis() {
        let hand = classify_five(&five("Kh As Kd Ac Ks"));
        assert_eq!(hand.category, Category::FullHouse);
        assert_eq!(hand.rank_count(Rank::King), 3);
        assert_eq!(hand.rank_count(Rank::Ace), 2);
        assert_eq!(hand.rank_count(Rank::Two), 0);
        assert_eq!(hand.groups().with_count(3), &[Rank::King]);
        assert_eq!(hand.tie_break(), [13, 14, 0, 0, 0]);
        assert!(!hand.is_flush());
        assert!(!hand.is_straight());
        assert_eq!(hand.cards.map(Card::rank)[0], Rank::King);
    }

    #[test]
    fn wheel_is_flagged_and_lowest() {
        let wheel = classify_five(&five("Ac 2d 3h 4s 5c"));
        let six_high = classify_five(&five("2c 3d 4h 5s 6c"));
        assert_eq!(wheel.category, Category::Straight);
        assert!(wheel.is_wheel());
        assert_eq!(wheel.tie_break(), [5, 4, 3, 2, 1]);
        assert_eq!(wheel.cards[0].rank(), Rank::Ace);
        assert_eq!(compare(&wheel, &six_high), Ordering::Less);
    }

    #[test]
    fn category_beats_kickers() {
        let low_flush = classify_five(&five("2h 3h 4h 5h 7h"));
        let broadway = classify_five(&five("Ah Kd Qc Js Th"));
        assert_eq!(broadway.category, Category::Straight);
        assert!(low_flush > broadway);
    }

    #[test]
    fn suits_do_not_break_ties() {
        let a = classify_five(&five("Ah Kd 9c 7s 2h"));
        let b = classify_five(&five("As Kc 9d 7h 2c"));
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn seven_card_selection_keeps_best() {
        let cards: [Card; 7] = parse_cards("Kc Kd Kh Ac Ad 2c 3c").unwrap().try_into().unwrap();
        let best = select_best_seven(&cards);
        assert_eq!(best.category, Category::FullHouse);
        assert_eq!(best.tie_break(), [13, 14, 0, 0, 0]);
    }

    #[test]
    fn five_of_a_kind_outranks_straight_flush() {
        let quints = classify_five(&five("7c 7d 7h 7s 7x"));
        let royal = classify_five(&five("Ah Kh Qh Jh Th"));
        assert_eq!(quints.category, Category::FiveOfAKind);
        assert!(quints > royal);
    }
}
