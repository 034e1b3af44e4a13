use crate::cards::Rank;

/// Straight detection for a five-card hand.
///
/// A straight needs five distinct ranks that either span exactly four poker
/// values (no gaps) or are the natural ranks 1-2-3-4-5 (the wheel, Ace low).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub is_wheel: bool,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, is_wheel: false };

    /// Ranks may come in any order.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut poker = ranks.map(Rank::poker);
        poker.sort_unstable();
        if poker.windows(2).any(|w| w[0] == w[1]) {
            return Self::NONE;
        }
        if poker[4] - poker[0] == 4 {
            return StraightInfo { is_straight: true, is_wheel: false };
        }

        let mut natural = ranks.map(Rank::natural);
        natural.sort_unstable();
        if natural == [1, 2, 3, 4, 5] {
            return StraightInfo { is_straight: true, is_wheel: true };
        }
        Self::NONE
    }
}
