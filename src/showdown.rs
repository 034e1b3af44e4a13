//! Ranking several players' hands against a shared board.

use crate::cards::Card;
use crate::evaluator::{compare, select_best_seven, ClassifiedHand, EvalError};
use crate::hand::{seven_cards, Board, HoleCards};
use core::cmp::Ordering;
use log::debug;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("showdown needs at least one player")]
    NoPlayers,
    #[error("board has {0} cards, showdown needs 5")]
    IncompleteBoard(usize),
    #[error("card {0} is dealt more than once")]
    DuplicateCard(Card),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Indices of the hands that are not strictly beaten by any other hand.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::evaluator::select_best;
/// use holdem_showdown::showdown::winners;
///
/// let a = select_best(&parse_cards("Ah Ad 2c 7d 9h Js Kc").unwrap()).unwrap();
/// let b = select_best(&parse_cards("As Ac 2c 7d 9h Js Kc").unwrap()).unwrap();
/// let c = select_best(&parse_cards("Qh 3d 2c 7d 9h Js Kc").unwrap()).unwrap();
/// assert_eq!(winners(&[a, b, c]), vec![0, 1]);
/// ```
pub fn winners(hands: &[ClassifiedHand]) -> Vec<usize> {
    let Some(best) = hands.iter().max_by(|a, b| compare(a, b)) else {
        return Vec::new();
    };
    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| compare(h, best) == Ordering::Equal)
        .map(|(i, _)| i)
        .collect()
}

/// Result of a showdown: every player's best hand and who won.
#[derive(Debug, Clone)]
pub struct Showdown {
    hands: Vec<ClassifiedHand>,
    winners: Vec<usize>,
}

impl Showdown {
    /// Evaluate every player's best hand on a complete board.
    ///
    /// Rejects an empty table, an incomplete board and any card that appears
    /// twice across the board and all hole cards.
    pub fn evaluate(board: &Board, players: &[HoleCards]) -> Result<Self, ShowdownError> {
        if players.is_empty() {
            return Err(ShowdownError::NoPlayers);
        }
        if !board.is_complete() {
            return Err(ShowdownError::IncompleteBoard(board.len()));
        }
        let mut seen: HashSet<Card> = HashSet::with_capacity(board.len() + 2 * players.len());
        let all_cards =
            board.as_slice().iter().copied().chain(players.iter().flat_map(HoleCards::as_array));
        for card in all_cards {
            if !seen.insert(card) {
                return Err(ShowdownError::DuplicateCard(card));
            }
        }

        let hands = players
            .iter()
            .map(|hole| {
                seven_cards(hole, board)
                    .map(|seven| select_best_seven(&seven))
                    .ok_or(ShowdownError::IncompleteBoard(board.len()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_hands(hands))
    }

    /// Rank hands that were already classified, one per player.
    pub fn from_hands(hands: Vec<ClassifiedHand>) -> Self {
        let winners = winners(&hands);
        debug!("showdown of {} players, winners {:?}", hands.len(), winners);
        Self { hands, winners }
    }

    /// Each player's best hand, in seat order.
    pub fn hands(&self) -> &[ClassifiedHand] {
        &self.hands
    }

    /// Seats whose hand no other player beats, ascending.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// More than one winner: the pot is split.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    pub fn is_winner(&self, seat: usize) -> bool {
        self.winners.contains(&seat)
    }

    /// Seats grouped by finishing place, best first. Tied seats share a place.
    pub fn standings(&self) -> Vec<Vec<usize>> {
        let mut order: Vec<usize> = (0..self.hands.len()).collect();
        // stable sort keeps seat order inside a tie
        order.sort_by(|&a, &b| compare(&self.hands[b], &self.hands[a]));

        let mut places: Vec<Vec<usize>> = Vec::new();
        for seat in order {
            match places.last_mut() {
                Some(place) if compare(&self.hands[place[0]], &self.hands[seat]).is_eq() => {
                    place.push(seat)
                }
                _ => places.push(vec![seat]),
            }
        }
        places
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Category;

    fn holes(list: &[&str]) -> Vec<HoleCards> {
        list.iter().map(|s| s.parse().expect("valid hole cards")).collect()
    }

    #[test]
    fn winners_of_nothing_is_empty() {
        assert!(winners(&[]).is_empty());
    }

    #[test]
    fn single_player_always_wins() {
        let board: Board = "2c 7d 9h Js Kc".parse().unwrap();
        let sd = Showdown::evaluate(&board, &holes(&["3d 4h"])).unwrap();
        assert_eq!(sd.winners(), &[0]);
        assert!(!sd.is_split());
    }

    #[test]
    fn board_plays_for_everyone() {
        let board: Board = "Ts Js Qs Ks As".parse().unwrap();
        let sd = Showdown::evaluate(&board, &holes(&["2c 3d", "4h 5h", "9d 9c"])).unwrap();
        assert_eq!(sd.winners(), &[0, 1, 2]);
        assert!(sd.is_split());
        assert!(sd.hands().iter().all(|h| h.category == Category::StraightFlush));
        assert_eq!(sd.standings(), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn standings_group_ties() {
        let board: Board = "2c 7d 9h Js Kc".parse().unwrap();
        // seat 0 and 2: pair of kings, same kickers; seat 1: trips; seat 3: high card
        let sd = Showdown::evaluate(&board, &holes(&["Kd 3s", "9d 9s", "Kh 3h", "4d 5s"])).unwrap();
        assert_eq!(sd.winners(), &[1]);
        assert_eq!(sd.standings(), vec![vec![1], vec![0, 2], vec![3]]);
        assert!(sd.is_winner(1));
        assert!(!sd.is_winner(0));
    }

    #[test]
    fn rejects_bad_tables() {
        let board: Board = "2c 7d 9h Js Kc".parse().unwrap();
        assert_eq!(Showdown::evaluate(&board, &[]).unwrap_err(), ShowdownError::NoPlayers);

        let short: Board = "2c 7d 9h".parse().unwrap();
        assert_eq!(
            Showdown::evaluate(&short, &holes(&["3d 4h"])).unwrap_err(),
            ShowdownError::IncompleteBoard(3)
        );

        let err = Showdown::evaluate(&board, &holes(&["3d 4h", "4h 5s"])).unwrap_err();
        assert_eq!(err, ShowdownError::DuplicateCard("4h".parse().unwrap()));

        let err = Showdown::evaluate(&board, &holes(&["Kc 4h"])).unwrap_err();
        assert_eq!(err, ShowdownError::DuplicateCard("Kc".parse().unwrap()));
    }
}
