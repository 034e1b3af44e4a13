//! Text presentation of categories, cards and showdown results.

use crate::cards::Card;
use crate::evaluator::Category;
use crate::showdown::Showdown;
use crate::table::Deal;
use std::fmt::Write;

const CATEGORY_NAMES: [&str; 10] = [
    "High Card",
    "One Pair",
    "Two Pair",
    "Three of a Kind",
    "Straight",
    "Flush",
    "Full House",
    "Four of a Kind",
    "Straight Flush",
    "Five of a Kind",
];

/// Human-readable category name, e.g. "Full House".
pub fn category_name(category: Category) -> &'static str {
    CATEGORY_NAMES[category.ordinal() as usize]
}

/// Space separated short card names, e.g. "As Kd 9x".
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

/// Plain-text report of a dealt hand and its showdown.
///
/// ```
/// use holdem_showdown::display::showdown_report;
/// use holdem_showdown::table::Deal;
///
/// let deal = Deal {
///     board: "2c 7d 9h Js Kc".parse().unwrap(),
///     holes: vec!["Kd Ks".parse().unwrap(), "Ah 3d".parse().unwrap()],
/// };
/// let report = showdown_report(&deal, &deal.showdown().unwrap());
/// assert!(report.contains("P1  Kd Ks  Three of a Kind"));
/// assert!(report.ends_with("Winner: P1\n"));
/// ```
pub fn showdown_report(deal: &Deal, showdown: &Showdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Board: {}", format_cards(deal.board.as_slice()));
    for (seat, (hole, hand)) in deal.holes.iter().zip(showdown.hands()).enumerate() {
        let marker = if showdown.is_winner(seat) { "  *" } else { "" };
        let _ = writeln!(
            out,
            "P{:<2} {}  {:<15}  [{}]{}",
            seat + 1,
            format_cards(&hole.as_array()),
            category_name(hand.category),
            format_cards(&hand.cards),
            marker
        );
    }
    let names: Vec<String> = showdown.winners().iter().map(|s| format!("P{}", s + 1)).collect();
    let label = if showdown.is_split() { "Split pot" } else { "Winner" };
    let _ = writeln!(out, "{label}: {}", names.join(", "));
    out
}
