//! holdem-showdown: Texas Hold'em hand classification and showdown settlement
//!
//! - Classify any five cards into one of ten categories, High Card up to Five of a Kind
//! - Total ordering of classified hands with a fixed five-value tie-break key
//! - Best five of seven selection and multi-player showdowns with split pots
//! - Seeded dealing from a standard 52-card deck or the extended 65-card deck with Sardines
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_showdown::cards::{Card, Rank, Suit};
//! use holdem_showdown::evaluator::{evaluate_holdem, Category};
//! use holdem_showdown::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ).unwrap();
//! let board = Board::try_new(vec![
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]).unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::Pair);
//! assert_eq!(eval.tie_break(), [14, 13, 12, 11, 0]);
//! ```
//!
//! ## Showdown
//! ```
//! use holdem_showdown::hand::{Board, HoleCards};
//! use holdem_showdown::showdown::Showdown;
//!
//! let board: Board = "Ah Kh 7c 7d 2s".parse().unwrap();
//! let players: Vec<HoleCards> = vec!["Ac 3d".parse().unwrap(), "7h 7s".parse().unwrap()];
//! let showdown = Showdown::evaluate(&board, &players).unwrap();
//! assert_eq!(showdown.winners(), &[1]);
//! ```
//!
//! ## Viewer
//! Deal hands in the terminal viewer with:
//! ```sh
//! cargo run -- --players 8 --deck extended
//! ```
//! or print plain reports with `--plain --hands 5`.

pub mod cards;
pub mod deck;
pub mod display;
pub mod evaluator;
pub mod hand;
pub mod showdown;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
