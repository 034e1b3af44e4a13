use holdem_showdown::cards::Suit;
use holdem_showdown::deck::{Deck, DeckKind};
use holdem_showdown::display::showdown_report;
use holdem_showdown::evaluator::Category;
use holdem_showdown::table::{deal, ConfigError, DealError, TableConfig};
use std::collections::HashSet;

#[test]
fn decks_have_expected_composition() {
    let standard = Deck::standard();
    assert_eq!(standard.len(), 52);
    let extended = Deck::extended();
    assert_eq!(extended.len(), 65);
    assert_eq!(extended.kind().suits().last(), Some(&Suit::Sardines));
    assert_eq!("65".parse::<DeckKind>().unwrap(), DeckKind::Extended);
    assert!("jokers".parse::<DeckKind>().is_err());
}

#[test]
fn dealt_cards_are_all_distinct() {
    for seed in 0..20 {
        let mut deck = Deck::extended();
        deck.shuffle_seeded(seed);
        let hand = deal(&mut deck, 12).unwrap();
        let mut seen = HashSet::new();
        for card in hand.board.as_slice() {
            assert!(seen.insert(*card));
        }
        for hole in &hand.holes {
            assert!(seen.insert(hole.first()));
            assert!(seen.insert(hole.second()));
        }
        assert_eq!(seen.len(), 5 + 24);
    }
}

#[test]
fn seeded_tables_repeat() {
    let cfg = TableConfig { players: 4, deck: DeckKind::Standard, seed: Some(2024) };
    let mut rng_a = cfg.rng();
    let mut rng_b = cfg.rng();
    for _ in 0..5 {
        let a = cfg.deal_with(&mut rng_a).unwrap();
        let b = cfg.deal_with(&mut rng_b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.showdown().unwrap().winners(), b.showdown().unwrap().winners());
    }
}

#[test]
fn oversized_table_is_rejected() {
    let cfg = TableConfig { players: 24, deck: DeckKind::Standard, seed: Some(1) };
    let err = cfg.deal_with(&mut cfg.rng()).unwrap_err();
    assert_eq!(
        err,
        DealError::Config(ConfigError::TooManyPlayers { players: 24, deck: DeckKind::Standard, max: 23 })
    );
    assert_eq!(
        err.to_string(),
        "24 players do not fit a standard deck (max 23)"
    );
}

#[test]
fn standard_deck_never_makes_five_of_a_kind() {
    let cfg = TableConfig { players: 23, deck: DeckKind::Standard, seed: Some(7) };
    let mut rng = cfg.rng();
    for _ in 0..50 {
        let hand = cfg.deal_with(&mut rng).unwrap();
        let showdown = hand.showdown().unwrap();
        assert!(showdown.hands().iter().all(|h| h.category != Category::FiveOfAKind));
        assert!(!showdown.winners().is_empty());
    }
}

#[test]
fn report_marks_every_winner() {
    let cfg = TableConfig { players: 3, deck: DeckKind::Extended, seed: Some(5) };
    let hand = cfg.deal_with(&mut cfg.rng()).unwrap();
    let showdown = hand.showdown().unwrap();
    let report = showdown_report(&hand, &showdown);
    assert!(report.starts_with("Board: "));
    assert_eq!(report.lines().filter(|l| l.ends_with("  *")).count(), showdown.winners().len());
}
