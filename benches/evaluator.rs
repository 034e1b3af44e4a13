use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_showdown::cards::{parse_cards, Card};
use holdem_showdown::deck::DeckKind;
use holdem_showdown::evaluator::{classify_five, select_best_seven};
use holdem_showdown::showdown::Showdown;
use holdem_showdown::table::TableConfig;

fn cards<const N: usize>(s: &str) -> [Card; N] {
    parse_cards(s).unwrap().try_into().unwrap()
}

fn bench_classify_five(c: &mut Criterion) {
    let hands: [(&str, [Card; 5]); 4] = [
        ("high_card", cards("Ah Kd 7s 5c 2d")),
        ("full_house", cards("Ah Ad Kc Ks Kh")),
        ("wheel", cards("Ac 2d 3h 4s 5c")),
        ("five_of_a_kind", cards("Qc Qd Qh Qs Qx")),
    ];

    let mut g = c.benchmark_group("classify_five");
    for (name, hand) in &hands {
        g.bench_with_input(BenchmarkId::from_parameter(name), hand, |b, input| {
            b.iter(|| classify_five(black_box(input)))
        });
    }
    g.finish();
}

fn bench_select_best_seven(c: &mut Criterion) {
    let seven = cards::<7>("As Ah Ks Qs Js Ts 9s");
    c.bench_function("select_best_seven", |b| b.iter(|| select_best_seven(black_box(&seven))));
}

fn bench_showdown(c: &mut Criterion) {
    let mut g = c.benchmark_group("showdown");
    for (deck, players) in [(DeckKind::Standard, 9), (DeckKind::Extended, 30)] {
        let cfg = TableConfig { players, deck, seed: Some(1) };
        let hand = cfg.deal_with(&mut cfg.rng()).unwrap();
        g.bench_with_input(BenchmarkId::new(deck.label(), players), &hand, |b, input| {
            b.iter(|| Showdown::evaluate(black_box(&input.board), black_box(&input.holes)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_classify_five, bench_select_best_seven, bench_showdown);
criterion_main!(benches);
