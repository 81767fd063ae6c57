use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use set_engine::{count_sets, find_set, Card, CardId, Deck, GameRng, GameSessionBuilder};

fn shuffled_board(size: usize, seed: u64) -> Vec<Option<Card>> {
    let mut rng = GameRng::new(seed);
    Deck::shuffled(&mut rng)
        .iter()
        .take(size)
        .map(|id| Some(id.card()))
        .collect()
}

/// Worst case for the search: a board with no set at all.
fn set_free_board() -> Vec<Option<Card>> {
    [58, 70, 67, 9, 74, 61, 46, 75, 63, 30, 39, 45, 72, 29, 38]
        .into_iter()
        .map(|raw| CardId::new(raw).ok().map(CardId::card))
        .collect()
}

fn bench_find_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_set");

    for size in [12, 15, 21] {
        let board = shuffled_board(size, 7);
        group.bench_with_input(BenchmarkId::new("shuffled", size), &board, |b, board| {
            b.iter(|| find_set(black_box(board)))
        });
    }

    let empty = set_free_board();
    group.bench_function("set_free_15", |b| b.iter(|| find_set(black_box(&empty))));

    group.finish();
}

fn bench_count_sets(c: &mut Criterion) {
    let full: Vec<Option<Card>> = CardId::all().map(|id| Some(id.card())).collect();
    c.bench_function("count_sets_full_deck", |b| {
        b.iter(|| count_sets(black_box(&full)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_full_game", |b| {
        b.iter(|| {
            let mut session = GameSessionBuilder::new()
                .player_count(2)
                .build(black_box(11))
                .ok()?;
            let mut turn = 0u8;
            while let Some(triple) = session.hint() {
                session
                    .claim(set_engine::PlayerId::new(turn % 2), triple)
                    .ok()?;
                turn += 1;
            }
            Some(turn)
        })
    });
}

criterion_group!(benches, bench_find_set, bench_count_sets, bench_full_game);
criterion_main!(benches);
