criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        resolving_all_pairs,
        drawing_computer_moves,
        matching_a_human_round,
        matching_a_computer_round,
}

use roshambo::gameplay::*;
use roshambo::gameroom::*;
use roshambo::players::*;

fn resolving_all_pairs(c: &mut criterion::Criterion) {
    c.bench_function("resolve all 9 Move pairs", |b| {
        b.iter(|| {
            Move::ALL
                .iter()
                .flat_map(|x| Move::ALL.iter().map(move |y| resolve(*x, *y)))
                .filter(|o| *o == Outcome::Draw)
                .count()
        })
    });
}

fn drawing_computer_moves(c: &mut criterion::Criterion) {
    let mut bot = Computer::seeded(0);
    c.bench_function("draw a Computer Move", |b| b.iter(|| bot.decide()));
}

fn matching_a_human_round(c: &mut criterion::Criterion) {
    c.bench_function("queue, pair, and settle a human round", |b| {
        b.iter_batched(
            Arena::default,
            |mut arena| {
                arena.handle(Join::friend("alice").into()).ok();
                arena.handle(Join::friend("bob").into()).ok();
                arena.handle(Play::new("alice", "alice_vs_bob", "r").into()).ok();
                arena.handle(Play::new("bob", "alice_vs_bob", "s").into()).ok();
                arena
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn matching_a_computer_round(c: &mut criterion::Criterion) {
    c.bench_function("open and settle a Computer round", |b| {
        b.iter_batched(
            || Arena::new(Computer::seeded(0)),
            |mut arena| {
                arena.handle(Join::computer("carol").into()).ok();
                arena
                    .handle(Play::new("carol", "carol_vs_computer", "p").into())
                    .ok();
                arena
            },
            criterion::BatchSize::SmallInput,
        )
    });
}
