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
        evaluating_river_strength,
        classifying_river_ranks,
        enumerating_flop_pockets,
        simulating_flop_equity,
        ranking_flop_strength,
        ranking_flop_equity,
}

fn evaluating_river_strength(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let hand = Hand::try_from("As Kh Qd Jc 9s 4h 2d").expect("valid hand");
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn classifying_river_ranks(c: &mut criterion::Criterion) {
    c.bench_function("classify 7 suit-blind Ranks", |b| {
        let board = Board::try_from("Q T 9 2 A").expect("valid board");
        let pocket = Pocket::try_from("KJ").expect("valid pocket");
        let ranks = pocket.with(&board);
        b.iter(|| Score::from(ranks.as_slice()))
    });
}

fn enumerating_flop_pockets(c: &mut criterion::Criterion) {
    c.bench_function("enumerate all Flop Pockets", |b| {
        let board = Board::try_from("Q T 9").expect("valid board");
        b.iter(|| PocketIterator::from(&board).count())
    });
}

fn simulating_flop_equity(c: &mut criterion::Criterion) {
    c.bench_function("simulate Flop equity for one Pocket", |b| {
        let board = Board::try_from("Q T 9").expect("valid board");
        let pocket = Pocket::try_from("AK").expect("valid pocket");
        let simulator = Simulator::try_from((pocket, &board)).expect("legal pocket");
        let ref mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| simulator.simulate(postflop::ITERATIONS, rng))
    });
}

fn ranking_flop_strength(c: &mut criterion::Criterion) {
    c.bench_function("rank all Flop Pockets by strength", |b| {
        let board = Board::try_from("Q T 9").expect("valid board");
        b.iter(|| Leaderboard::strength(&board))
    });
}

fn ranking_flop_equity(c: &mut criterion::Criterion) {
    c.bench_function("rank all Flop Pockets by equity", |b| {
        let board = Board::try_from("Q T 9").expect("valid board");
        let config = Config::default().with_iterations(100).with_seed(0);
        let cancel = AtomicBool::new(false);
        b.iter(|| Leaderboard::equity(&board, &config, &cancel))
    });
}

use postflop::analysis::Board;
use postflop::analysis::Config;
use postflop::analysis::Leaderboard;
use postflop::analysis::Pocket;
use postflop::analysis::PocketIterator;
use postflop::analysis::Score;
use postflop::analysis::Simulator;
use postflop::cards::Evaluator;
use postflop::cards::Hand;
use postflop::cards::Strength;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::atomic::AtomicBool;
