use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use bolotudu::{
    legal_placements, line_through, no_three_in_line, Board, Cell, Coord, GameConfig, GamePhase,
    GameSession, PlayerId,
};

fn half_full_board() -> Board {
    let mut board = Board::new(6, 5);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut cells: Vec<Coord> = board.iter().map(|(at, _)| at).collect();
    cells.shuffle(&mut rng);
    for (i, &at) in cells.iter().take(15).enumerate() {
        let player = PlayerId::new((i % 2) as u8);
        board.set(at, Cell::Stone(player)).unwrap();
    }
    board
}

fn bench_rule_queries(c: &mut Criterion) {
    let board = half_full_board();
    let p0 = PlayerId::new(0);

    c.bench_function("no_three_in_line", |b| {
        b.iter(|| {
            no_three_in_line(
                black_box(&board),
                black_box(Coord::new(3, 2)),
                black_box(p0),
                3,
            )
        })
    });

    c.bench_function("line_through", |b| {
        b.iter(|| line_through(black_box(&board), black_box(Coord::new(3, 2)), 3))
    });

    c.bench_function("legal_placements", |b| {
        b.iter(|| legal_placements(black_box(&board), black_box(p0), 3))
    });
}

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("seeded_playout", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(black_box(42));
            let mut session = GameSession::new(GameConfig::default());

            while session.phase() == GamePhase::Placement {
                let options = session.legal_placements();
                let Some(&at) = options.choose(&mut rng) else {
                    break;
                };
                session.place(at).unwrap();
            }

            for _ in 0..100 {
                if session.is_over() {
                    break;
                }
                let moves = session.legal_moves();
                let Some(&(from, to)) = moves.choose(&mut rng) else {
                    break;
                };
                session.select(from).unwrap();
                session.move_selected(to).unwrap();
            }
            session
        })
    });
}

criterion_group!(benches, bench_rule_queries, bench_random_playout);
criterion_main!(benches);
