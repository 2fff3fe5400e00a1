use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{
    BagGenerator, GameConfig, GameSession, Grid, PieceGenerator, UniformGenerator,
};
use blockfall::engine::{Controller, NullSink};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{Direction, Rgb};

fn fresh_session() -> GameSession {
    GameSession::new(&GameConfig::default(), UniformGenerator::new(12345))
}

fn bench_step(c: &mut Criterion) {
    let mut session = fresh_session();

    c.bench_function("session_step", |b| {
        b.iter(|| {
            if session.is_over() {
                session = fresh_session();
            }
            black_box(session.step());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let gray = Rgb::new(128, 128, 128);
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20, 10);
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, gray);
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_generators(c: &mut Criterion) {
    let mut uniform = UniformGenerator::new(12345);
    c.bench_function("uniform_create", |b| {
        b.iter(|| black_box(uniform.create(black_box(10))))
    });

    let mut bag = BagGenerator::new(12345);
    c.bench_function("bag_create", |b| {
        b.iter(|| black_box(bag.create(black_box(10))))
    });
}

fn bench_move_horizontal(c: &mut Criterion) {
    let mut session = fresh_session();
    let mut dir = Direction::Right;

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !session.move_horizontal(dir) {
                dir = match dir {
                    Direction::Left => Direction::Right,
                    Direction::Right => Direction::Left,
                };
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = fresh_session();

    c.bench_function("rotate", |b| {
        b.iter(|| black_box(session.rotate()))
    });
}

fn bench_controller_game(c: &mut Criterion) {
    c.bench_function("headless_game_to_over", |b| {
        b.iter(|| {
            let mut controller = Controller::new(fresh_session(), 1, NullSink);
            let _ = controller.run_for(black_box(100_000));
            black_box(controller.session().score())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = fresh_session().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = view.render(&snap, vp);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_line_clear,
    bench_generators,
    bench_move_horizontal,
    bench_rotate,
    bench_controller_game,
    bench_render
);
criterion_main!(benches);
