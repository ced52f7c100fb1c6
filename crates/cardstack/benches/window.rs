use cardstack::{CardStack, DeckConfig, ManualClock, Size, SwipeDirection};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const DECK_SIZE: usize = 10_000;
const IN_FLIGHT_SAMPLES: &[usize] = &[0, 4, 16];
const CONTAINER: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

/// A deck with `in_flight` cards still animating off-screen.
fn busy_stack(in_flight: usize) -> (CardStack<usize, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = DeckConfig::default()
        .with_throttle_millis(0, 0)
        .with_durations_millis(60_000, 60_000);
    let mut stack = match CardStack::with_clock((0..DECK_SIZE).collect(), config, clock.clone()) {
        Ok(stack) => stack,
        Err(err) => panic!("bench config rejected: {err}"),
    };
    stack.set_container_size(CONTAINER);
    for step in 0..in_flight {
        let direction = SwipeDirection::ALL[step % SwipeDirection::ALL.len()];
        stack.swipe(direction);
        clock.advance_millis(5);
    }
    (stack, clock)
}

fn bench_renderable_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("renderable_window");
    for &in_flight in IN_FLIGHT_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("in_flight", in_flight),
            &in_flight,
            |b, &in_flight| {
                let (stack, _clock) = busy_stack(in_flight);
                b.iter(|| {
                    let window = stack.renderable_window();
                    black_box(window);
                });
            },
        );
    }
    group.finish();
}

fn bench_visuals(c: &mut Criterion) {
    let mut group = c.benchmark_group("visuals");
    for &in_flight in IN_FLIGHT_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("in_flight", in_flight),
            &in_flight,
            |b, &in_flight| {
                let (stack, _clock) = busy_stack(in_flight);
                b.iter(|| {
                    let visuals = stack.visuals();
                    black_box(visuals);
                });
            },
        );
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    for &in_flight in IN_FLIGHT_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("in_flight", in_flight),
            &in_flight,
            |b, &in_flight| {
                let (mut stack, clock) = busy_stack(in_flight);
                b.iter(|| {
                    clock.advance_millis(1);
                    black_box(stack.tick());
                });
            },
        );
    }
    group.finish();
}

fn bench_swipe_undo_cycle(c: &mut Criterion) {
    c.bench_function("swipe_undo_cycle", |b| {
        let (mut stack, clock) = busy_stack(0);
        b.iter(|| {
            stack.swipe(SwipeDirection::Left);
            clock.advance_millis(1);
            stack.undo();
            clock.advance_millis(1);
            stack.tick();
        });
    });
}

criterion_group!(
    window,
    bench_renderable_window,
    bench_visuals,
    bench_tick,
    bench_swipe_undo_cycle
);
criterion_main!(window);
