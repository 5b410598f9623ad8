use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sling_geometry::{classify_offset, Direction};

// Sweep the full inflated zone envelope plus a margin of misses.
const SWEEP_MIN: i32 = -140;
const SWEEP_MAX: i32 = 140;
const SWEEP_STEP: i32 = 7;

fn classify_sweep(c: &mut Criterion) {
    c.bench_function("classify_offset_sweep", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            let mut y = SWEEP_MIN;
            while y <= SWEEP_MAX {
                let mut x = SWEEP_MIN;
                while x <= SWEEP_MAX {
                    if classify_offset(black_box(x as f32), black_box(y as f32))
                        != Direction::None
                    {
                        hits += 1;
                    }
                    x += SWEEP_STEP;
                }
                y += SWEEP_STEP;
            }
            hits
        })
    });
}

fn classify_single(c: &mut Criterion) {
    // Worst case walks the whole zone table before falling through to None.
    c.bench_function("classify_offset_miss", |b| {
        b.iter(|| classify_offset(black_box(500.0), black_box(500.0)))
    });
}

criterion_group!(benches, classify_sweep, classify_single);
criterion_main!(benches);
