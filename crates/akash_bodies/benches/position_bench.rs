use akash_bodies::{horizontal_moon_position, horizontal_sun_position, moon_phase};
use akash_time::gregorian_date_time_to_julian_day;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn positions_bench(c: &mut Criterion) {
    let jd = gregorian_date_time_to_julian_day(2024, 3, 20, 12, 0, 0.0);

    let mut group = c.benchmark_group("bodies");
    group.bench_function("horizontal_sun_position", |b| {
        b.iter(|| horizontal_sun_position(black_box(jd), black_box(-82.63), black_box(27.97)))
    });
    group.bench_function("horizontal_moon_position", |b| {
        b.iter(|| horizontal_moon_position(black_box(jd), black_box(24.3), black_box(45.1)))
    });
    group.bench_function("moon_phase", |b| b.iter(|| moon_phase(black_box(jd))));
    group.finish();
}

criterion_group!(benches, positions_bench);
criterion_main!(benches);
