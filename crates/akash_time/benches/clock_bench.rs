use akash_time::{
    SimulatedClock, gregorian_date_time_to_julian_day, julian_day_to_gregorian_date_time,
    vernal_equinox_hour_angle_deg,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn clock_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock");
    group.bench_function("update_and_read", |b| {
        let mut clock = SimulatedClock::new();
        b.iter(|| {
            clock.update(black_box(1.0 / 60.0));
            black_box(clock.julian_day())
        })
    });
    group.finish();
}

fn conversion_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("julian");
    group.bench_function("gregorian_to_jd", |b| {
        b.iter(|| {
            gregorian_date_time_to_julian_day(
                black_box(2024),
                black_box(3),
                black_box(20),
                black_box(12),
                black_box(30),
                black_box(15.5),
            )
        })
    });
    group.bench_function("jd_to_gregorian", |b| {
        b.iter(|| julian_day_to_gregorian_date_time(black_box(2_460_390.021)))
    });
    group.bench_function("vernal_equinox_hour_angle", |b| {
        b.iter(|| vernal_equinox_hour_angle_deg(black_box(2_460_390.021), black_box(-82.63)))
    });
    group.finish();
}

criterion_group!(benches, clock_bench, conversion_bench);
criterion_main!(benches);
