use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use seating_system::venue::Venue;

// Большой зал с разреженной занятостью: каждое третье место занято
fn sparse_venue() -> Venue {
    let rows = vec![40usize; 200];
    let mut venue = Venue::new(&rows);
    for row in 0..venue.row_count() {
        for number in (0..40).step_by(3) {
            venue.take_seats(venue.seat(row, number), 1).unwrap();
        }
    }
    venue
}

fn bench_count_available(c: &mut Criterion) {
    let venue = sparse_venue();
    c.bench_function("count_available_seats 200x40", |b| {
        b.iter(|| black_box(&venue).count_available_seats())
    });
}

fn bench_block_search(c: &mut Criterion) {
    let venue = sparse_venue();
    // Серии из 3 в таком зале нет - прогоняет счетчик по всей сетке
    c.bench_function("find_available_block miss 200x40", |b| {
        b.iter(|| black_box(&venue).find_available_block(black_box(3)))
    });
    c.bench_function("find_available_block hit 200x40", |b| {
        b.iter(|| black_box(&venue).find_available_block(black_box(2)))
    });
}

fn bench_take_release(c: &mut Criterion) {
    c.bench_function("take+release row of 40", |b| {
        b.iter_batched(
            || Venue::new(&[40usize; 200]),
            |mut venue| {
                let seat = venue.seat(100, 0);
                venue.take_seats(seat, 40).unwrap();
                venue.release_seats(seat, 40).unwrap();
                venue
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_count_available,
    bench_block_search,
    bench_take_release
);
criterion_main!(benches);
