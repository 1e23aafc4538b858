use criterion::{Criterion, criterion_group, criterion_main};
use motifscan::{
    generate::rand_sequence,
    search::{SearchPolicy, find_all},
};
use std::hint::black_box;

fn find_all_benchmarks(c: &mut Criterion) {
    let subject = rand_sequence(b"ACDEFGHIKLMNPQRSTVWY", 1000, 42);
    let mut repeating = b"aaaaaaab".repeat(124);
    repeating.extend(b"aaaaabbb");

    c.bench_function("pentamer_in_peptide", |b| {
        b.iter(|| find_all(black_box(&subject), black_box(b"FLARE"), SearchPolicy::pentamer()));
    });
    c.bench_function("overlapping_repeats", |b| {
        b.iter(|| find_all(black_box(&repeating), black_box(b"aaaa"), SearchPolicy::Unbounded));
    });
}

criterion_group!(benches, find_all_benchmarks);
criterion_main!(benches);
