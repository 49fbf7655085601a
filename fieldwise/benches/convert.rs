use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fieldwise::prelude::*;

#[derive(Record, Compare, Debug, Clone, Default, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    z: f64,
    mass: f32,
    charge: i8,
    name: String,
}

#[derive(Record, Default)]
struct Particles {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    masses: Vec<f32>,
    charges: Vec<i8>,
    names: Vec<String>,
}

fn particles(n: usize) -> Vec<Particle> {
    (0..n)
        .map(|i| Particle {
            x: i as f64,
            y: -(i as f64),
            z: 0.5 * i as f64,
            mass: 1.0,
            charge: (i % 3) as i8 - 1,
            name: format!("p{}", i),
        })
        .collect()
}

fn bench_convert(c: &mut Criterion) {
    let mut g = c.benchmark_group("convert");
    let mut particle = particles(1).remove(0);
    g.bench_function("value", |b| b.iter(|| convert(black_box(&particle), Value)));
    g.bench_function("reference", |b| {
        b.iter(|| convert(black_box(&particle), Reference).0 .3.to_bits())
    });
    g.bench_function("reference_mut", |b| {
        b.iter(|| {
            let charge = convert(black_box(&mut particle), Reference).into_inner().4;
            *charge = charge.wrapping_add(1);
        })
    });
    g.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut g = c.benchmark_group("compare");
    let a = particles(1).remove(0);
    let mut b_differs = a.clone();
    b_differs.name.push('!');
    g.bench_function("structural/equal", |b| {
        b.iter(|| compare(black_box(&a), black_box(&a)))
    });
    g.bench_function("structural/last_field_differs", |b| {
        b.iter(|| compare(black_box(&a), black_box(&b_differs)))
    });
    g.bench_function("partial_eq/equal", |b| {
        b.iter(|| black_box(&a) == black_box(&a))
    });
    g.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut g = c.benchmark_group("layout");
    for n in [16, 256, 4096] {
        let source = particles(n);
        g.bench_with_input(BenchmarkId::new("struct_of_arrays", n), &source, |b, source| {
            b.iter(|| {
                let mut soa = Particles::default();
                struct_of_arrays_with_resize(source, &mut soa);
                soa
            })
        });
        g.bench_with_input(BenchmarkId::new("tuple_of_arrays", n), &source, |b, source| {
            b.iter(|| tuple_of_arrays(source))
        });

        let mut soa = Particles::default();
        struct_of_arrays_with_resize(&source, &mut soa);
        g.bench_with_input(BenchmarkId::new("array_of_structs", n), &soa, |b, soa| {
            let mut dest = vec![Particle::default(); n];
            b.iter(|| array_of_structs(soa, &mut dest))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_convert, bench_compare, bench_layout);
criterion_main!(benches);
