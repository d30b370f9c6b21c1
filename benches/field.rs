use criterion::{ black_box, criterion_group, Criterion };
use linrec::{ F32, F64, FiniteField };

pub fn mul(c: &mut Criterion) {
    let x = F64::rand();
    let y = F64::rand();
    c.bench_function("mul (F64)", |bench| {
        bench.iter(|| F64::mul(black_box(x), black_box(y)))
    });

    let x = F32::rand();
    let y = F32::rand();
    c.bench_function("mul (F32)", |bench| {
        bench.iter(|| F32::mul(black_box(x), black_box(y)))
    });
}

pub fn inv(c: &mut Criterion) {
    let x = F64::rand();
    c.bench_function("inv (F64)", |bench| {
        bench.iter(|| F64::inv(black_box(x)))
    });
}

criterion_group!(group, mul, inv);
