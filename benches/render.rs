#[macro_use]
extern crate criterion;
extern crate newton_fractal;

use criterion::Criterion;
use newton_fractal::{Complex, NewtonRenderer, Polynomial, Settings};

fn render_64(c: &mut Criterion) {
    let renderer = NewtonRenderer::new(
        64,
        64,
        Complex::new(-2.0, -2.0),
        Complex::new(2.0, 2.0),
        Polynomial::newton_cubic(),
        Settings::default(),
    )
    .unwrap();
    c.bench_function("render 64x64", move |b| b.iter(|| renderer.render()));
}

fn solve_one(c: &mut Criterion) {
    let polynomial = Polynomial::newton_cubic();
    let derivative = polynomial.derive();
    let solver = newton_fractal::NewtonSolver::default();
    c.bench_function("solve near origin", move |b| {
        b.iter(|| solver.solve(&polynomial, &derivative, Complex::new(0.0001, 0.0001)))
    });
}

criterion_group!(benches, render_64, solve_one);
criterion_main!(benches);
