use std::hint::black_box;
use std::sync::LazyLock;

use gungraun::{library_benchmark, library_benchmark_group, main};
use lawfit::laws::{Exponential, LogNormal, Normal};
use lawfit::{Law, select_best_fit, sup_distance};
use rand::SeedableRng;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use statrs::distribution::Exp;

const SEED: u64 = 123;
static SMALL: LazyLock<Vec<f64>> = LazyLock::new(|| sample_data(100));
static MEDIUM: LazyLock<Vec<f64>> = LazyLock::new(|| sample_data(1000));
static LARGE: LazyLock<Vec<f64>> = LazyLock::new(|| sample_data(5000));

fn sample_data(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let dist = Exp::new(1.0).unwrap();
    let sample: Vec<f64> = dist.sample_iter(&mut rng).take(n).collect();

    sample
}

fn to_vec(data: &LazyLock<Vec<f64>>) -> Vec<f64> {
    (*data).clone()
}

#[library_benchmark(setup = to_vec)]
#[bench::small(&SMALL)]
#[bench::medium(&MEDIUM)]
#[bench::large(&LARGE)]
fn select(data: Vec<f64>) {
    let candidates: Vec<&dyn Law<f64>> = vec![&Exponential, &LogNormal, &Normal];
    let _ = black_box(select_best_fit(&data, &candidates));
}

#[library_benchmark(setup = to_vec)]
#[bench::small(&SMALL)]
#[bench::medium(&MEDIUM)]
#[bench::large(&LARGE)]
fn distance(data: Vec<f64>) {
    let _ = black_box(sup_distance(&data, &data));
}

library_benchmark_group!(
    name = fitting;
    benchmarks = select, distance
);

main!(library_benchmark_groups = fitting);
