#![allow(clippy::assertions_on_constants)]

use std::time::Instant;

use itertools::Itertools;

use scrabble_opening::opening::SearchConfig;
use scrabble_opening::util::board_gen::{random_opening, seeded_rng};

fn main() {
    let mut rng = seeded_rng(0);
    let small = random_opening(7, 7, 200, &mut rng);
    let large = random_opening(15, 15, 2000, &mut rng);

    bench("small_single", || {
        small.find().unwrap();
    });
    bench("large_single", || {
        large.find().unwrap();
    });
    bench("large_parallel", || {
        large.find_with(&SearchConfig::default()).unwrap();
    });
}

const ITERATION_COUNT: usize = 10;
const REMOVED_OUTLIERS_PER_SIDE: usize = 1;

fn bench(name: &str, mut f: impl FnMut()) {
    assert!(ITERATION_COUNT > REMOVED_OUTLIERS_PER_SIDE * 2);
    println!("Running benchmark {}", name);

    // benchmark function
    let mut timings = vec![];

    for _ in 0..ITERATION_COUNT {
        let start = Instant::now();
        f();

        let end = Instant::now();
        timings.push(end - start);
    }

    // remove outliers
    for _ in 0..REMOVED_OUTLIERS_PER_SIDE {
        timings.remove(timings.iter().position_min().unwrap());
        timings.remove(timings.iter().position_max().unwrap());
    }

    // print results
    let timings = timings.iter().map(|d| d.as_secs_f32() * 1000.0).collect_vec();
    let mean = timings.iter().sum::<f32>() / timings.len() as f32;
    let stddev = (timings.iter().map(|&f| (f - mean).powi(2)).sum::<f32>() / timings.len() as f32).sqrt();

    println!("  {:.2}ms\t +- {:.2}ms", mean, stddev);
}
