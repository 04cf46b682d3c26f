//! Performance benchmark comparing serial and parallel advance

use std::time::Instant;

use console_life::{Algorithm, Config, Grid, Simulation};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(algorithm: Algorithm, size: usize, iterations: usize) -> f64 {
    let config = Config {
        width: size,
        height: size,
        algorithm,
        ..Config::default()
    };
    let mut simulation = Simulation::from_grid(Grid::new(size, size), &config);
    simulation.initialize(&mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        simulation.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [30, 100, 500, 1000, 2000];
    let iterations = 20;

    let algorithms = Algorithm::all();

    print!("{:>10}", "Size");
    for algorithm in &algorithms {
        print!(" {:>12}", algorithm.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let timings: Vec<f64> = algorithms
            .iter()
            .map(|&algorithm| benchmark(algorithm, size, iterations))
            .collect();
        let fastest = timings.iter().copied().fold(f64::INFINITY, f64::min);

        print!("{:>10}", format!("{}x{}", size, size));
        for ms in &timings {
            print!(" {:>12.3}", ms);
        }
        // Serial is the baseline
        println!(" {:>9.1}x", timings[0] / fastest);
    }
}
