//! Performance benchmark comparing step strategies

use hex_life::domain::{HexGrid, StepStrategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

fn benchmark_strategy(width: usize, height: usize, strategy: StepStrategy, iterations: u32) -> f64 {
    let mut grid = HexGrid::new(width, height).with_strategy(strategy);
    grid.populate_random(&mut StdRng::seed_from_u64(0x5EED), 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Hex Life Performance Benchmark ===\n");

    let sizes = [(2, 2), (5, 15), (10, 30), (20, 60), (40, 120)];
    let iterations = 20;

    println!(
        "{:>10} {:>10} {:>12} {:>12} {:>10}",
        "Board", "Hexagons", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<60}", "");

    for (width, height) in sizes {
        let hexagons = HexGrid::new(width, height).len();
        let serial_ms = benchmark_strategy(width, height, StepStrategy::Serial, iterations);
        let parallel_ms = benchmark_strategy(width, height, StepStrategy::Parallel, iterations);

        println!(
            "{:>10} {:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", width, height),
            hexagons,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 40x120 ===\n");

    for strategy in StepStrategy::all() {
        let grid = HexGrid::new(40, 120);
        let cells = grid.len() * 109;
        let ms = benchmark_strategy(40, 120, strategy, iterations);
        println!(
            "{:<10} {:.2} ms/gen, {:.1}M cells/sec ({})",
            strategy.name(),
            ms,
            (cells as f64) / (ms / 1000.0) / 1_000_000.0,
            strategy.description()
        );
    }
}
