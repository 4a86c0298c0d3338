//! Strassen Multiplication Walkthrough
//!
//! Shows shape normalization, the quadrant split, a non-power-of-two
//! product, and finally the full benchmark on the fixed 4×4 matrix.
//!
//! Run with: cargo run --example strassen_demo

use std::time::Instant;

use strassen::bench::{default_matrix, MatrixDisplay};
use strassen::linalg::block::split;
use strassen::linalg::shape::{crop, next_power_of_two, pad};
use strassen::prelude::*;

fn main() {
    println!("╔════════════════════════════════════════════════════════════════════╗");
    println!("║          STRASSEN vs CONVENTIONAL MATRIX MULTIPLICATION            ║");
    println!("╚════════════════════════════════════════════════════════════════════╝\n");

    example_1_padding();
    example_2_quadrants();
    example_3_odd_size();
    example_4_leaf_size();
    example_5_benchmark();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("All examples completed.");
}

fn section(title: &str) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

/// Example 1: Padding a 2×3 matrix up to 4×4 and cropping it back
fn example_1_padding() {
    section("Example 1: Pad to the Next Power of Two");

    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let n = next_power_of_two(m.num_rows().max(m.num_cols())).unwrap();
    let padded = pad(&m, n).unwrap();

    println!("  Input (2×3):");
    print!("{}", MatrixDisplay(&m));
    println!("\n  Padded ({n}×{n}):");
    print!("{}", MatrixDisplay(&padded));

    let back = crop(&padded, 2, 3).unwrap();
    println!("\n  Crop restores the input: {}\n", back == m);
}

/// Example 2: Quadrant split and recombination
fn example_2_quadrants() {
    section("Example 2: Quadrants");

    let m = Matrix::from_vec(4, 4, (1..=16).map(f64::from).collect()).unwrap();
    let q = split(&m).unwrap();

    for (name, block) in [("A11", &q.a11), ("A12", &q.a12), ("A21", &q.a21), ("A22", &q.a22)] {
        println!("  {name}:");
        print!("{}", MatrixDisplay(block));
    }
    println!("\n  Recombined equals input: {}\n", q.combine().unwrap() == m);
}

/// Example 3: A 3×3 product goes through a 4×4 recursion
fn example_3_odd_size() {
    section("Example 3: Non-Power-of-Two Operands");

    let a = Matrix::from_rows(vec![
        vec![2.0, -1.0, 0.0],
        vec![1.0, 3.0, 2.0],
        vec![0.0, 1.0, 4.0],
    ])
    .unwrap();

    let start = Instant::now();
    let expected = conventional_multiply(&a, &a).unwrap();
    let conventional_time = start.elapsed();

    let start = Instant::now();
    let product = strassen_multiply(&a, &a).unwrap();
    let strassen_time = start.elapsed();

    println!("  A² (Strassen):");
    print!("{}", MatrixDisplay(&product));
    println!("\n  Matches conventional: {}", product == expected);
    println!("  Conventional: {conventional_time:?}");
    println!("  Strassen:     {strassen_time:?}\n");
}

/// Example 4: Leaf size trades recursion depth for triple-loop work
fn example_4_leaf_size() {
    section("Example 4: Leaf Size");

    let n = 64;
    let data: Vec<f64> = (0..n * n).map(|i| f64::from((i % 7) as u8) - 3.0).collect();
    let a = Matrix::from_vec(n, n, data).unwrap();
    let expected = conventional_multiply(&a, &a).unwrap();

    for leaf_size in [1, 8, 32] {
        let config = StrassenConfig::with_leaf_size(leaf_size);
        let start = Instant::now();
        let product = strassen_multiply_with(&a, &a, &config).unwrap();
        let elapsed = start.elapsed();
        println!(
            "  leaf size {leaf_size:>2}: {elapsed:?} (matches conventional: {})",
            product == expected
        );
    }
    println!();
}

/// Example 5: The benchmark on the fixed 4×4 input
fn example_5_benchmark() {
    section("Example 5: Benchmark Harness");

    let config = HarnessConfig {
        verbose: true,
        ..HarnessConfig::default()
    };
    let harness = BenchHarness::new(config).unwrap();

    match harness.run(&default_matrix()) {
        Ok(report) => {
            print!("{report}");
            println!("\n  All products ≈ I: {}\n", report.all_identity());
        }
        Err(e) => println!("  Benchmark failed: {e}\n"),
    }
}
