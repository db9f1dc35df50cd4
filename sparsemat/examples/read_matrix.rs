//! Read the demo matrices back and run the three operations on them

use sparsemat::{MatrixFile, ParseConfig, SparseMatrix};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> sparsemat::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (a_path, b_path) = ("example_a.txt", "example_b.txt");
    if !Path::new(a_path).exists() || !Path::new(b_path).exists() {
        println!("Files '{a_path}' / '{b_path}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    let config = ParseConfig::default().with_bounds_check(true);
    let start = Instant::now();
    let a: SparseMatrix = MatrixFile::read_matrix_with_config(a_path, config)?;
    let b: SparseMatrix = MatrixFile::read_matrix_with_config(b_path, config)?;
    println!("Parsed both files in {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);

    for (name, matrix) in [("A", &a), ("B", &b)] {
        println!("\nMatrix {name}:");
        println!("   Shape: {}", matrix.shape());
        println!("   Non-zeros: {}", matrix.nnz());
        println!(
            "   Density: {:.4}%",
            matrix.nnz() as f64 / (matrix.rows() * matrix.cols()) as f64 * 100.0
        );
    }

    let start = Instant::now();
    let sum = a.addition(&b)?;
    let difference = a.subtraction(&b)?;
    let product = a.multiplication(&b)?;
    println!("\nArithmetic finished in {:?}", start.elapsed());

    for (name, result) in [("sum", &sum), ("difference", &difference), ("product", &product)] {
        let path = format!("example_{name}.txt");
        MatrixFile::write_matrix(&path, result)?;
        println!("   {name}: {} non-zeros -> {path}", result.nnz());
    }

    Ok(())
}
