//! Write two demo sparse matrices in the text format

use sparsemat::{MatrixFile, SparseMatrix};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> sparsemat::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let size = 1_000;
    let diagonal_stride = 7;

    println!("Building two {size} x {size} banded matrices...");
    let start = Instant::now();
    let a = build_banded(size, diagonal_stride, 1);
    let b = build_banded(size, diagonal_stride, -2);
    println!("Built in {:?}", start.elapsed());
    println!("   A non-zeros: {}", a.nnz());
    println!("   B non-zeros: {}", b.nnz());

    let start = Instant::now();
    MatrixFile::write_matrix("example_a.txt", &a)?;
    MatrixFile::write_matrix("example_b.txt", &b)?;
    println!("Matrices written in {:?}", start.elapsed());
    println!("\nRun 'cargo run --example read_matrix' to read them back!");
    Ok(())
}

/// Build a square matrix with a main diagonal and every `stride`-th off-diagonal
fn build_banded(size: usize, stride: usize, scale: i64) -> SparseMatrix {
    let (n, stride) = (size as i64, stride as i64);
    let entries = (0..n).flat_map(|row| {
        let diagonal = (row, row, scale * (row % 10 + 1));
        let off = (row, (row + stride) % n, scale * 3);
        [diagonal, off]
    });
    SparseMatrix::from_entries(size, size, entries)
}
