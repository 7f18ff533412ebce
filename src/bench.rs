//! Timing harness: factor random matrices of fixed sizes and report the
//! four accuracy diagnostics alongside wall-clock time.

use std::time::Instant;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::metrics;

/// Dimensions exercised when no explicit list is given.
pub const DEFAULT_SIZES: &[usize] = &[100, 500, 1000];

/// Run the benchmark suite and print one table row per dimension.
pub fn run(sizes: &[usize]) -> Result<()> {
    println!();
    println!("| Dimension | α-Error (A-QR) | β-Error (QᵀQ-I) | γ-Error (AR⁻¹-Q) | cond(R) | Time (s) |");
    println!("|-----------|----------------|-----------------|------------------|---------|----------|");

    for &n in sizes {
        run_dimension(n)?;
    }

    println!();
    println!("Benchmark complete.");
    println!();
    Ok(())
}

/// Factor one random n×n matrix, timing only the factorization itself.
fn run_dimension(n: usize) -> Result<()> {
    log::info!("benchmarking {n}x{n}");
    let a = Matrix::<f64>::random(n, n)?;

    let start = Instant::now();
    let f = a.qr();
    let secs = start.elapsed().as_secs_f64();

    let err_a = metrics::residual_norm(&a, &f.q, &f.r)?;
    let err_b = metrics::orthogonality_error(&f.q)?;
    let err_c = metrics::consistency_error(&a, &f.q, &f.r)?;
    let cond_r = metrics::condition_number(&f.r)?;

    println!(
        "| {n:>9} | {err_a:>14.2e} | {err_b:>15.2e} | {err_c:>16.2e} | {cond_r:>7.2} | {secs:>8.3} |"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_on_small_sizes() {
        // Smoke test with sizes small enough for CI.
        run(&[4, 8]).unwrap();
    }
}
