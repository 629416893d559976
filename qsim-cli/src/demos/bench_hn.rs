//! Comparação de tempo entre H⊗ⁿ ingênua e a forma fechada

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{Result, ensure};
use qsim_gates::{hn, hn_fast};
use qsim_matrix::Matrix;
use qsim_state::StateResult;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub bits: usize,
    pub iterations: usize,
    pub naive_ms: f64,
    pub fast_ms: f64,
    /// fast / naive
    pub ratio: f64,
    pub identical: bool,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hn:      {:.3} ms", self.naive_ms)?;
        writeln!(f, "Hn_fast: {:.3} ms", self.fast_ms)?;
        writeln!(f, "Hn_fast takes {:.3}x the time of Hn.", self.ratio)?;
        write!(f, "outputs identical: {}", self.identical)
    }
}

fn time<F>(iterations: usize, mut build: F) -> StateResult<(Duration, Matrix)>
where
    F: FnMut() -> StateResult<Matrix>,
{
    let mut last = build()?;
    let start = Instant::now();
    for _ in 0..iterations {
        last = build()?;
    }
    Ok((start.elapsed(), last))
}

pub fn run(n: usize, iterations: usize) -> Result<BenchReport> {
    ensure!(n <= 10, "H^n over {n} qubits is too large to benchmark");
    ensure!(iterations >= 1, "at least one iteration is required");

    let (naive, naive_out) = time(iterations, || Ok(hn(n)?))?;
    let (fast, fast_out) = time(iterations, || Ok(hn_fast(n)?))?;

    let naive_ms = naive.as_secs_f64() * 1e3;
    let fast_ms = fast.as_secs_f64() * 1e3;
    let ratio = if naive_ms > 0.0 { fast_ms / naive_ms } else { f64::NAN };
    let identical = naive_out == fast_out;
    info!(bits = n, iterations, naive_ms, fast_ms, "hn benchmark finished");

    Ok(BenchReport {
        bits: n,
        iterations,
        naive_ms,
        fast_ms,
        ratio,
        identical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_benchmark() {
        let report = run(3, 5).unwrap();
        assert!(report.identical);
        assert_eq!(report.iterations, 5);
        assert!(report.naive_ms >= 0.0 && report.fast_ms >= 0.0);
    }

    #[test]
    fn test_rejects_zero_iterations() {
        assert!(run(3, 0).is_err());
    }
}
