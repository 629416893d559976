//! Par de Bell (|00⟩ + |11⟩)/√2 e medições repetidas

use std::fmt;

use anyhow::{Result, ensure};
use qsim_gates::{CNOT, HADAMARD};
use qsim_state::{Measurer, apply_gate, create_state};
use rand::Rng;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct BellReport {
    pub measurements: Vec<Vec<u8>>,
    pub consistent: bool,
}

impl fmt::Display for BellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bits in &self.measurements {
            writeln!(f, "measurement: {bits:?}")?;
        }
        write!(
            f,
            "{}",
            if self.consistent {
                "measurements agree: entangled state confirmed"
            } else {
                "measurements disagree"
            }
        )
    }
}

/// Mede o par `repeats` vezes; após a primeira medição o estado já colapsou
pub fn run<R: Rng + ?Sized>(repeats: usize, measurer: &Measurer, rng: &mut R) -> Result<BellReport> {
    ensure!(repeats >= 1, "at least one measurement is required");

    let state = create_state(&[0, 0])?;
    let state = apply_gate(&state, &HADAMARD, 0)?;
    let mut state = apply_gate(&state, &CNOT, 0)?;

    let mut measurements = Vec::with_capacity(repeats);
    for _ in 0..repeats {
        measurements.push(measurer.measure_all(&mut state, rng)?);
    }

    let consistent = measurements
        .iter()
        .all(|bits| bits[0] == bits[1] && *bits == measurements[0]);
    info!(repeats, consistent, "bell pair measured");

    Ok(BellReport {
        measurements,
        consistent,
    })
}
