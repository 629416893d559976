//! Algoritmo de Deutsch: decide se f: {0,1} → {0,1} é constante ou
//! balanceada com uma única consulta ao oráculo

use std::fmt;

use anyhow::{Context, Result};
use clap::ValueEnum;
use qsim_gates::{HADAMARD, uf};
use qsim_state::{Measurer, apply_gate, create_state};
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// As quatro funções de um bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Oracle {
    /// f(x) = 1
    One,
    /// f(x) = x
    Same,
    /// f(x) = ¬x
    Swap,
    /// f(x) = 0
    Zero,
}

impl Oracle {
    pub const ALL: [Oracle; 4] = [Oracle::One, Oracle::Same, Oracle::Swap, Oracle::Zero];

    pub fn eval(self, x: usize) -> bool {
        match self {
            Oracle::One => true,
            Oracle::Same => x == 1,
            Oracle::Swap => x == 0,
            Oracle::Zero => false,
        }
    }

    pub fn is_balanced(self) -> bool {
        matches!(self, Oracle::Same | Oracle::Swap)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeutschReport {
    pub oracle: Oracle,
    pub measured: u8,
    pub balanced: bool,
}

impl fmt::Display for DeutschReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "oracle   = {:?}", self.oracle)?;
        writeln!(f, "x        = {}", self.measured)?;
        write!(
            f,
            "Uf was {}",
            if self.balanced { "balanced" } else { "constant" }
        )
    }
}

/// Prepara |0,1⟩, aplica H nos dois qubits, Uf e H no qubit x; mede x.
///
/// Sem `oracle` uma das quatro funções é sorteada.
pub fn run<R: Rng + ?Sized>(
    oracle: Option<Oracle>,
    measurer: &Measurer,
    rng: &mut R,
) -> Result<DeutschReport> {
    let oracle = oracle.unwrap_or_else(|| Oracle::ALL[rng.gen_range(0..Oracle::ALL.len())]);
    let (x, y) = (0, 1);

    let state = create_state(&[0, 1])?;
    let state = apply_gate(&state, &HADAMARD, x)?;
    let state = apply_gate(&state, &HADAMARD, y)?;
    let gate = uf(1, |input| oracle.eval(input)).context("building Deutsch oracle")?;
    let state = apply_gate(&state, &gate, 0)?;
    let mut state = apply_gate(&state, &HADAMARD, x)?;

    let result = measurer.measure_all(&mut state, rng)?;
    let measured = result[x];
    info!(?oracle, measured, "deutsch finished");

    Ok(DeutschReport {
        oracle,
        measured,
        balanced: measured == 1,
    })
}
