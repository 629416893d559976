//! Deutsch–Jozsa: f: {0,1}ⁿ → {0,1} constante ou balanceada

use std::fmt;

use anyhow::{Context, Result, ensure};
use qsim_gates::{HADAMARD, hn, uf};
use qsim_state::{Measurer, apply_gate, create_state};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::info;

use super::to_int;

/// Função oculta: constante ou com exatamente metade das saídas em 1
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HiddenFunction {
    Constant { value: bool },
    Balanced { table: Vec<bool> },
}

impl HiddenFunction {
    /// Sorteia uma função constante ou balanceada sobre n bits
    pub fn random<R: Rng + ?Sized>(n: usize, balanced: Option<bool>, rng: &mut R) -> Self {
        let balanced = balanced.unwrap_or_else(|| rng.gen_bool(0.5));
        if balanced {
            let size = 1usize << n;
            let mut table: Vec<bool> = (0..size).map(|i| i < size / 2).collect();
            table.shuffle(rng);
            HiddenFunction::Balanced { table }
        } else {
            HiddenFunction::Constant {
                value: rng.gen_bool(0.5),
            }
        }
    }

    pub fn eval(&self, x: usize) -> bool {
        match self {
            HiddenFunction::Constant { value } => *value,
            HiddenFunction::Balanced { table } => table[x],
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self, HiddenFunction::Balanced { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeutschJozsaReport {
    pub bits: usize,
    pub function: HiddenFunction,
    pub measured: Vec<u8>,
    pub balanced: bool,
}

impl fmt::Display for DeutschJozsaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actual = match &self.function {
            HiddenFunction::Constant { value } => format!("constant {}", u8::from(*value)),
            HiddenFunction::Balanced { .. } => "balanced".to_string(),
        };
        writeln!(f, "f was {actual}")?;
        writeln!(f, "x = {:?}", self.measured)?;
        write!(
            f,
            "decision: {}",
            if self.balanced { "balanced" } else { "constant" }
        )
    }
}

/// Executa o circuito sobre n + 1 qubits; x = 0…0 indica f constante
pub fn run<R: Rng + ?Sized>(
    n: usize,
    balanced: Option<bool>,
    measurer: &Measurer,
    rng: &mut R,
) -> Result<DeutschJozsaReport> {
    ensure!((1..=8).contains(&n), "Deutsch-Jozsa register must have 1..=8 bits, got {n}");
    let function = HiddenFunction::random(n, balanced, rng);
    let gate = uf(n, |x| function.eval(x)).context("building Deutsch-Jozsa oracle")?;
    let hadamard = hn(n)?;

    let mut bits = vec![0u8; n];
    bits.push(1);
    let state = create_state(&bits)?;
    let state = apply_gate(&state, &hadamard, 0)?;
    let state = apply_gate(&state, &HADAMARD, n)?;
    let state = apply_gate(&state, &gate, 0)?;
    let mut state = apply_gate(&state, &hadamard, 0)?;

    let measured = measurer.measure_range(&mut state, 0, n - 1, rng)?;
    let decision = to_int(&measured) != 0;
    info!(bits = n, balanced = decision, "deutsch-jozsa finished");

    Ok(DeutschJozsaReport {
        bits: n,
        function,
        measured,
        balanced: decision,
    })
}
