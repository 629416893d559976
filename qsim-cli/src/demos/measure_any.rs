//! Medição de um qubit arbitrário em (|0000⟩ + |0110⟩ + |1000⟩ + |1110⟩)/2

use std::fmt;

use anyhow::Result;
use qsim_gates::{CNOT, HADAMARD};
use qsim_matrix::{Matrix, expected_value};
use qsim_state::{Measurer, apply_gate, create_state, get_projector_range};
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// Probabilidade de um padrão na faixa [a, b]
#[derive(Debug, Clone, Serialize)]
pub struct PatternProbability {
    pub pattern: String,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasureAnyReport {
    pub before: Vec<PatternProbability>,
    pub measured_qubit: usize,
    pub outcome: u8,
    pub after: Vec<PatternProbability>,
}

impl fmt::Display for MeasureAnyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "In state |0000> + |0110> + |1000> + |1110>")?;
        for p in &self.before {
            writeln!(f, "  P({}) = {:.4}", p.pattern, p.probability)?;
        }
        writeln!(f, "qubit {} measured as {}", self.measured_qubit, self.outcome)?;
        let after: Vec<String> = self
            .after
            .iter()
            .map(|p| format!("  P({}) = {:.4}", p.pattern, p.probability))
            .collect();
        write!(f, "{}", after.join("\n"))
    }
}

// (valor, a, b) sobre 4 qubits
const PATTERNS: [(usize, usize, usize); 5] = [(0, 0, 3), (0, 3, 3), (3, 1, 2), (1, 1, 2), (6, 0, 3)];

fn pattern_label(value: usize, a: usize, b: usize, n: usize) -> String {
    let bits = qsim_state::index_to_bits(value, b - a + 1);
    let body: String = (0..n)
        .map(|q| {
            if (a..=b).contains(&q) {
                char::from(b'0' + bits[q - a])
            } else {
                'x'
            }
        })
        .collect();
    format!("|{body}>")
}

fn probabilities(state: &Matrix) -> Result<Vec<PatternProbability>> {
    PATTERNS
        .iter()
        .map(|&(value, a, b)| {
            let projector = get_projector_range(value, a, b, 4)?;
            Ok(PatternProbability {
                pattern: pattern_label(value, a, b, 4),
                probability: expected_value(&projector, state)?.re,
            })
        })
        .collect()
}

/// Constrói o estado com H(0), H(1), CNOT(1); mede `qubit` e compara
pub fn run<R: Rng + ?Sized>(qubit: usize, measurer: &Measurer, rng: &mut R) -> Result<MeasureAnyReport> {
    let state = create_state(&[0, 0, 0, 0])?;
    let state = apply_gate(&state, &HADAMARD, 0)?;
    let state = apply_gate(&state, &HADAMARD, 1)?;
    let mut state = apply_gate(&state, &CNOT, 1)?;

    let before = probabilities(&state)?;
    let outcome = measurer.measure_range(&mut state, qubit, qubit, rng)?[0];
    info!(qubit, outcome, "measured single qubit of entangled register");
    let after = probabilities(&state)?;

    Ok(MeasureAnyReport {
        before,
        measured_qubit: qubit,
        outcome,
        after,
    })
}
