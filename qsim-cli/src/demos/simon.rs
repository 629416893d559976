//! Problema de Simon: recupera a máscara c tal que f(x) = f(y) ⇔ y ∈ {x, x ⊕ c}

use std::fmt;

use anyhow::{Context, Result, bail, ensure};
use qsim_gates::{hn, ufn};
use qsim_state::{Measurer, apply_gate, create_state};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, info};

use super::to_int;

/// Limite de execuções do circuito antes de desistir
pub const MAX_RUNS: usize = 64;

#[derive(Debug, Clone, Serialize)]
pub struct SimonReport {
    pub bits: usize,
    pub secret: usize,
    pub runs: usize,
    /// Valores y medidos, todos com y·c = 0 (mod 2)
    pub equations: Vec<usize>,
    pub found: usize,
}

impl fmt::Display for SimonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "secret c = {}", self.secret)?;
        writeln!(f, "Ran quantum algorithm {} times.", self.runs)?;
        writeln!(f, "equations: {:?}", self.equations)?;
        write!(f, "Found c = {}", self.found)
    }
}

/// Tabela de f com f(x) = f(x ⊕ c) e saídas distintas entre pares
pub fn hidden_function<R: Rng + ?Sized>(n: usize, secret: usize, rng: &mut R) -> Vec<usize> {
    let size = 1usize << n;
    let mut outputs: Vec<usize> = (0..size).collect();
    outputs.shuffle(rng);
    (0..size).map(|x| outputs[x.min(x ^ secret)]).collect()
}

/// Paridade de y·c sobre GF(2)
fn dot(y: usize, c: usize) -> bool {
    (y & c).count_ones() % 2 == 1
}

/// Máscaras não nulas consistentes com todas as equações
pub fn candidates(n: usize, equations: &[usize]) -> Vec<usize> {
    (1..1usize << n)
        .filter(|&c| equations.iter().all(|&y| !dot(y, c)))
        .collect()
}

/// Repete o circuito até restar uma única máscara consistente.
///
/// Se nenhuma máscara não nula sobrevive, f é injetiva e c = 0.
pub fn run<R: Rng + ?Sized>(
    n: usize,
    secret: Option<usize>,
    measurer: &Measurer,
    rng: &mut R,
) -> Result<SimonReport> {
    ensure!((1..=4).contains(&n), "Simon register must have 1..=4 bits, got {n}");
    let size = 1usize << n;
    let secret = secret.unwrap_or_else(|| rng.gen_range(1..size));
    ensure!(secret < size, "secret {secret} does not fit in {n} bits");

    let table = hidden_function(n, secret, rng);
    let oracle = ufn(n, |x| table[x]).context("building Simon oracle")?;
    let hadamard = hn(n)?;

    let mut equations: Vec<usize> = Vec::new();
    for runs in 1..=MAX_RUNS {
        let state = create_state(&vec![0u8; 2 * n])?;
        let state = apply_gate(&state, &hadamard, 0)?;
        let state = apply_gate(&state, &oracle, 0)?;
        let mut state = apply_gate(&state, &hadamard, 0)?;

        let result = measurer.measure_all(&mut state, rng)?;
        let y = to_int(&result[..n]);
        debug!(run = runs, y, "simon sample");
        if y != 0 && !equations.contains(&y) {
            equations.push(y);
        }

        let remaining = candidates(n, &equations);
        if remaining.len() <= 1 {
            let found = remaining.first().copied().unwrap_or(0);
            info!(secret, found, runs, "simon finished");
            return Ok(SimonReport {
                bits: n,
                secret,
                runs,
                equations,
                found,
            });
        }
    }

    bail!("mask not isolated after {MAX_RUNS} runs")
}
