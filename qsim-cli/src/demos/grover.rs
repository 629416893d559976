//! Busca de Grover: encontra o único x com f(x) = 1 em ⌊√2ⁿ⌋ iterações

use std::fmt;

use anyhow::{Context, Result, ensure};
use qsim_gates::{HADAMARD, hn, mean_inversion, uf};
use qsim_state::{Measurer, apply_gate, create_state, preview_probabilities};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::to_int;

#[derive(Debug, Clone, Serialize)]
pub struct GroverReport {
    pub bits: usize,
    pub secret: usize,
    pub iterations: usize,
    /// Probabilidade do elemento marcado imediatamente antes da medição
    pub success_probability: f64,
    pub guess: usize,
}

impl fmt::Display for GroverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secret: {}", self.secret)?;
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f, "P(secret) = {:.4}", self.success_probability)?;
        write!(f, "Guess: {}", self.guess)
    }
}

/// Número de iterações para 2ⁿ elementos
pub fn iterations(n: usize) -> usize {
    ((1u64 << n) as f64).sqrt().floor() as usize
}

pub fn run<R: Rng + ?Sized>(
    n: usize,
    secret: Option<usize>,
    measurer: &Measurer,
    rng: &mut R,
) -> Result<GroverReport> {
    ensure!((1..=8).contains(&n), "search register must have 1..=8 bits, got {n}");
    let size = 1usize << n;
    let secret = secret.unwrap_or_else(|| rng.gen_range(0..size));
    ensure!(secret < size, "secret {secret} does not fit in {n} bits");

    let oracle = uf(n, |x| x == secret).context("building search oracle")?;
    let diffusion = mean_inversion(n)?;

    let mut bits = vec![0u8; n];
    bits.push(1);
    let state = create_state(&bits)?;
    let state = apply_gate(&state, &hn(n)?, 0)?;
    let mut state = apply_gate(&state, &HADAMARD, n)?;

    let loops = iterations(n);
    for i in 0..loops {
        state = apply_gate(&state, &oracle, 0)?;
        state = apply_gate(&state, &diffusion, 0)?;
        debug!(iteration = i + 1, "amplitude amplification step");
    }

    let success_probability = preview_probabilities(&state, 0, n - 1)?[secret];
    let guess = to_int(&measurer.measure_range(&mut state, 0, n - 1, rng)?);
    info!(secret, guess, success_probability, "grover finished");

    Ok(GroverReport {
        bits: n,
        secret,
        iterations: loops,
        success_probability,
        guess,
    })
}
