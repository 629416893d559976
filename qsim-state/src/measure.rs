//! Medição projetiva com colapso
//!
//! Medir é a única transição destrutiva do motor: sorteia um resultado a
//! partir das probabilidades ⟨ψ|P_k|ψ⟩ e substitui o estado, no lugar, por
//! P_k|ψ⟩ renormalizado. Para inspecionar a distribuição sem colapsar use
//! [`preview_probabilities`], que não tem equivalente físico.

use qsim_gates::{KET_ONE, KET_ZERO, P1};
use qsim_matrix::{Matrix, expected_value, multiply, scalar_multiply};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bits::index_to_bits;
use crate::error::{StateError, StateResult};
use crate::projector::{check_range, get_projector_range};
use crate::state::state_bits;

/// Parâmetros de amostragem e colapso
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementConfig {
    /// Probabilidade mínima aceita para renormalizar após o colapso
    pub min_probability: f64,
    /// Renormaliza a distribuição pelo total antes de sortear
    pub renormalize: bool,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            min_probability: 1e-12,
            renormalize: true,
        }
    }
}

/// Executor de medições com configuração explícita
#[derive(Debug, Clone, Default)]
pub struct Measurer {
    config: MeasurementConfig,
}

impl Measurer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MeasurementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MeasurementConfig {
        &self.config
    }

    /// Sorteia um índice pela distribuição acumulada.
    ///
    /// Entradas negativas (deriva numérica) contam como zero e resultados
    /// com probabilidade zero nunca são escolhidos. Esgotar a lista sem
    /// selecionar nada é um erro de lógica, não um retorno padrão.
    pub fn choose_from<R: Rng + ?Sized>(
        &self,
        probabilities: &[f64],
        rng: &mut R,
    ) -> StateResult<usize> {
        let total: f64 = probabilities.iter().map(|p| p.max(0.0)).sum();
        if !(total > 0.0) || !total.is_finite() {
            return Err(StateError::SamplingExhausted);
        }

        let scale = if self.config.renormalize { total } else { 1.0 };
        let r = rng.gen_range(0.0..1.0) * scale;

        let mut cumulative = 0.0;
        for (k, &p) in probabilities.iter().enumerate() {
            let p = p.max(0.0);
            cumulative += p;
            if p > 0.0 && r <= cumulative {
                return Ok(k);
            }
        }
        Err(StateError::SamplingExhausted)
    }

    /// Mede os qubits [a, b] e colapsa `state` no lugar.
    ///
    /// Retorna os b − a + 1 bits observados (MSB primeiro). Medir de novo a
    /// mesma faixa sem portas intermediárias devolve o mesmo resultado.
    pub fn measure_range<R: Rng + ?Sized>(
        &self,
        state: &mut Matrix,
        a: usize,
        b: usize,
        rng: &mut R,
    ) -> StateResult<Vec<u8>> {
        let n = state_bits(state)?;
        check_range(a, b, n)?;
        let width = b - a + 1;

        let probabilities = preview_probabilities(state, a, b)?;
        let total: f64 = probabilities.iter().sum();
        if total < self.config.min_probability {
            return Err(StateError::NormalizationFailure { probability: total });
        }

        let outcome = self.choose_from(&probabilities, rng)?;
        let probability = probabilities[outcome];
        debug!(a, b, outcome, probability, "sampled measurement outcome");

        if probability < self.config.min_probability {
            return Err(StateError::NormalizationFailure { probability });
        }

        let projected = collapse_state(state, outcome, a, b)?;
        let collapsed = scalar_multiply(1.0 / probability.sqrt(), &projected);
        state.as_mut_slice().copy_from_slice(collapsed.as_slice());
        debug!(qubits = n, a, b, "state collapsed");

        Ok(index_to_bits(outcome, width))
    }

    /// Mede todos os qubits do registrador
    pub fn measure_all<R: Rng + ?Sized>(
        &self,
        state: &mut Matrix,
        rng: &mut R,
    ) -> StateResult<Vec<u8>> {
        let last = state_bits(state)?
            .checked_sub(1)
            .ok_or(StateError::EmptyRegister)?;
        self.measure_range(state, 0, last, rng)
    }

    /// Medição de um qubit isolado: um sorteio de Bernoulli contra
    /// P(|1⟩), deixando `qubit` exatamente em |0⟩ ou |1⟩.
    pub fn measure_standard<R: Rng + ?Sized>(
        &self,
        qubit: &mut Matrix,
        rng: &mut R,
    ) -> StateResult<u8> {
        state_bits(qubit)?;
        let p1 = probability_one(qubit)?;
        let bit = u8::from(rng.gen_range(0.0..1.0) < p1);
        let basis: &Matrix = if bit == 1 { &*KET_ONE } else { &*KET_ZERO };
        qubit.as_mut_slice().copy_from_slice(basis.as_slice());
        debug!(p1, bit, "single qubit measured");
        Ok(bit)
    }
}

/// Distribuição dos resultados possíveis da faixa [a, b], sem colapso.
///
/// Não corresponde a nenhuma operação física: serve a testes e diagnóstico.
pub fn preview_probabilities(state: &Matrix, a: usize, b: usize) -> StateResult<Vec<f64>> {
    let n = state_bits(state)?;
    check_range(a, b, n)?;
    let outcomes = 1usize << (b - a + 1);

    let mut probabilities = Vec::with_capacity(outcomes);
    for k in 0..outcomes {
        let projector = get_projector_range(k, a, b, n)?;
        let p = expected_value(&projector, state)?.re.max(0.0);
        trace!(outcome = k, probability = p, "outcome probability");
        probabilities.push(p);
    }
    Ok(probabilities)
}

/// Projeção P_i·ψ da faixa [a, b], sem renormalizar
pub fn collapse_state(state: &Matrix, i: usize, a: usize, b: usize) -> StateResult<Matrix> {
    let n = state_bits(state)?;
    let projector = get_projector_range(i, a, b, n)?;
    Ok(multiply(&projector, state)?)
}

/// P(|1⟩) de um qubit isolado
pub fn probability_one(qubit: &Matrix) -> StateResult<f64> {
    Ok(expected_value(&P1, qubit)?.re.clamp(0.0, 1.0))
}

/// [`Measurer::choose_from`] com a configuração padrão
pub fn choose_from<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> StateResult<usize> {
    Measurer::new().choose_from(probabilities, rng)
}

/// [`Measurer::measure_range`] com a configuração padrão
pub fn measure_range<R: Rng + ?Sized>(
    state: &mut Matrix,
    a: usize,
    b: usize,
    rng: &mut R,
) -> StateResult<Vec<u8>> {
    Measurer::new().measure_range(state, a, b, rng)
}

/// [`Measurer::measure_all`] com a configuração padrão
pub fn measure_all<R: Rng + ?Sized>(state: &mut Matrix, rng: &mut R) -> StateResult<Vec<u8>> {
    Measurer::new().measure_all(state, rng)
}

/// [`Measurer::measure_standard`] com a configuração padrão
pub fn measure_standard<R: Rng + ?Sized>(qubit: &mut Matrix, rng: &mut R) -> StateResult<u8> {
    Measurer::new().measure_standard(qubit, rng)
}
