//! Fatoração de Shor: período de aˣ mod N via QFT inversa, com o
//! pós-processamento clássico (frações contínuas e mdc)

use std::fmt;

use anyhow::{Context, Result, bail, ensure};
use qsim_gates::{hn, qft, ufmn};
use qsim_matrix::adjoint;
use qsim_state::{Measurer, apply_gate, create_state};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::to_int;

/// Tentativas quânticas antes de desistir
pub const MAX_ATTEMPTS: usize = 20;

/// Limite de qubits do registrador completo (entrada + saída)
pub const MAX_QUBITS: usize = 10;

/// Como terminou cada tentativa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Factored,
    /// x medido igual a 0: nenhuma informação sobre o período
    ZeroSample,
    PeriodNotFound,
    OddPeriod,
    /// a^(r/2) ≡ −1 (mod N)
    MinusOne,
    /// mdc trivial (1 ou N)
    Trivial,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShorAttempt {
    pub base: u64,
    pub output: usize,
    pub input: usize,
    pub period: Option<u64>,
    pub outcome: AttemptOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShorReport {
    pub number: u64,
    pub input_bits: usize,
    pub output_bits: usize,
    /// Vazio quando o fator sai classicamente (N par ou potência perfeita)
    pub attempts: Vec<ShorAttempt>,
    pub factors: (u64, u64),
}

impl fmt::Display for ShorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "N = {}", self.number)?;
        writeln!(f, "{} input qubits, {} output qubits", self.input_bits, self.output_bits)?;
        for attempt in &self.attempts {
            writeln!(
                f,
                "  a = {:<3} y = {:<3} x = {:<4} r = {:<6} {:?}",
                attempt.base,
                attempt.output,
                attempt.input,
                attempt
                    .period
                    .map_or_else(|| "-".to_string(), |r| r.to_string()),
                attempt.outcome
            )?;
        }
        write!(
            f,
            "two factors of N are {} and {}",
            self.factors.0, self.factors.1
        )
    }
}

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// base^exp mod modulus
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = u128::from(modulus);
    let mut result = 1u128;
    let mut b = u128::from(base) % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    result as u64
}

/// Bits necessários para representar 0..value (⌈log₂ value⌉)
pub fn bits_for(value: u64) -> usize {
    (u64::BITS - value.saturating_sub(1).leading_zeros()) as usize
}

/// Denominadores (> 1) dos convergentes de numerator/denominator menores que `limit`
pub fn convergent_denominators(numerator: u64, denominator: u64, limit: u64) -> Vec<u64> {
    let (mut num, mut den) = (numerator, denominator);
    let (mut k_prev2, mut k_prev1) = (1u64, 0u64);
    let mut result = Vec::new();

    while den != 0 {
        let a = num / den;
        (num, den) = (den, num % den);
        let k = a.saturating_mul(k_prev1).saturating_add(k_prev2);
        if k >= limit {
            break;
        }
        if k > 1 && !result.contains(&k) {
            result.push(k);
        }
        (k_prev2, k_prev1) = (k_prev1, k);
    }
    result
}

/// Menor r com aʳ ≡ 1 entre os denominadores e seus primeiros múltiplos
///
/// O convergente dá r/mdc(r, λ); até ⌈log₂ N⌉ múltiplos cobrem os casos
/// em que λ e r não são coprimos.
fn recover_period(base: u64, number: u64, denominators: &[u64]) -> Option<u64> {
    let multiples = bits_for(number) as u64;
    denominators
        .iter()
        .flat_map(|&q| (1..=multiples).map(move |k| q * k).take_while(move |&r| r < number))
        .filter(|&r| mod_pow(base, r, number) == 1)
        .min()
}

/// Fator clássico para N par ou potência perfeita
fn classical_factor(number: u64) -> Option<(u64, u64)> {
    if number % 2 == 0 {
        return Some((2, number / 2));
    }
    for k in 2..=bits_for(number) as u32 {
        let root = (number as f64).powf(1.0 / f64::from(k)).round() as u64;
        for candidate in [root.saturating_sub(1), root, root + 1] {
            if candidate > 1 && candidate.checked_pow(k) == Some(number) {
                return Some((candidate, number / candidate));
            }
        }
    }
    None
}

fn sorted(a: u64, b: u64) -> (u64, u64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Uma execução do circuito de estimativa de período com base `base`
fn attempt<R: Rng + ?Sized>(
    number: u64,
    base: u64,
    m: usize,
    n: usize,
    measurer: &Measurer,
    rng: &mut R,
) -> Result<(ShorAttempt, Option<(u64, u64)>)> {
    let oracle = ufmn(m, n, |x| mod_pow(base, x as u64, number) as usize)
        .context("building modular exponentiation oracle")?;

    let state = create_state(&vec![0u8; m + n])?;
    let state = apply_gate(&state, &hn(m)?, 0)?;
    let mut state = apply_gate(&state, &oracle, 0)?;

    let output = to_int(&measurer.measure_range(&mut state, m, m + n - 1, rng)?);
    let mut state = apply_gate(&state, &adjoint(&qft(m)?), 0)?;
    let input = to_int(&measurer.measure_range(&mut state, 0, m - 1, rng)?);
    debug!(base, output, input, "period estimation sample");

    let mut record = ShorAttempt {
        base,
        output,
        input,
        period: None,
        outcome: AttemptOutcome::ZeroSample,
    };
    if input == 0 {
        return Ok((record, None));
    }

    let denominators = convergent_denominators(input as u64, 1u64 << m, number);
    let Some(period) = recover_period(base, number, &denominators) else {
        record.outcome = AttemptOutcome::PeriodNotFound;
        return Ok((record, None));
    };
    record.period = Some(period);

    if period % 2 == 1 {
        record.outcome = AttemptOutcome::OddPeriod;
        return Ok((record, None));
    }

    let half = mod_pow(base, period / 2, number);
    if half == number - 1 {
        record.outcome = AttemptOutcome::MinusOne;
        return Ok((record, None));
    }

    let factor = [gcd(half + 1, number), gcd(half + number - 1, number)]
        .into_iter()
        .find(|&f| f > 1 && f < number);
    match factor {
        Some(f) => {
            record.outcome = AttemptOutcome::Factored;
            Ok((record, Some(sorted(f, number / f))))
        }
        None => {
            record.outcome = AttemptOutcome::Trivial;
            Ok((record, None))
        }
    }
}

/// Fatora `number`, repetindo com outra base coprima quando o período
/// medido é ímpar, a^(r/2) ≡ −1, o x medido é 0 ou o mdc é trivial.
///
/// `input_bits` é o tamanho do registrador de entrada; o padrão é igual ao
/// de saída (⌈log₂ N⌉) para manter o registrador completo pequeno.
pub fn run<R: Rng + ?Sized>(
    number: u64,
    input_bits: Option<usize>,
    base: Option<u64>,
    measurer: &Measurer,
    rng: &mut R,
) -> Result<ShorReport> {
    ensure!(number >= 4, "N must be a composite number >= 4, got {number}");
    let n = bits_for(number);
    let m = input_bits.unwrap_or(n);
    ensure!(m >= 1, "input register needs at least one qubit");
    ensure!(
        m + n <= MAX_QUBITS,
        "{} qubits exceed the dense simulation limit of {MAX_QUBITS}",
        m + n
    );

    if let Some(factors) = classical_factor(number) {
        info!(number, ?factors, "factored classically");
        return Ok(ShorReport {
            number,
            input_bits: m,
            output_bits: n,
            attempts: Vec::new(),
            factors,
        });
    }

    let bases: Vec<u64> = (2..number).filter(|&a| gcd(a, number) == 1).collect();
    if let Some(a) = base {
        ensure!(bases.contains(&a), "base {a} is not coprime to {number}");
    }

    let mut attempts = Vec::new();
    for _ in 0..MAX_ATTEMPTS {
        let a = match base {
            Some(a) => a,
            None => bases[rng.gen_range(0..bases.len())],
        };
        let (record, factors) = attempt(number, a, m, n, measurer, rng)?;
        let outcome = record.outcome;
        attempts.push(record);

        if let Some(factors) = factors {
            info!(number, ?factors, attempts = attempts.len(), "shor finished");
            return Ok(ShorReport {
                number,
                input_bits: m,
                output_bits: n,
                attempts,
                factors,
            });
        }
        warn!(number, base = a, ?outcome, "retrying with another base");
    }

    bail!("no factor of {number} found after {MAX_ATTEMPTS} attempts")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_number_theory_helpers() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(mod_pow(7, 4, 15), 1);
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(bits_for(15), 4);
        assert_eq!(bits_for(16), 4);
        assert_eq!(bits_for(17), 5);
    }

    #[test]
    fn test_convergent_denominators() {
        assert_eq!(convergent_denominators(4, 16, 15), vec![4]);
        assert_eq!(convergent_denominators(8, 16, 15), vec![2]);
        // 11/32 = [0; 2, 1, 10] → 1, 2, 3, 32
        assert_eq!(convergent_denominators(11, 32, 21), vec![2, 3]);
    }

    #[test]
    fn test_recover_period_uses_multiples() {
        assert_eq!(recover_period(7, 15, &[2]), Some(4));
        assert_eq!(recover_period(4, 15, &[2]), Some(2));
        assert_eq!(recover_period(7, 15, &[5]), None);
        assert_eq!(recover_period(7, 15, &[]), None);
    }

    #[test]
    fn test_classical_shortcuts() {
        let mut rng = StdRng::seed_from_u64(0);
        let report = run(14, None, None, &Measurer::new(), &mut rng).unwrap();
        assert_eq!(report.factors, (2, 7));
        assert!(report.attempts.is_empty());

        let report = run(9, None, None, &Measurer::new(), &mut rng).unwrap();
        assert_eq!(report.factors, (3, 3));
    }

    #[test]
    fn test_factors_fifteen() {
        let measurer = Measurer::new();
        for seed in 0..3 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = run(15, None, None, &measurer, &mut rng).unwrap();
            assert_eq!(report.factors, (3, 5));
            assert_eq!(report.input_bits, 4);
            let last = report.attempts.last().unwrap();
            assert_eq!(last.outcome, AttemptOutcome::Factored);
        }
    }

    #[test]
    fn test_minus_one_base_never_factors() {
        // 14 ≡ −1 (mod 15): período 2 e 14¹ ≡ −1
        let mut rng = StdRng::seed_from_u64(5);
        assert!(run(15, None, Some(14), &Measurer::new(), &mut rng).is_err());
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(run(3, None, None, &Measurer::new(), &mut rng).is_err());
        assert!(run(15, None, Some(5), &Measurer::new(), &mut rng).is_err());
        assert!(run(15, Some(7), None, &Measurer::new(), &mut rng).is_err());
    }
}
