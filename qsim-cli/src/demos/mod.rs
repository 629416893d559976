//! Programas de demonstração sobre o motor de estados
//!
//! Cada demonstração é uma função que recebe a fonte aleatória e o
//! [`Measurer`](qsim_state::Measurer) e devolve um relatório serializável;
//! a impressão fica no binário.

pub mod bell;
pub mod bench_hn;
pub mod deutsch;
pub mod deutsch_jozsa;
pub mod grover;
pub mod measure_any;
pub mod shor;
pub mod simon;

/// Inteiro a partir de bits MSB primeiro
pub(crate) fn to_int(bits: &[u8]) -> usize {
    qsim_state::bits_to_index(bits)
}
