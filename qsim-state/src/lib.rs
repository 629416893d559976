//! # 🎲 qsim-state — Motor de estados multi-qubit
//!
//! Representa um registrador de n qubits como um único vetor de amplitudes
//! 2ⁿ×1 (qubit 0 = bit mais significativo), posiciona portas em qualquer
//! deslocamento compondo com identidades, constrói projetores de subespaço
//! e implementa a medição aleatória com colapso no lugar.
//!
//! ## Computational Complexity
//!
//! **Aplicação de porta — O(8ⁿ) no pior caso:**
//! - Operador completo I ⊗ G ⊗ I é denso, 4ⁿ elementos
//! - Produto matriz·vetor ignora entradas nulas
//!
//! **Medição de m qubits — O(2ᵐ · 4ⁿ):**
//! - Um projetor 2ⁿ×2ⁿ por resultado possível
//! - Colapso reutiliza o projetor do resultado sorteado
//!
//! **Scalability:** ⚠ Exponencial em n; prático até ~12 qubits.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  create_state ──► apply_gate ──► measure_range  │
//! │       │               │               │         │
//! │   bits.rs        lift_gate      projector.rs    │
//! │                                  Measurer       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_gates::{CNOT, HADAMARD};
//! use qsim_state::{apply_gate, create_state, measure_range};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let state = create_state(&[0, 0]).unwrap();
//! let state = apply_gate(&state, &HADAMARD, 0).unwrap();
//! let mut bell = apply_gate(&state, &CNOT, 0).unwrap();
//!
//! let first = measure_range(&mut bell, 0, 0, &mut rng).unwrap();
//! let second = measure_range(&mut bell, 1, 1, &mut rng).unwrap();
//! assert_eq!(first, second);
//! ```

pub mod bits;
pub mod error;
pub mod measure;
pub mod projector;
pub mod state;

pub use bits::{bits_to_index, index_to_bits};
pub use error::{StateError, StateResult};
pub use measure::{
    MeasurementConfig, Measurer, choose_from, collapse_state, measure_all, measure_range,
    measure_standard, preview_probabilities, probability_one,
};
pub use projector::{get_projector, get_projector_range};
pub use state::{apply_gate, create_qubit, create_state, get_num_bits, lift_gate};
