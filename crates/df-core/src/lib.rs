//! df-core: bit-level float handling for the determinism verifier.
//!
//! Provides the raw `u32`-pattern codec for IEEE-754 single-precision floats,
//! the four-operator dispatch that runs every case through both the native
//! float unit and a deterministic soft-float backend, and the input corpus
//! (fixed boundary battery plus loaded/random patterns).

pub mod backend;
pub mod bits;
pub mod corpus;
pub mod op;

pub use backend::{OperationResult, ReferenceSoftFloat, SoftFloat, operate};
pub use bits::{bits_to_float, float_to_bits, is_nan_bits, verbose};
pub use corpus::{Corpus, CorpusError, boundary_battery, case_count, for_each_case};
pub use op::Operator;
