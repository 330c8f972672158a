//! df-compare: ground-truth generation and lockstep verification.
//!
//! Generate mode sweeps every case and persists both implementations'
//! result bit patterns, one decimal per line, to two parallel truth streams.
//! Verify mode re-runs the identical sweep in the identical order and
//! compares fresh results line-by-line against the persisted truth,
//! tallying mismatches per implementation and producing a report.

pub mod error;
pub mod report;
pub mod runner;

pub use error::{CompareError, TruthStream};
pub use report::{Implementation, Mismatch, VerifyReport};
pub use runner::{NanMode, VerifyOptions, generate, verify};
