//! Error types for the verification run.
//!
//! Only stream problems are errors. A value mismatch is the signal this
//! system exists to detect and is tallied, never raised.

use thiserror::Error;

/// Which truth stream an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthStream {
    Native,
    DFloat,
}

impl core::fmt::Display for TruthStream {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TruthStream::Native => write!(f, "float results"),
            TruthStream::DFloat => write!(f, "dfloat results"),
        }
    }
}

/// Fatal conditions aborting a generate or verify run.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed {stream} truth line {line}: {content:?} is not a u32")]
    MalformedTruth {
        stream: TruthStream,
        line: usize,
        content: String,
    },

    #[error("{stream} truth stream exhausted at line {line}: fewer lines than test cases")]
    TruthExhausted { stream: TruthStream, line: usize },
}
