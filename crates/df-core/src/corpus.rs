//! Input corpus: the fixed boundary battery plus loaded or generated
//! arbitrary bit patterns, and the canonical case iteration order shared by
//! generate and verify.

use std::io::{BufRead, Write};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::bits::{DENORMAL_MAX, HALF, NEG_INF, POS_INF, ZERO};
use crate::op::Operator;

/// Fixed battery of boundary-value operand pairs, run before the corpus
/// sweep in both modes. Order is part of the truth-file format: the battery's
/// result lines are always the first entries of both truth streams.
///
/// "Denormal" here is the largest denormal pattern; asymmetric combinations
/// appear in both orderings since e.g. denormal/zero and zero/denormal
/// exercise different paths.
const BOUNDARY_BATTERY: [(u32, u32); 19] = [
    (ZERO, ZERO),
    (ZERO, HALF),
    (DENORMAL_MAX, DENORMAL_MAX),
    (DENORMAL_MAX, HALF),
    (HALF, DENORMAL_MAX),
    (ZERO, DENORMAL_MAX),
    (DENORMAL_MAX, ZERO),
    (POS_INF, POS_INF),
    (POS_INF, NEG_INF),
    (NEG_INF, POS_INF),
    (NEG_INF, NEG_INF),
    (POS_INF, HALF),
    (NEG_INF, HALF),
    (HALF, POS_INF),
    (HALF, NEG_INF),
    (POS_INF, DENORMAL_MAX),
    (NEG_INF, DENORMAL_MAX),
    (ZERO, POS_INF),
    (ZERO, NEG_INF),
];

/// The fixed boundary-value operand pairs, in sweep order.
pub fn boundary_battery() -> &'static [(u32, u32)] {
    &BOUNDARY_BATTERY
}

/// Corpus loading errors.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed corpus line {line}: {content:?} is not a u32")]
    MalformedLine { line: usize, content: String },
}

/// Ordered list of additional input bit patterns, tested pairwise against
/// themselves (upper-triangular, self-pairs included) after the battery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    patterns: Vec<u32>,
}

impl Corpus {
    pub fn new(patterns: Vec<u32>) -> Self {
        Self { patterns }
    }

    /// Generate `count` patterns from a seeded ChaCha8 stream, so a corpus
    /// can be reproduced from its seed alone.
    pub fn random(count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let patterns = (0..count).map(|_| rng.next_u32()).collect();
        Self { patterns }
    }

    /// Parse a corpus stream: one decimal `u32` per line. Blank lines are
    /// tolerated (trailing newlines in hand-edited files); anything else
    /// that fails to parse aborts the load with the offending line number.
    pub fn read_from(reader: impl BufRead) -> Result<Self, CorpusError> {
        let mut patterns = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = trimmed
                .parse::<u32>()
                .map_err(|_| CorpusError::MalformedLine {
                    line: idx + 1,
                    content: line.clone(),
                })?;
            patterns.push(value);
        }
        Ok(Self { patterns })
    }

    /// Write the corpus in the same one-decimal-per-line format.
    pub fn write_to(&self, mut writer: impl Write) -> std::io::Result<()> {
        for pattern in &self.patterns {
            writeln!(writer, "{pattern}")?;
        }
        writer.flush()
    }

    pub fn patterns(&self) -> &[u32] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Drive the canonical case order: every battery pair, then the
/// upper-triangular corpus sweep (`i` over all patterns, `j` from `i`), with
/// the four operators in `Operator::ALL` order for each pair.
///
/// Generate and verify both run through this single function, so the
/// truth-file line order cannot drift between modes.
pub fn for_each_case<F>(corpus: &Corpus, mut f: F)
where
    F: FnMut(u32, u32, Operator),
{
    for &(a, b) in BOUNDARY_BATTERY.iter() {
        for op in Operator::ALL {
            f(a, b, op);
        }
    }

    let patterns = corpus.patterns();
    for i in 0..patterns.len() {
        for j in i..patterns.len() {
            for op in Operator::ALL {
                f(patterns[i], patterns[j], op);
            }
        }
    }
}

/// Total number of cases `for_each_case` will yield for this corpus.
pub fn case_count(corpus: &Corpus) -> u64 {
    let n = corpus.len() as u64;
    let pairs = n * (n + 1) / 2;
    (BOUNDARY_BATTERY.len() as u64 + pairs) * Operator::ALL.len() as u64
}
