//! Generate and verify sweeps.
//!
//! Both modes walk `df_core::for_each_case` so the case order is identical
//! by construction: the boundary battery first, then the upper-triangular
//! corpus sweep, four operators per pair. The sweep is single-threaded and
//! synchronous; truth streams must be fully available and positioned at
//! their start before `verify` is called.

use std::io::{BufRead, Lines, Write};

use df_core::backend::{SoftFloat, operate};
use df_core::bits::is_nan_bits;
use df_core::corpus::{Corpus, for_each_case};

use crate::error::{CompareError, TruthStream};
use crate::report::{Implementation, Mismatch, VerifyReport};

/// NaN comparison mode.
///
/// Distinct NaN bit patterns are not guaranteed portable, so relaxed mode
/// treats any two NaN-decoding patterns as equal regardless of payload or
/// sign. Strict mode demands the exact persisted pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanMode {
    #[default]
    Strict,
    Relaxed,
}

/// Knobs for one verify run.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub nan_mode: NanMode,
    /// Combined cap on detailed mismatch records; tallying continues past it.
    pub max_reports: usize,
    /// Label carried into the report.
    pub label: String,
    /// Corpus seed carried into the report, when known.
    pub seed: Option<u64>,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            nan_mode: NanMode::Strict,
            max_reports: 25,
            label: "verify".into(),
            seed: None,
        }
    }
}

/// Run generate mode: sweep every case, writing the native result stream and
/// the dfloat result stream in lockstep, one decimal `u32` per line. Returns
/// the number of cases written.
pub fn generate<B: SoftFloat>(
    backend: &B,
    corpus: &Corpus,
    mut native_out: impl Write,
    mut soft_out: impl Write,
) -> std::io::Result<u64> {
    let mut io_err: Option<std::io::Error> = None;
    let mut cases = 0u64;

    for_each_case(corpus, |a, b, op| {
        if io_err.is_some() {
            return;
        }
        let result = operate(backend, a, b, op);
        let wrote = writeln!(native_out, "{}", result.native)
            .and_then(|_| writeln!(soft_out, "{}", result.soft));
        match wrote {
            Ok(()) => cases += 1,
            Err(e) => io_err = Some(e),
        }
    });

    if let Some(e) = io_err {
        return Err(e);
    }
    native_out.flush()?;
    soft_out.flush()?;
    Ok(cases)
}

/// Run verify mode: re-execute the identical sweep and compare each fresh
/// result pair against the next line of each truth stream.
///
/// Mismatches are tallied and recorded (up to `options.max_reports` details)
/// and the sweep continues; only stream failures abort.
pub fn verify<B: SoftFloat>(
    backend: &B,
    corpus: &Corpus,
    native_truth: impl BufRead,
    soft_truth: impl BufRead,
    options: &VerifyOptions,
) -> Result<VerifyReport, CompareError> {
    let mut native_reader = TruthReader::new(native_truth, TruthStream::Native);
    let mut soft_reader = TruthReader::new(soft_truth, TruthStream::DFloat);

    let mut report = VerifyReport::new(options.label.clone(), options.seed);
    let mut stream_err: Option<CompareError> = None;

    for_each_case(corpus, |a, b, op| {
        if stream_err.is_some() {
            return;
        }
        let fresh = operate(backend, a, b, op);

        let native_expected = match native_reader.next_value() {
            Ok(v) => v,
            Err(e) => {
                stream_err = Some(e);
                return;
            }
        };
        let soft_expected = match soft_reader.next_value() {
            Ok(v) => v,
            Err(e) => {
                stream_err = Some(e);
                return;
            }
        };

        report.total_tests += 1;

        if !values_match(fresh.native, native_expected, options.nan_mode) {
            report.record(
                Mismatch {
                    implementation: Implementation::Native,
                    op,
                    lhs: a,
                    rhs: b,
                    got: fresh.native,
                    expected: native_expected,
                },
                options.max_reports,
            );
        }
        if !values_match(fresh.soft, soft_expected, options.nan_mode) {
            report.record(
                Mismatch {
                    implementation: Implementation::DFloat,
                    op,
                    lhs: a,
                    rhs: b,
                    got: fresh.soft,
                    expected: soft_expected,
                },
                options.max_reports,
            );
        }
    });

    match stream_err {
        Some(e) => Err(e),
        None => Ok(report),
    }
}

/// Bit-exact equality, with the relaxed-NaN allowance: under relaxed mode
/// any two NaN-decoding patterns compare equal.
fn values_match(got: u32, expected: u32, mode: NanMode) -> bool {
    got == expected
        || (mode == NanMode::Relaxed && is_nan_bits(got) && is_nan_bits(expected))
}

/// Line-by-line `u32` reader over one truth stream, tracking the line number
/// for diagnostics.
struct TruthReader<R: BufRead> {
    lines: Lines<R>,
    stream: TruthStream,
    line: usize,
}

impl<R: BufRead> TruthReader<R> {
    fn new(reader: R, stream: TruthStream) -> Self {
        Self {
            lines: reader.lines(),
            stream,
            line: 0,
        }
    }

    fn next_value(&mut self) -> Result<u32, CompareError> {
        self.line += 1;
        match self.lines.next() {
            None => Err(CompareError::TruthExhausted {
                stream: self.stream,
                line: self.line,
            }),
            Some(line) => {
                let line = line?;
                line.trim()
                    .parse::<u32>()
                    .map_err(|_| CompareError::MalformedTruth {
                        stream: self.stream,
                        line: self.line,
                        content: line,
                    })
            }
        }
    }
}
