//! Verification reporting — per-run tallies, capped mismatch details, and
//! human-readable plus machine-readable summaries.

use df_core::bits::verbose;
use df_core::op::Operator;
use serde::{Deserialize, Serialize};

/// Which implementation diverged from the persisted truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Implementation {
    Native,
    DFloat,
}

impl core::fmt::Display for Implementation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Implementation::Native => write!(f, "float"),
            Implementation::DFloat => write!(f, "dfloat"),
        }
    }
}

/// One detected divergence between a freshly computed result and the truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mismatch {
    pub implementation: Implementation,
    pub op: Operator,
    /// Left operand bit pattern.
    pub lhs: u32,
    /// Right operand bit pattern.
    pub rhs: u32,
    /// Freshly computed result bit pattern.
    pub got: u32,
    /// Persisted ground-truth bit pattern.
    pub expected: u32,
}

impl core::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {} result diff: res {} != truth {}\n  inputs: {} {} {}",
            self.implementation,
            self.op,
            verbose(self.got),
            verbose(self.expected),
            verbose(self.lhs),
            self.op.symbol(),
            verbose(self.rhs),
        )
    }
}

/// Summary of one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Descriptive label (e.g. "verify seed=42 count=10000").
    pub label: String,
    /// Corpus seed, when the corpus was generated rather than loaded.
    pub seed: Option<u64>,
    /// Total cases executed, mismatching or not.
    pub total_tests: u64,
    /// Native float unit disagreements with the truth stream.
    pub native_mismatches: u64,
    /// Deterministic implementation disagreements with the truth stream.
    pub soft_mismatches: u64,
    /// Detailed records, capped at the configured report limit.
    pub mismatches: Vec<Mismatch>,
    /// Mismatches tallied above but not detailed (past the cap).
    pub suppressed: u64,
}

impl VerifyReport {
    pub fn new(label: String, seed: Option<u64>) -> Self {
        Self {
            label,
            seed,
            total_tests: 0,
            native_mismatches: 0,
            soft_mismatches: 0,
            mismatches: Vec::new(),
            suppressed: 0,
        }
    }

    /// Tally a mismatch, keeping its detail only while under `max_reports`
    /// combined detail entries.
    pub fn record(&mut self, mismatch: Mismatch, max_reports: usize) {
        match mismatch.implementation {
            Implementation::Native => self.native_mismatches += 1,
            Implementation::DFloat => self.soft_mismatches += 1,
        }
        if self.mismatches.len() < max_reports {
            self.mismatches.push(mismatch);
        } else {
            self.suppressed += 1;
        }
    }

    /// True iff both implementations matched the truth on every case.
    pub fn passed(&self) -> bool {
        self.native_mismatches == 0 && self.soft_mismatches == 0
    }

    /// Human-readable report text.
    pub fn summary(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "============================================================"
        );
        let _ = writeln!(out, "Determinism report: {}", self.label);
        if let Some(seed) = self.seed {
            let _ = writeln!(out, "Seed: {seed}");
        }
        let _ = writeln!(out, "Tested {} cases.", self.total_tests);

        if self.passed() {
            let _ = writeln!(out, "Result: PASS");
        } else {
            let _ = writeln!(out, "Result: FAIL");
            let _ = writeln!(
                out,
                "{} errors with floats, {} with dfloats",
                self.native_mismatches, self.soft_mismatches
            );
        }

        for mismatch in &self.mismatches {
            let _ = writeln!(out, "{mismatch}");
        }
        if self.suppressed > 0 {
            let _ = writeln!(
                out,
                "... {} further mismatches tallied but not shown",
                self.suppressed
            );
        }
        let _ = writeln!(
            out,
            "============================================================"
        );
        out
    }

    /// Print the summary to stdout.
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(implementation: Implementation) -> Mismatch {
        Mismatch {
            implementation,
            op: Operator::Mul,
            lhs: 0x3F00_0000,
            rhs: 0x3F00_0000,
            got: 0x3E80_0000,
            expected: 0x3E80_0001,
        }
    }

    #[test]
    fn empty_report_passes() {
        let report = VerifyReport::new("unit".into(), None);
        assert!(report.passed());
        assert!(report.summary().contains("Result: PASS"));
    }

    #[test]
    fn record_tallies_per_implementation() {
        let mut report = VerifyReport::new("unit".into(), None);
        report.record(sample(Implementation::Native), 10);
        report.record(sample(Implementation::DFloat), 10);
        report.record(sample(Implementation::DFloat), 10);
        assert_eq!(report.native_mismatches, 1);
        assert_eq!(report.soft_mismatches, 2);
        assert!(!report.passed());
        assert!(
            report
                .summary()
                .contains("1 errors with floats, 2 with dfloats")
        );
    }

    #[test]
    fn details_are_capped_but_tally_is_not() {
        let mut report = VerifyReport::new("unit".into(), None);
        for _ in 0..7 {
            report.record(sample(Implementation::Native), 3);
        }
        assert_eq!(report.native_mismatches, 7);
        assert_eq!(report.mismatches.len(), 3);
        assert_eq!(report.suppressed, 4);

        let summary = report.summary();
        assert_eq!(
            summary
                .matches("further mismatches tallied but not shown")
                .count(),
            1
        );
    }

    #[test]
    fn mismatch_display_renders_verbose_patterns() {
        let text = sample(Implementation::DFloat).to_string();
        assert!(text.starts_with("dfloat mul result diff"));
        assert!(text.contains(" * "));
        assert!(text.contains("00111111000000000000000000000000"));
        assert!(text.contains("1056964608"));
    }

    #[test]
    fn report_round_trips_through_json() {
        let mut report = VerifyReport::new("unit".into(), Some(42));
        report.record(sample(Implementation::Native), 10);
        let back: VerifyReport = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(back.native_mismatches, 1);
        assert_eq!(back.seed, Some(42));
        assert_eq!(back.mismatches.len(), 1);
    }
}
