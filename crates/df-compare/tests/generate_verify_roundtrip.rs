//! Generate mode followed immediately by verify mode over the same corpus
//! must report a clean pass: same process, same backend, same order.

use std::io::Cursor;

use df_compare::{VerifyOptions, generate, verify};
use df_core::{Corpus, ReferenceSoftFloat, case_count};

fn run_roundtrip(corpus: &Corpus) -> df_compare::VerifyReport {
    let backend = ReferenceSoftFloat;
    let mut native = Vec::new();
    let mut soft = Vec::new();

    let written = generate(&backend, corpus, &mut native, &mut soft).unwrap();
    assert_eq!(written, case_count(corpus));

    verify(
        &backend,
        corpus,
        Cursor::new(native),
        Cursor::new(soft),
        &VerifyOptions::default(),
    )
    .unwrap()
}

#[test]
fn empty_corpus_still_runs_the_boundary_battery() {
    let report = run_roundtrip(&Corpus::default());
    // 19 battery pairs, 4 operators each.
    assert_eq!(report.total_tests, 76);
    assert!(report.passed());
}

#[test]
fn random_corpus_roundtrip_is_clean() {
    let corpus = Corpus::random(50, 1234);
    let report = run_roundtrip(&corpus);
    assert_eq!(report.total_tests, case_count(&corpus));
    assert_eq!(report.native_mismatches, 0);
    assert_eq!(report.soft_mismatches, 0);
    assert!(report.mismatches.is_empty());
    assert_eq!(report.suppressed, 0);
}

#[test]
fn truth_streams_are_parallel_and_line_oriented() {
    let corpus = Corpus::new(vec![0x3F80_0000, 0x4000_0000]); // 1.0, 2.0
    let backend = ReferenceSoftFloat;
    let mut native = Vec::new();
    let mut soft = Vec::new();
    generate(&backend, &corpus, &mut native, &mut soft).unwrap();

    let native_lines: Vec<&str> = std::str::from_utf8(&native)
        .unwrap()
        .lines()
        .collect();
    let soft_lines: Vec<&str> = std::str::from_utf8(&soft).unwrap().lines().collect();

    assert_eq!(native_lines.len() as u64, case_count(&corpus));
    assert_eq!(native_lines.len(), soft_lines.len());

    // Every line is a bare decimal u32.
    for line in native_lines.iter().chain(soft_lines.iter()) {
        line.parse::<u32>().unwrap();
    }

    // First battery case is 0.0 + 0.0 = 0.0 in both streams.
    assert_eq!(native_lines[0], "0");
    assert_eq!(soft_lines[0], "0");
}

#[test]
fn generate_is_reproducible_across_invocations() {
    let corpus = Corpus::random(20, 99);
    let backend = ReferenceSoftFloat;

    let mut native_a = Vec::new();
    let mut soft_a = Vec::new();
    generate(&backend, &corpus, &mut native_a, &mut soft_a).unwrap();

    let mut native_b = Vec::new();
    let mut soft_b = Vec::new();
    generate(&backend, &corpus, &mut native_b, &mut soft_b).unwrap();

    assert_eq!(native_a, native_b);
    assert_eq!(soft_a, soft_b);
}
