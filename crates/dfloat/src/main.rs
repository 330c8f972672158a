//! Float determinism verifier CLI.
//!
//! `generate` writes a random input corpus plus the two ground-truth result
//! files; `verify` re-runs the identical sweep on this platform and compares
//! against the persisted truth.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use df_compare::{NanMode, VerifyOptions};
use df_core::{Corpus, ReferenceSoftFloat};

// Filenames shared between generate and verify runs.
const INPUTS_FILENAME: &str = "floatInputs.txt";
const FLOAT_RESULTS_FILENAME: &str = "floatResults.txt";
const DFLOAT_RESULTS_FILENAME: &str = "dfloatResults.txt";

/// Cross-implementation float determinism verifier
#[derive(Parser, Debug)]
#[command(name = "dfloat")]
#[command(version, about = "Compare native and deterministic float arithmetic bit-for-bit", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the input corpus and both ground-truth result files
    Generate {
        /// Number of random input bit patterns
        #[arg(short, long, default_value = "10000")]
        count: usize,

        /// Corpus seed; omit for a random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory to write the corpus and truth files into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Verify this platform's results against previously generated truth
    Verify {
        /// Directory holding the corpus and truth files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Treat any two NaN-decoding patterns as equal
        #[arg(long)]
        relaxed_nan: bool,

        /// Cap on detailed mismatch reports (tallying is never capped)
        #[arg(long, default_value = "25")]
        max_reports: usize,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let outcome = match args.command {
        Command::Generate { count, seed, dir } => generate(count, seed, &dir),
        Command::Verify {
            dir,
            relaxed_nan,
            max_reports,
            json,
        } => verify(&dir, relaxed_nan, max_reports, json),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn generate(count: usize, seed: Option<u64>, dir: &Path) -> anyhow::Result<ExitCode> {
    let seed = seed.unwrap_or_else(rand::random);
    let corpus = Corpus::random(count, seed);

    let inputs_path = dir.join(INPUTS_FILENAME);
    let inputs = File::create(&inputs_path)
        .with_context(|| format!("creating {}", inputs_path.display()))?;
    corpus
        .write_to(BufWriter::new(inputs))
        .with_context(|| format!("writing {}", inputs_path.display()))?;

    let native_path = dir.join(FLOAT_RESULTS_FILENAME);
    let soft_path = dir.join(DFLOAT_RESULTS_FILENAME);
    let native_out = File::create(&native_path)
        .with_context(|| format!("creating {}", native_path.display()))?;
    let soft_out =
        File::create(&soft_path).with_context(|| format!("creating {}", soft_path.display()))?;

    let cases = df_compare::generate(
        &ReferenceSoftFloat,
        &corpus,
        BufWriter::new(native_out),
        BufWriter::new(soft_out),
    )
    .context("writing truth streams")?;

    println!(
        "Generated {} inputs (seed {}) and {} truth cases in {}",
        count,
        seed,
        cases,
        dir.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn verify(dir: &Path, relaxed_nan: bool, max_reports: usize, json: bool) -> anyhow::Result<ExitCode> {
    let corpus = {
        let path = dir.join(INPUTS_FILENAME);
        let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        Corpus::read_from(BufReader::new(file))
            .with_context(|| format!("loading {}", path.display()))?
    };

    // Load both truth streams fully before the comparison loop starts; the
    // sweep itself never touches the filesystem.
    let native_truth = read_fully(&dir.join(FLOAT_RESULTS_FILENAME))?;
    let soft_truth = read_fully(&dir.join(DFLOAT_RESULTS_FILENAME))?;

    let options = VerifyOptions {
        nan_mode: if relaxed_nan {
            NanMode::Relaxed
        } else {
            NanMode::Strict
        },
        max_reports,
        label: format!("verify {}", dir.display()),
        seed: None,
    };

    let report = df_compare::verify(
        &ReferenceSoftFloat,
        &corpus,
        Cursor::new(native_truth),
        Cursor::new(soft_truth),
        &options,
    )
    .context("verification run failed")?;

    if json {
        println!("{}", report.to_json());
    } else {
        report.print_summary();
    }

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn read_fully(path: &Path) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut buf))
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(buf)
}
