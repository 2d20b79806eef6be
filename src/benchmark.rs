//! Benchmark for decimal parsing implementations
//!
//! Prints one JSON document with throughput per parser and the strict
//! parser's verdict on every correctness case.

use clap::Parser;
use decimal_parse::baselines::*;
use decimal_parse::{parse_exact, Status};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(version, about = "Benchmark strict decimal parsing against baselines")]
struct Cli {
    /// Passes over the generated workload per parser
    #[arg(long, default_value_t = 20)]
    iterations: u32,

    /// Number of generated inputs
    #[arg(long, default_value_t = 100_000)]
    samples: usize,

    /// Seed for the workload generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Serialize)]
struct BenchmarkResult {
    algorithm: String,
    parses_per_second: f64,
    total_parses: u64,
    duration_ms: f64,
}

#[derive(Serialize)]
struct CaseReport {
    input: String,
    expected: Status,
    actual: Status,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    cases: Vec<CaseReport>,
    correctness: bool,
}

const CASES: &[(&str, Status)] = &[
    ("0", Status::Ok),
    ("1", Status::Ok),
    ("123", Status::Ok),
    ("18446744073709551615", Status::Ok),
    ("0777", Status::Ok),
    ("", Status::Invalid),
    ("abc", Status::Invalid),
    ("12a34", Status::Invalid),
    ("-1", Status::Invalid),
    ("+1", Status::Invalid),
    (" 123", Status::Invalid),
    ("123 ", Status::Invalid),
    ("0x123a", Status::Invalid),
    ("18446744073709551616", Status::OutOfRange),
    ("99999999999999999999", Status::OutOfRange),
];

fn generate_test_data(samples: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);

    // Mix of lengths for a realistic workload; short numbers dominate.
    // Shares are percentages; bucket sizes come from running totals so the
    // workload always holds exactly `samples` inputs.
    let buckets: [(usize, std::ops::Range<u64>); 6] = [
        (20, 0..10),
        (20, 10..1000),
        (20, 1000..1_000_000),
        (20, 1_000_000..10_000_000_000),
        (15, 10_000_000_000..1_000_000_000_000_000),
        (5, 1_000_000_000_000_000..u64::MAX),
    ];

    let mut data = Vec::with_capacity(samples);
    let mut percent = 0;
    for (share, range) in buckets {
        percent += share;
        let target = samples * percent / 100;
        while data.len() < target {
            data.push(rng.gen_range(range.clone()).to_string().into_bytes());
        }
    }
    debug!("generated {} inputs (seed {})", data.len(), seed);
    data
}

fn verify_correctness() -> (bool, Vec<CaseReport>) {
    let mut correct = true;
    let mut cases = Vec::with_capacity(CASES.len());

    for &(input, expected) in CASES {
        let mut number = 0u64;
        let actual = parse_exact(input.as_bytes(), &mut number);
        if actual != expected {
            error!("FAIL: parse({input:?}) = {actual:?}, expected {expected:?}");
            correct = false;
        }
        cases.push(CaseReport {
            input: input.to_string(),
            expected,
            actual,
        });
    }
    let accepted = cases.iter().filter(|case| case.actual.is_ok()).count();
    debug!("strict parser accepted {accepted} of {} cases", cases.len());
    (correct, cases)
}

fn benchmark<P: DecimalParse>(
    name: &str,
    parser: &P,
    data: &[Vec<u8>],
    iterations: u32,
) -> BenchmarkResult {
    // Warmup
    for input in data.iter().take(1000) {
        let _ = parser.parse_u64(input);
    }

    let start = Instant::now();
    let mut total_parses = 0u64;

    for _ in 0..iterations {
        for input in data {
            let _ = std::hint::black_box(parser.parse_u64(std::hint::black_box(input)));
            total_parses += 1;
        }
    }

    let duration = start.elapsed();
    let duration_ms = duration.as_secs_f64() * 1000.0;
    let parses_per_second = total_parses as f64 / duration.as_secs_f64();
    info!("{name}: {parses_per_second:.0} parses/s");

    BenchmarkResult {
        algorithm: name.to_string(),
        parses_per_second,
        total_parses,
        duration_ms,
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let (correctness, cases) = verify_correctness();

    let results = if correctness {
        let data = generate_test_data(cli.samples, cli.seed);
        vec![
            benchmark("std", &StdParser, &data, cli.iterations),
            benchmark("strict", &StrictParser, &data, cli.iterations),
        ]
    } else {
        Vec::new()
    };

    let full_results = FullResults {
        results,
        cases,
        correctness,
    };
    println!("{}", serde_json::to_string(&full_results)?);
    Ok(correctness)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_has_requested_size() {
        for samples in [0, 1, 3, 7, 99, 100_000] {
            assert_eq!(generate_test_data(samples, 42).len(), samples);
        }
    }

    #[test]
    fn test_workload_is_seeded() {
        assert_eq!(generate_test_data(50, 7), generate_test_data(50, 7));
    }

    #[test]
    fn test_workload_parses_strictly() {
        for input in generate_test_data(1000, 42) {
            assert!(StrictParser.parse_u64(&input).is_some(), "{input:?}");
        }
    }

    #[test]
    fn test_case_table_passes() {
        let (correct, cases) = verify_correctness();
        assert!(correct);
        assert_eq!(cases.len(), CASES.len());
    }
}
