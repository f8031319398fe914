// scripts/benchmark.rs
use pi_coprime::math_utils::Timer;
use pi_coprime::mc::estimator::Estimate;
use pi_coprime::mc::mc_engine::DEFAULT_MAX_NUMBER;
use pi_coprime::mc::sampler::{count_coprime_pairs, count_coprime_pairs_parallel};
use pi_coprime::output::{write_benchmark_csv_file, write_summary_to_csv, BenchmarkRow};
use pi_coprime::rng::{RngFactory, UniformPairGenerator};
use pi_coprime::PiResult;
use std::env;
use std::process::ExitCode;

const BENCH_SEED: u64 = 314_159;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    arch: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

fn row(name: &str, pairs: u64, threads: usize, timer: &Timer, coprime: u64) -> PiResult<BenchmarkRow> {
    let time_ms = timer.elapsed_ms();
    let pairs_per_sec = timer.throughput(pairs);
    let estimate = Estimate::from_counts(pairs, DEFAULT_MAX_NUMBER, coprime)?;

    Ok(BenchmarkRow {
        name: name.to_string(),
        pairs,
        threads,
        time_ms,
        pairs_per_sec,
        pi_estimate: estimate.pi_estimate,
        percentage_difference: estimate.percentage_difference,
    })
}

fn run_benchmarks(threads: usize) -> PiResult<Vec<BenchmarkRow>> {
    let mut results = Vec::new();

    for &pairs in &[100_000u64, 1_000_000, 10_000_000] {
        println!("  {} pairs...", pairs);

        let mut generator = UniformPairGenerator::seeded(BENCH_SEED, DEFAULT_MAX_NUMBER)?;
        let timer = Timer::new();
        let coprime = count_coprime_pairs(&mut generator, pairs);
        results.push(row("sequential", pairs, 1, &timer, coprime)?);

        let factory = RngFactory::new(BENCH_SEED);
        let timer = Timer::new();
        let coprime = count_coprime_pairs_parallel(&factory, pairs, DEFAULT_MAX_NUMBER)?;
        results.push(row("parallel", pairs, threads, &timer, coprime)?);
    }

    Ok(results)
}

fn main() -> ExitCode {
    println!("pi-coprime Benchmark Suite");
    println!("==========================\n");

    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {} ({})", system_info.os, system_info.arch);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    println!("Running sampling benchmarks...");
    let results = match run_benchmarks(system_info.rayon_threads) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Benchmark failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<12} {:>10} {:>8} {:>12} {:>15} {:>10} {:>10}",
        "Benchmark", "Pairs", "Threads", "Time (ms)", "Pairs/sec", "Pi", "Diff"
    );
    println!("{:-<80}", "");

    for result in &results {
        println!(
            "{:<12} {:>10} {:>8} {:>12.2} {:>15.0} {:>10.6} {:>9.4}%",
            result.name,
            result.pairs,
            result.threads,
            result.time_ms,
            result.pairs_per_sec,
            result.pi_estimate,
            result.percentage_difference
        );
    }

    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    let summary_filename = format!("benchmark_system_{}.csv", timestamp);

    let cores = system_info.cpu_cores.to_string();
    let rayon_threads = system_info.rayon_threads.to_string();
    let summary = [
        ("os", system_info.os.as_str()),
        ("arch", system_info.arch.as_str()),
        ("cpu_cores", cores.as_str()),
        ("rustflags", system_info.rustc_flags.as_str()),
        ("rayon_threads", rayon_threads.as_str()),
    ];

    if let Err(e) = write_benchmark_csv_file(&filename, &results)
        .and_then(|_| write_summary_to_csv(&summary_filename, &summary))
    {
        eprintln!("Failed to write results: {}", e);
        return ExitCode::FAILURE;
    }

    println!("\nBenchmark complete!");
    println!("Results saved to: {} and {}", filename, summary_filename);
    println!("\nTo reproduce: cargo run --bin benchmark --release");

    ExitCode::SUCCESS
}
