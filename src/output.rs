// src/output.rs
use std::fs::File;
use std::io::{self, Write};

/// One benchmark measurement
#[derive(Debug, Clone)]
pub struct BenchmarkRow {
    pub name: String,
    pub pairs: u64,
    pub threads: usize,
    pub time_ms: f64,
    pub pairs_per_sec: f64,
    pub pi_estimate: f64,
    pub percentage_difference: f64,
}

pub fn write_benchmark_csv<W: Write>(out: &mut W, rows: &[BenchmarkRow]) -> io::Result<()> {
    writeln!(
        out,
        "name,pairs,threads,time_ms,pairs_per_sec,pi_estimate,percentage_difference"
    )?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{:.3},{:.0},{:.9},{:.6}",
            row.name,
            row.pairs,
            row.threads,
            row.time_ms,
            row.pairs_per_sec,
            row.pi_estimate,
            row.percentage_difference
        )?;
    }
    Ok(())
}

pub fn write_benchmark_csv_file(filename: &str, rows: &[BenchmarkRow]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    write_benchmark_csv(&mut file, rows)
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
