// src/cli.rs
//! Command line front end
//!
//! ```text
//! pi-coprime <pairs> [<max_number>] [--debug] [--seed <u64>] [--parallel] [--threads <n>]
//! ```
//!
//! Numbers are taken as raw strings and parsed here, so a malformed value
//! is reported as a parse error instead of silently becoming 0.

use crate::error::{validation::*, PiError, PiResult};
use crate::mc::mc_engine::{estimate_pi_by_coprimes, EstimatorConfig, DEFAULT_MAX_NUMBER};
use crate::report::write_report;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Approximate the value of pi from the probability that two random
/// integers are co-prime (6 / pi^2).
#[derive(Parser, Debug)]
#[command(name = "pi-coprime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generate this number of random pairs to approximate pi. Must be greater than 10.
    #[arg(allow_negative_numbers = true)]
    pub pairs: String,

    /// Maximum number for the random numbers. Must be greater than 10.
    /// Defaults to the largest signed 64-bit integer.
    #[arg(allow_negative_numbers = true)]
    pub max_number: Option<String>,

    /// Trace every generated pair
    #[arg(short, long)]
    pub debug: bool,

    /// Seed the generator for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Sample on a rayon thread pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads, implies --parallel (defaults to the number of logical CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl Cli {
    /// Parse and validate the numeric arguments into a run configuration
    pub fn to_config(&self) -> PiResult<EstimatorConfig> {
        let pairs = parse_integer("pairs", &self.pairs)?;
        validate_greater_than("pairs", pairs, MIN_EXCLUSIVE)?;

        let max_number = match &self.max_number {
            Some(raw) => {
                let value = parse_integer("max_number", raw)?;
                validate_greater_than("max_number", value, MIN_EXCLUSIVE)?;
                value as u64
            }
            None => DEFAULT_MAX_NUMBER,
        };

        let parallel = self.parallel || self.threads.is_some();
        let threads = parallel.then(|| self.threads.unwrap_or_else(num_cpus::get));

        Ok(EstimatorConfig {
            pairs: pairs as u64,
            max_number,
            seed: self.seed,
            parallel,
            threads,
        })
    }
}

/// Result of reading the command line
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    Exit(i32),
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pi-coprime".to_string())
}

/// Parse `args`, writing help, usage or argument errors to `out`/`err`
///
/// A missing `<pairs>`, the only required argument, prints the short usage
/// line on `out` and fails.
pub fn parse_args<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match Cli::try_parse_from(&args) {
        Ok(cli) => Invocation::Run(cli),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = write!(out, "{}", e.render());
                Invocation::Exit(EXIT_SUCCESS)
            }
            ErrorKind::MissingRequiredArgument => {
                let usage = PiError::Usage {
                    program: program_name(&args),
                };
                let _ = writeln!(out, "{}", usage);
                Invocation::Exit(EXIT_FAILURE)
            }
            _ => {
                let _ = write!(err, "{}", e.render());
                Invocation::Exit(EXIT_FAILURE)
            }
        },
    }
}

/// Run one estimation and print its report; returns the process exit code
pub fn execute<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) -> i32 {
    let result = cli
        .to_config()
        .and_then(|config| estimate_pi_by_coprimes(&config))
        .and_then(|estimate| write_report(out, &estimate).map_err(PiError::from));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(error = %e, "estimation failed");
            let _ = writeln!(err, "{}", e);
            EXIT_FAILURE
        }
    }
}

/// Parse `args` and execute; the whole command line round trip
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    match parse_args(args, out, err) {
        Invocation::Run(cli) => execute(&cli, out, err),
        Invocation::Exit(code) => code,
    }
}
