//! pi-coprime - estimate pi from random co-prime pairs
//!
//! The probability that two random positive integers are co-prime is
//! 6 / pi^2. This binary draws `<pairs>` random pairs in `[1, <max_number>]`,
//! counts the co-prime ones and reports the resulting approximation of pi.
//!
//! Logging goes to standard error and is controlled by `RUST_LOG`;
//! `--debug` traces every generated pair.

use pi_coprime::cli::{self, Invocation};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pi_coprime=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    // Not locked: rayon workers write trace events to stderr during sampling
    let mut out = io::stdout();
    let mut err = io::stderr();

    let code = match cli::parse_args(std::env::args_os(), &mut out, &mut err) {
        Invocation::Run(cli) => {
            init_tracing(cli.debug);
            cli::execute(&cli, &mut out, &mut err)
        }
        Invocation::Exit(code) => code,
    };

    ExitCode::from(code as u8)
}
