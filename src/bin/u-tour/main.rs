//! Command line interface to the tour optimizer.

mod commands;

use std::process;

use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{get_app, run_matrix, run_solve};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let matches = get_app().get_matches();

    let outcome = match matches.subcommand() {
        Some(("matrix", args)) => run_matrix(args),
        Some(("solve", args)) => run_solve(args).map(|_| ()),
        _ => unreachable!("subcommand is required"),
    };

    if let Err(err) = outcome {
        error!("{err}");
        process::exit(1);
    }
}
