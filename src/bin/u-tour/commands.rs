//! Subcommand definitions and handlers.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{info, warn};

use u_tour::distance::DistanceMatrix;
use u_tour::io::{load_distance_matrix, load_locations, save_distance_matrix, ResultReporter};
use u_tour::models::RouteResult;
use u_tour::solver::{Improvement, RouteOptimizer, SolverConfig};

const CITIES_ARG_NAME: &str = "cities";
const MATRIX_ARG_NAME: &str = "matrix";
const OUT_ARG_NAME: &str = "out";
const START_ARG_NAME: &str = "start";
const TWO_OPT_ARG_NAME: &str = "two-opt";
const SCALE_ARG_NAME: &str = "scale";
const CONFIG_ARG_NAME: &str = "config";

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

pub fn get_app() -> Command {
    Command::new("u-tour")
        .about("Single-vehicle tour optimizer")
        .subcommand_required(true)
        .subcommand(get_matrix_app())
        .subcommand(get_solve_app())
}

pub fn get_matrix_app() -> Command {
    Command::new("matrix")
        .about("Builds a great-circle distance matrix (miles) from a city,lat,lon table")
        .arg(path_arg(CITIES_ARG_NAME, "Cities CSV file"))
        .arg(path_arg(OUT_ARG_NAME, "Distance matrix CSV to write"))
}

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves a tour over a distance matrix and saves it as JSON")
        .arg(path_arg(MATRIX_ARG_NAME, "Distance matrix CSV file"))
        .arg(path_arg(OUT_ARG_NAME, "Result JSON to write"))
        .arg(
            Arg::new(START_ARG_NAME)
                .long(START_ARG_NAME)
                .help("Label of the start location (default: first row)"),
        )
        .arg(
            Arg::new(TWO_OPT_ARG_NAME)
                .long(TWO_OPT_ARG_NAME)
                .action(ArgAction::SetTrue)
                .help("Refine the constructed tour with 2-opt"),
        )
        .arg(
            Arg::new(SCALE_ARG_NAME)
                .long(SCALE_ARG_NAME)
                .value_parser(value_parser!(u32))
                .help("Fixed-point scale factor for distances"),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .long(CONFIG_ARG_NAME)
                .value_parser(value_parser!(PathBuf))
                .help("Solver config JSON file"),
        )
}

/// Builds the great-circle matrix for a cities table and saves it.
pub fn run_matrix(args: &ArgMatches) -> CliResult<()> {
    let locations = load_locations(required_path(args, CITIES_ARG_NAME))?;
    let matrix = DistanceMatrix::from_locations(&locations)?;
    save_distance_matrix(&matrix, required_path(args, OUT_ARG_NAME))?;
    Ok(())
}

/// Solves the tour and saves it. Returns `Ok(None)` and writes nothing when
/// no tour exists.
pub fn run_solve(args: &ArgMatches) -> CliResult<Option<RouteResult>> {
    let config = solver_config(args)?;
    let matrix = load_distance_matrix(required_path(args, MATRIX_ARG_NAME))?;
    let start = start_index(args, &matrix)?;
    info!(start = matrix.label(start), locations = matrix.size(), ?config, "solving tour");

    let result = RouteOptimizer::new(config).solve(&matrix, start)?;
    match &result {
        Some(result) => ResultReporter::default().save(result, required_path(args, OUT_ARG_NAME))?,
        None => warn!("tour result not saved because no solution was found"),
    }
    Ok(result)
}

/// Config file values, overridden by `--scale` and `--two-opt`.
fn solver_config(args: &ArgMatches) -> CliResult<SolverConfig> {
    let mut config = match args.get_one::<PathBuf>(CONFIG_ARG_NAME) {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if let Some(&scale) = args.get_one::<u32>(SCALE_ARG_NAME) {
        config = config.with_scale(scale);
    }
    if args.get_flag(TWO_OPT_ARG_NAME) {
        config = config.with_improvement(Improvement::TwoOpt);
    }
    config.validate()?;
    Ok(config)
}

/// Index of `--start`, or the first row when absent.
fn start_index(args: &ArgMatches, matrix: &DistanceMatrix) -> CliResult<usize> {
    match args.get_one::<String>(START_ARG_NAME) {
        Some(label) => Ok(matrix
            .index_of(label)
            .ok_or_else(|| format!("unknown start location '{label}'"))?),
        None => Ok(0),
    }
}

fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help(help)
}

fn required_path<'a>(args: &'a ArgMatches, name: &str) -> &'a PathBuf {
    args.get_one::<PathBuf>(name).expect("required by clap")
}
