#![warn(non_snake_case)]
//! # random_walker Entry Point
//!
//! Carves a single map with the random-walk tunnel carver and prints it, either as
//! text (`#` for walls, `.` for open cells) or as JSON including the marker layout.
//!
//! ```text
//! random_walker [CONFIG] [--seed N] [--json] [--help]
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see the walk summary
//! or `RUST_LOG=trace` for every tunnel.

use std::env;
use std::error::Error;

use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use random_walker::{Carving, GeneratorConfig, GridCarver, MarkerField};

const USAGE: &str = "usage: random_walker [CONFIG] [--seed N] [--json] [--help]";

/// Command-line options, parsed by hand.
#[derive(Debug, Default)]
struct Options {
    config_path: Option<String>,
    seed: Option<u64>,
    json: bool,
    help: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|e| format!("invalid seed {:?}: {}", value, e))?;
                options.seed = Some(seed);
            }
            "-h" | "--help" => options.help = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option {}\n{}", other, USAGE));
            }
            path => {
                if options.config_path.replace(path.to_string()).is_some() {
                    return Err(format!("only one config file may be given\n{}", USAGE));
                }
            }
        }
    }
    Ok(options)
}

#[derive(Serialize)]
struct Output<'a> {
    seed: u64,
    carving: &'a Carving,
    markers: &'a MarkerField,
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let config = match &options.config_path {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let seed = options
        .seed
        .or(config.seed)
        .unwrap_or_else(|| rand::rng().random());
    info!("Using seed {}", seed);

    let carver = GridCarver::new(config.carve_params())?;
    let carving = carver.run(&mut StdRng::seed_from_u64(seed))?;
    let markers = MarkerField::from_grid(&carving.grid, config.distance_range)?;
    info!(
        "Carved {} tunnels, {} open cells",
        carving.tunnels.len(),
        markers.len()
    );

    if options.json {
        let output = Output {
            seed,
            carving: &carving,
            markers: &markers,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", carving.grid);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("random_walker starting...");

    let options = parse_args(env::args().skip(1)).map_err(|msg| {
        error!("{}", msg);
        msg
    })?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }
    run(options)?;

    info!("random_walker exiting.");
    Ok(())
}
