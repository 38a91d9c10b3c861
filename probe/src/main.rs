mod report;
mod state;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use spatial::FieldBounds;

use report::Report;
use state::Frame;

#[derive(Parser, Debug)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
/// Prints the spatial values derived from a JSON game state
struct Args {
    /// Game state JSON file; `-` or nothing reads stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Field bounds JSON file; defaults to the standard arena
    #[arg(short, long)]
    bounds: Option<PathBuf>,

    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let bounds = match &args.bounds {
        Some(path) => FieldBounds::from_path(path)
            .with_context(|| format!("Failed to load field bounds from {}", path.display()))?,
        None => FieldBounds::default(),
    };

    let json = read_input(args.input.as_deref())?;
    let frame: Frame = serde_json::from_str(&json).context("Failed to parse game state")?;
    log::debug!("Parsed frame: {:?}", frame);

    let report = Report::from_frame(&frame, &bounds);
    if !report.in_field {
        log::warn!("Car at {} is outside the field", frame.car.position);
    }

    for (label, value) in report.rows() {
        println!("{} {}", format!("{label:<20}").bold().cyan(), value);
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read game state from {}", path.display())),
        _ => {
            log::trace!("Reading game state from stdin");
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read game state from stdin")?;
            Ok(json)
        }
    }
}
