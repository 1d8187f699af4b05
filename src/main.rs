//! signalmap
//!
//! Reads a JSON array of location rows from a file (or stdin when no path is
//! given), clusters them and prints the report as JSON on stdout.

use std::env;
use std::fs;
use std::io::{self, Read};

use dotenvy::dotenv;
use signalmap::config::Config;
use signalmap::core::pipeline::ClusterPipeline;
use signalmap::logging;
use signalmap::models::RawLocationRow;
use tracing::info;

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env()?;
    logging::init_logging(&config);

    let path = env::args().nth(1);
    info!(
        environment = %config.environment,
        threshold_km = config.threshold_km,
        input = path.as_deref().unwrap_or("<stdin>"),
        "Starting signalmap"
    );

    let input = read_input(path.as_deref())
        .map_err(|e| format!("Failed to read input: {}", e))?;
    let rows: Vec<RawLocationRow> = serde_json::from_str(&input)
        .map_err(|e| format!("Failed to parse input rows: {}", e))?;

    let pipeline = ClusterPipeline::new(config);
    let report = pipeline.run(&rows);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
