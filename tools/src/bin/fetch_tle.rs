// cargo run --bin fetch-tle -- --config configs/iss_over_nyc.toml

use clap::Parser;
use satgus_lib::{
    config::Config,
    elements::OrbitalElements,
    tle_source::{refresh, CelestrakFetcher},
};
use std::path::PathBuf;

/// Fetch the configured element set and replace the cached copy
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Configuration toml file.
    ///
    /// The built-in defaults are used when not provided.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let cfg = match opts.config.as_ref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let cache = cfg.tle.cache();
    let fetcher = CelestrakFetcher::new(cfg.tle.url.clone(), cfg.tle.timeout)?;
    let tle = refresh(&cache, &fetcher)?;
    let elements = OrbitalElements::from_tle(&tle)?;

    println!("{}", tle.satellite_name);
    println!("{}", tle.line1);
    println!("{}", tle.line2);
    println!(
        "NORAD {} epoch {} ({:.4} rev/day), cached in {}",
        elements.norad_id(),
        elements.epoch(),
        elements.mean_motion(),
        cache.path().display()
    );

    Ok(())
}
