use chrono::{DateTime, Utc};
use clap::Parser;
use satgus_lib::{
    classify::GeoClassifier,
    config::Config,
    elements::OrbitalElements,
    observation::ObservationAssembler,
    output::{save_observation, Summary},
    propagator::Sgp4Propagator,
    tle_source::{load_or_fetch, refresh, CelestrakFetcher},
};
use satgus_types::observer::Observer;
use std::{path::PathBuf, sync::Arc};
use tracing::info;

/// Compute, label and save the current position of a satellite
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Configuration toml file.
    ///
    /// The built-in defaults (SATGUS, trmnl_data/ paths) are used when not provided.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Observation instant (RFC 3339), defaults to now
    #[arg(long)]
    at: Option<DateTime<Utc>>,

    /// Observer latitude [deg], adds the slant distance to the observation
    #[arg(long, requires = "observer_lon", allow_hyphen_values = true)]
    observer_lat: Option<f64>,

    /// Observer longitude [deg]
    #[arg(long, requires = "observer_lat", allow_hyphen_values = true)]
    observer_lon: Option<f64>,

    /// Fetch a fresh element set even if one is cached
    #[arg(long)]
    refresh_tle: bool,

    /// Position output JSON file, overrides the configured path
    #[arg(short = 'o', long, conflicts_with = "no_save")]
    output: Option<PathBuf>,

    /// Don't write the position file
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let cfg = match opts.config.as_ref() {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            Config::load(path)?
        }
        None => Config::default(),
    };

    let cache = cfg.tle.cache();
    let fetcher = CelestrakFetcher::new(cfg.tle.url.clone(), cfg.tle.timeout)?;
    let tle = if opts.refresh_tle {
        refresh(&cache, &fetcher)?
    } else {
        load_or_fetch(&cache, &fetcher)?
    };

    let elements = Arc::new(OrbitalElements::from_tle(&tle)?);
    let propagator = Sgp4Propagator::new(elements.clone())?;
    let classifier = GeoClassifier::from_files(cfg.regions.files());

    let observer = match (opts.observer_lat, opts.observer_lon) {
        (Some(lat), Some(lon)) => Some(Observer::new(lat, lon)?),
        _ => cfg.observer,
    };

    let observation =
        ObservationAssembler::new(&propagator, &classifier).assemble(opts.at, observer.as_ref())?;

    let saved_to = if opts.no_save {
        None
    } else {
        let path = opts.output.unwrap_or(cfg.output.position_file);
        save_observation(&path, &observation)?;
        Some(path)
    };

    let name = cfg.name.as_deref().unwrap_or(elements.name());
    println!("{}", Summary::new(name, &observation));
    if let Some(path) = saved_to {
        println!("Saved to {}", path.display());
    }

    Ok(())
}
