// cargo run --bin passes -- --config configs/iss_over_nyc.toml --window 12h --min-elevation 10

use chrono::{DateTime, Utc};
use clap::Parser;
use satgus_lib::{
    classify::GeoClassifier,
    config::Config,
    elements::OrbitalElements,
    observation::ObservationAssembler,
    passes::PassPredictor,
    propagator::Sgp4Propagator,
    tle_source::{load_or_fetch, CelestrakFetcher},
    units::Angle,
};
use satgus_types::{observer::Observer, pass::PassEventKind};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing::info;

/// Print the upcoming passes of the satellite over an observer
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Configuration toml file.
    ///
    /// The built-in defaults are used when not provided.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window start (RFC 3339), defaults to now
    #[arg(long)]
    start: Option<DateTime<Utc>>,

    /// Window length, e.g. '6h', overrides the configured window
    #[arg(short = 'w', long, value_parser = humantime::parse_duration)]
    window: Option<Duration>,

    /// Minimum elevation [deg], overrides the configured threshold
    #[arg(short = 'e', long, allow_hyphen_values = true)]
    min_elevation: Option<f64>,

    /// Observer latitude [deg]
    #[arg(long, requires = "observer_lon", allow_hyphen_values = true)]
    observer_lat: Option<f64>,

    /// Observer longitude [deg]
    #[arg(long, requires = "observer_lat", allow_hyphen_values = true)]
    observer_lon: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let cfg = match opts.config.as_ref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let observer = match (opts.observer_lat, opts.observer_lon) {
        (Some(lat), Some(lon)) => Observer::new(lat, lon)?,
        _ => cfg
            .observer
            .ok_or("No observer configured, pass --observer-lat and --observer-lon")?,
    };

    let fetcher = CelestrakFetcher::new(cfg.tle.url.clone(), cfg.tle.timeout)?;
    let tle = load_or_fetch(&cfg.tle.cache(), &fetcher)?;
    let elements = Arc::new(OrbitalElements::from_tle(&tle)?);
    let propagator = Sgp4Propagator::new(elements.clone())?;
    let classifier = GeoClassifier::from_files(cfg.regions.files());

    let mut search = cfg.passes.search();
    if let Some(min_elevation) = opts.min_elevation {
        search = search.with_min_elevation(Angle::from_degrees(min_elevation));
    }
    let window = chrono::Duration::from_std(opts.window.unwrap_or(cfg.passes.window))?;
    let start = opts.start.unwrap_or_else(Utc::now);
    let end = start + window;

    info!(satellite = elements.name(), %observer, %start, %end, "Searching for passes");
    let predictor = PassPredictor::new(&propagator, &observer, search)?;
    let events = predictor.events(start, end)?;
    if events.is_empty() {
        println!("No passes of {} over {observer} before {end}", elements.name());
        return Ok(());
    }

    let assembler = ObservationAssembler::new(&propagator, &classifier);
    for event in events {
        let obs = assembler.assemble(Some(event.timestamp), Some(&observer))?;
        println!(
            "{:<9} {}  el {:5.1}°  lat {:8.4}°  lon {:9.4}°  alt {:6.1} km  range {:7.1} km  over {} {}",
            event.kind.to_string(),
            event.timestamp.format("%Y-%m-%d %H:%M:%S"),
            event.elevation,
            obs.latitude,
            obs.longitude,
            obs.altitude_km,
            obs.distance_km.unwrap_or_default(),
            obs.location.kind,
            obs.location.name.as_deref().unwrap_or("N/A"),
        );
        if event.kind == PassEventKind::Set {
            println!();
        }
    }

    Ok(())
}
