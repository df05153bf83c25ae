use crate::{
    classify::GeoJsonFiles,
    passes::PassSearch,
    tle_source::{TleCache, DEFAULT_TIMEOUT, DEFAULT_TLE_URL},
    units::{Angle, Time},
};
use satgus_types::observer::Observer;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

pub const DEFAULT_DATA_DIR: &str = "trmnl_data";

/// Finest pass-search precision accepted from a config file
pub const MIN_PASS_PRECISION: Duration = Duration::from_millis(1);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'. {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config. {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration. {0}")]
    Invalid(String),
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub name: Option<String>,
    pub tle: Tle,
    pub regions: Regions,
    pub output: Output,
    pub observer: Option<Observer>,
    pub passes: Passes,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(s)?;

        if let Some(obs) = cfg.observer.as_ref() {
            obs.validate()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        if cfg.tle.timeout.is_zero() {
            return Err(ConfigError::Invalid("tle timeout must be non-zero".to_owned()));
        }
        if cfg.passes.window.is_zero() {
            return Err(ConfigError::Invalid("passes window must be non-zero".to_owned()));
        }
        if cfg.passes.precision < MIN_PASS_PRECISION || cfg.passes.precision >= cfg.passes.step {
            return Err(ConfigError::Invalid(format!(
                "passes precision ({}) must be at least 1ms and less than the step ({})",
                humantime::format_duration(cfg.passes.precision),
                humantime::format_duration(cfg.passes.step),
            )));
        }
        if !(-90.0..=90.0).contains(&cfg.passes.min_elevation) {
            return Err(ConfigError::Invalid(format!(
                "passes min-elevation {} is outside [-90, 90]",
                cfg.passes.min_elevation
            )));
        }

        Ok(cfg)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Tle {
    pub url: Url,
    pub cache_file: PathBuf,
    #[serde(deserialize_with = "duration::deserialize")]
    pub timeout: Duration,
}

impl Default for Tle {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_TLE_URL).expect("Invalid default element set URL"),
            cache_file: Path::new(DEFAULT_DATA_DIR).join("satgus_tle.json"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Tle {
    pub fn cache(&self) -> TleCache {
        TleCache::new(&self.cache_file)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Regions {
    pub countries: PathBuf,
    pub land: PathBuf,
    pub marine: PathBuf,
    /// Consulted after `marine` when set
    pub ocean: Option<PathBuf>,
}

impl Default for Regions {
    fn default() -> Self {
        let dir = Path::new(DEFAULT_DATA_DIR);
        Self {
            countries: dir.join("ne_110m_admin_0_countries.geojson"),
            land: dir.join("ne_110m_land.geojson"),
            marine: dir.join("ne_110m_geography_marine_polys.geojson"),
            ocean: None,
        }
    }
}

impl Regions {
    pub fn files(&self) -> GeoJsonFiles {
        GeoJsonFiles {
            countries: self.countries.clone(),
            land: self.land.clone(),
            marine: self.marine.clone(),
            ocean: self.ocean.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Output {
    pub position_file: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            position_file: Path::new(DEFAULT_DATA_DIR).join("satgus_position.json"),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Passes {
    #[serde(deserialize_with = "duration::deserialize")]
    pub window: Duration,
    /// [deg]
    pub min_elevation: f64,
    #[serde(deserialize_with = "duration::deserialize")]
    pub step: Duration,
    #[serde(deserialize_with = "duration::deserialize")]
    pub precision: Duration,
}

impl Default for Passes {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(24 * 60 * 60),
            min_elevation: 0.0,
            step: Duration::from_secs(30),
            precision: Duration::from_millis(100),
        }
    }
}

impl Passes {
    pub fn search(&self) -> PassSearch {
        PassSearch {
            step: Time::from_std_duration(self.step),
            precision: Time::from_std_duration(self.precision),
            min_elevation: Angle::from_degrees(self.min_elevation),
        }
    }
}

/// Durations are written in humantime notation, e.g. `"10s"` or `"1h 30m"`
mod duration {
    use serde::{de, Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(de::Error::custom)
    }
}
