//! Fetching element sets from CelesTrak and caching them on disk

use crate::Error;
use chrono::Utc;
use satgus_protocol::{parse_tle_response, TleError};
use satgus_types::prelude::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};
use url::Url;

/// SATGUS (NORAD 62713) from the CelesTrak GP endpoint
pub const DEFAULT_TLE_URL: &str = "https://celestrak.org/NORAD/elements/gp.php?CATNR=62713&FORMAT=TLE";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build the HTTP client. {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request to '{url}' failed. {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from '{url}'")]
    Status { url: Url, status: u16 },
    #[error("Malformed element set from '{url}'. {source}")]
    Format {
        url: Url,
        #[source]
        source: TleError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Failed to access the element set cache '{}'. {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to decode the element set cache '{}'. {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait TleFetcher {
    fn fetch(&self) -> Result<UnstructuredTle, FetchError>;
}

/// Blocking HTTP fetcher
pub struct CelestrakFetcher {
    url: Url,
    client: reqwest::blocking::Client,
}

impl CelestrakFetcher {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl TleFetcher for CelestrakFetcher {
    fn fetch(&self) -> Result<UnstructuredTle, FetchError> {
        info!(url = %self.url, "Fetching element set");
        let transport = |source| FetchError::Transport {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }
        let body = response.text().map_err(transport)?;

        let tle = parse_tle_response(&body).map_err(|source| FetchError::Format {
            url: self.url.clone(),
            source,
        })?;
        debug!(name = %tle.satellite_name, "Fetched element set");
        Ok(tle.with_fetched_at(Utc::now()))
    }
}

/// JSON element set cache file
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TleCache {
    path: PathBuf,
}

impl TleCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file doesn't exist
    pub fn load(&self) -> Result<Option<UnstructuredTle>, CacheError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        let tle = serde_json::from_str(&content).map_err(|source| CacheError::Json {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(tle))
    }

    pub fn store(&self, tle: &UnstructuredTle) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let content = serde_json::to_string_pretty(tle).map_err(|source| CacheError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Cached element set, fetching and storing one if the cache file is missing
pub fn load_or_fetch<F: TleFetcher + ?Sized>(
    cache: &TleCache,
    fetcher: &F,
) -> Result<UnstructuredTle, Error> {
    match cache.load()? {
        Some(tle) => {
            debug!(path = %cache.path().display(), name = %tle.satellite_name, "Element set cache hit");
            Ok(tle)
        }
        None => {
            warn!(path = %cache.path().display(), "Element set cache miss");
            refresh(cache, fetcher)
        }
    }
}

/// Fetches and stores a fresh element set
pub fn refresh<F: TleFetcher + ?Sized>(
    cache: &TleCache,
    fetcher: &F,
) -> Result<UnstructuredTle, Error> {
    let tle = fetcher.fetch()?;
    cache.store(&tle)?;
    info!(path = %cache.path().display(), name = %tle.satellite_name, "Stored element set");
    Ok(tle)
}
