use crate::{
    classify::DatasetError,
    config::ConfigError,
    distance::DistanceError,
    elements::ParseError,
    output::OutputError,
    passes::PassError,
    propagator::PropagationError,
    tle_source::{CacheError, FetchError},
};
use satgus_protocol::TleError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Tle(#[from] TleError),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
    #[error(transparent)]
    Distance(#[from] DistanceError),
    #[error(transparent)]
    Pass(#[from] PassError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
