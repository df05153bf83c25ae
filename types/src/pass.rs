use crate::time::UtcTimestamp;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PassEventKind {
    /// Elevation crosses the threshold going up
    Rise,
    /// Maximum elevation between a rise and the following set
    Culminate,
    /// Elevation crosses the threshold going down
    Set,
}

/// Events order by timestamp first
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{{} at {}, elevation: {}}}",
    "kind",
    "timestamp",
    "elevation"
)]
pub struct PassEvent {
    pub timestamp: UtcTimestamp,
    pub kind: PassEventKind,
    /// Elevation seen from the observer [deg]
    pub elevation: f64,
}
