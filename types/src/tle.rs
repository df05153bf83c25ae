use crate::time::{iso8601, UtcTimestamp};
use serde::{Deserialize, Serialize};

/// Unstructured TLE
/// https://en.wikipedia.org/wiki/Two-line_element_set
///
/// Serializes to the element-set cache file layout: `{name, line1, line2, fetched_at?}`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct UnstructuredTle {
    #[serde(rename = "name")]
    pub satellite_name: String,
    pub line1: String,
    pub line2: String,

    /// When the set was retrieved from upstream, if known
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso8601::option"
    )]
    pub fetched_at: Option<UtcTimestamp>,
}

impl UnstructuredTle {
    pub fn new(
        satellite_name: impl Into<String>,
        line1: impl Into<String>,
        line2: impl Into<String>,
    ) -> Self {
        Self {
            satellite_name: satellite_name.into(),
            line1: line1.into(),
            line2: line2.into(),
            fetched_at: None,
        }
    }

    pub fn with_fetched_at(mut self, fetched_at: UtcTimestamp) -> Self {
        self.fetched_at = Some(fetched_at);
        self
    }
}
