use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    #[display(fmt = "country")]
    Country,
    #[display(fmt = "continent")]
    Continent,
    #[display(fmt = "ocean")]
    Ocean,
    #[display(fmt = "unknown")]
    Unknown,
}

/// Geographic label for a subpoint
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "location_type")]
    pub kind: LocationType,
    #[serde(rename = "location_name")]
    pub name: Option<String>,
}

impl Location {
    pub fn new(kind: LocationType, name: Option<String>) -> Self {
        Self { kind, name }
    }

    pub fn unknown() -> Self {
        Self::new(LocationType::Unknown, None)
    }
}
