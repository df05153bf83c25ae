use chrono::{DateTime, Utc};

pub type UtcTimestamp = DateTime<Utc>;

/// ISO-8601 with an explicit `+00:00` offset, e.g. `2024-01-01T12:00:00.500+00:00`
pub mod iso8601 {
    use super::UtcTimestamp;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn format(t: &UtcTimestamp) -> String {
        t.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }

    pub fn serialize<S: Serializer>(t: &UtcTimestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<UtcTimestamp, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }

    pub mod option {
        use super::UtcTimestamp;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            t: &Option<UtcTimestamp>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match t {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<UtcTimestamp>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(with = "super")] UtcTimestamp);

            Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(t)| t))
        }
    }
}
