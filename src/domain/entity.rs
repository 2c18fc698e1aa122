//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Current time as Unix epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Lenient epoch-ms field: integers, numeric strings and RFC 3339 dates
/// are accepted; anything else reads as 0 (unknown)
pub(crate) fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => ms,
        RawTimestamp::Float(ms) => ms as i64,
        RawTimestamp::Text(text) => parse_timestamp(&text),
        RawTimestamp::Other(_) => 0,
    })
}

fn parse_timestamp(text: &str) -> i64 {
    let text = text.trim();
    if let Ok(ms) = text.parse::<i64>() {
        return ms;
    }
    chrono::DateTime::parse_from_rfc3339(text)
        .map(|date| date.timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "deserialize_timestamp")]
        at: i64,
    }

    fn read(json: &str) -> i64 {
        serde_json::from_str::<Stamped>(json).unwrap().at
    }

    #[test]
    fn test_timestamp_forms() {
        assert_eq!(read(r#"{"at": 1704067200000}"#), 1_704_067_200_000);
        assert_eq!(read(r#"{"at": 1704067200000.0}"#), 1_704_067_200_000);
        assert_eq!(read(r#"{"at": "1704067200000"}"#), 1_704_067_200_000);
        assert_eq!(read(r#"{"at": "2024-01-01T00:00:00.000Z"}"#), 1_704_067_200_000);
        assert_eq!(read(r#"{"at": "2024-01-01T08:00:00+08:00"}"#), 1_704_067_200_000);
    }

    #[test]
    fn test_unreadable_timestamps_are_unknown() {
        assert_eq!(read(r#"{"at": "yesterday"}"#), 0);
        assert_eq!(read(r#"{"at": null}"#), 0);
        assert_eq!(read(r#"{"at": {"seconds": 5}}"#), 0);
        assert_eq!(read(r#"{}"#), 0);
    }
}
