//! Wire-protocol DTOs for the check backend.
//!
//! DESIGN
//! ======
//! These mirror the backend JSON so serde stays schema-driven. `Status`
//! keeps unrecognized values verbatim: filtering compares raw strings, and
//! the badge label falls back to "unknown" for anything outside the known set.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome classification of a check.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Error,
    Pending,
    /// `"unknown"` or any other raw value the backend sends.
    Other(String),
}

impl Default for Status {
    fn default() -> Self {
        Self::Other("unknown".to_owned())
    }
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Pending => "pending",
            Self::Other(raw) => raw,
        }
    }

    /// Display label for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Успешно",
            Self::Error => "Ошибка",
            Self::Pending => "В процессе",
            Self::Other(_) => "Неизвестно",
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            "pending" => Self::Pending,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `null` reads like a missing status.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or_else(Self::default, |raw| Self::from(raw.as_str())))
    }
}

/// One past check as listed by `GET /history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub target: String,
    /// Already formatted for display by the backend.
    pub date: String,
    #[serde(default)]
    pub status: Status,
}

/// Body of `GET /history`. A missing or `null` list means no records.
///
/// Entries stay raw so one malformed record cannot fail the whole list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HistoryEnvelope {
    #[serde(default)]
    pub history: Option<Vec<serde_json::Value>>,
}

/// Full check result from `GET /check/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckDetails {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub target: String,
    #[serde(default)]
    pub checks: Vec<String>,
    /// Lifecycle state (`queued`, `in_progress`, `completed`).
    #[serde(default)]
    pub status: String,
    /// Per-check-type results, shape owned by the backend.
    #[serde(default)]
    pub results: serde_json::Value,
}

/// Body of `POST /check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSubmission {
    pub target: String,
    pub checks: Vec<String>,
}

/// Response to `POST /check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAccepted {
    #[serde(rename = "checkId")]
    pub check_id: String,
    pub status: String,
    pub target: String,
    #[serde(default)]
    pub checks: Vec<String>,
}

/// Accept string or integer ids and normalize to a string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
