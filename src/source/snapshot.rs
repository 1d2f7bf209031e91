//! Shared types for status snapshots.
//!
//! These types match the `status.json` document written by the status
//! collector: a top-level `timestamp` plus one record per provider, where each
//! record is either a Statuspage-style summary or an error record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A complete snapshot of provider status at one collection time.
///
/// Providers are keyed by display name. The map is ordered so that providers
/// outside the preferred list render in a stable (alphabetical) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// When the collector wrote this snapshot.
    pub timestamp: DateTime<Utc>,
    /// Per-provider records, keyed by provider name.
    #[serde(default)]
    pub data: BTreeMap<String, ProviderStatus>,
}

/// The record for a single provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderStatus {
    /// The collector failed to fetch this provider.
    Failed {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        timestamp: Option<String>,
    },
    /// A status page summary.
    Report(StatusReport),
}

impl ProviderStatus {
    /// Build a record from raw JSON.
    ///
    /// Any object with a truthy `error` field (not null, false, 0 or an empty
    /// string) is an error record. Everything else is read as a report,
    /// leniently: fields that don't fit the expected shape are dropped rather
    /// than failing the whole snapshot.
    pub fn from_value(value: Value) -> Self {
        if let Some(error) = value.get("error").filter(|e| is_truthy(e)) {
            let error = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let timestamp = value.get("timestamp").and_then(Value::as_str).map(str::to_string);
            return ProviderStatus::Failed { error, timestamp };
        }

        ProviderStatus::Report(StatusReport::from_value(&value))
    }

    /// Returns the error message if this is an error record.
    pub fn error(&self) -> Option<&str> {
        match self {
            ProviderStatus::Failed { error, .. } => Some(error),
            ProviderStatus::Report(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for ProviderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(ProviderStatus::from_value(value))
    }
}

/// A Statuspage-style summary for one provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Overall status. `None` when the record had no usable status block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OverallStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
    #[serde(default)]
    pub scheduled_maintenances: Vec<Incident>,
}

impl StatusReport {
    fn from_value(value: &Value) -> Self {
        Self {
            status: field(value, "status"),
            page: field(value, "page"),
            components: list(value, "components"),
            incidents: list(value, "incidents"),
            scheduled_maintenances: list(value, "scheduled_maintenances"),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    }
}

/// Deserialize an optional object field, dropping it if malformed.
fn field<T: serde::de::DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    value.get(key).and_then(|v| serde_json::from_value(v.clone()).ok())
}

/// Deserialize a list field, skipping malformed entries.
fn list<T: serde::de::DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items.iter().filter_map(|item| serde_json::from_value(item.clone()).ok()).collect()
        })
        .unwrap_or_default()
}

/// Overall status block of a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStatus {
    /// Raw indicator code, e.g. `none`, `minor`, `major_outage`.
    pub indicator: String,
    #[serde(default)]
    pub description: String,
}

/// Status page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A single component on a status page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// Raw component status code, e.g. `operational`, `partial_outage`.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An incident or scheduled maintenance.
///
/// Both share the same shape in the snapshot; maintenances additionally
/// carry a scheduled window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub name: String,
    /// Raw lifecycle status, e.g. `investigating`, `scheduled`.
    #[serde(default)]
    pub status: String,
    /// Short link to the incident page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortlink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_until: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snapshot() {
        let json = r#"{
            "timestamp": "2025-06-01T12:00:00Z",
            "data": {
                "OpenAI": {
                    "page": { "id": "x", "name": "OpenAI", "url": "https://status.openai.com" },
                    "status": { "indicator": "minor", "description": "Partially Degraded Service" },
                    "components": [
                        { "id": "c1", "name": "API", "status": "degraded_performance", "position": 1 }
                    ],
                    "incidents": [
                        { "id": "i1", "name": "Elevated errors", "status": "investigating",
                          "impact": "minor", "shortlink": "https://stspg.io/abc", "incident_updates": [] }
                    ]
                },
                "Google": {
                    "error": "crawler timed out",
                    "status": "failed",
                    "timestamp": "2025-06-01T11:59:58Z"
                }
            }
        }"#;

        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.data.len(), 2);

        let ProviderStatus::Report(openai) = &snapshot.data["OpenAI"] else {
            panic!("expected a report");
        };
        let status = openai.status.as_ref().unwrap();
        assert_eq!(status.indicator, "minor");
        assert_eq!(openai.components.len(), 1);
        assert_eq!(openai.components[0].status, "degraded_performance");
        assert_eq!(openai.incidents[0].shortlink.as_deref(), Some("https://stspg.io/abc"));
        assert!(openai.scheduled_maintenances.is_empty());

        let google = &snapshot.data["Google"];
        assert_eq!(google.error(), Some("crawler timed out"));
    }

    #[test]
    fn test_malformed_status_does_not_fail_snapshot() {
        let json = r#"{
            "timestamp": "2025-06-01T12:00:00Z",
            "data": { "Foo": { "status": "weird", "components": [ { "oops": 1 }, { "name": "Web" } ] } }
        }"#;

        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        let ProviderStatus::Report(foo) = &snapshot.data["Foo"] else {
            panic!("expected a report");
        };
        assert!(foo.status.is_none());
        assert_eq!(foo.components.len(), 1);
        assert_eq!(foo.components[0].name, "Web");
    }

    #[test]
    fn test_missing_timestamp_is_an_error() {
        let result = serde_json::from_str::<StatusSnapshot>(r#"{ "data": {} }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_falsy_error_is_not_a_failure() {
        let json = r#"{
            "timestamp": "2025-06-01T12:00:00Z",
            "data": {
                "Empty": { "error": "", "status": { "indicator": "none", "description": "ok" } },
                "False": { "error": false, "status": { "indicator": "minor", "description": "" } },
                "Null": { "error": null },
                "Real": { "error": "HTTP 503" }
            }
        }"#;

        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.data["Empty"].error().is_none());
        assert!(snapshot.data["False"].error().is_none());
        assert!(snapshot.data["Null"].error().is_none());
        assert_eq!(snapshot.data["Real"].error(), Some("HTTP 503"));

        let ProviderStatus::Report(empty) = &snapshot.data["Empty"] else {
            panic!("expected a report");
        };
        assert_eq!(empty.status.as_ref().unwrap().indicator, "none");
    }
}
