//! JSON export of the rendered dashboard.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::data::{Card, StatusClass};
use crate::source::StatusSnapshot;

/// Build the export document for a snapshot and its cards.
pub fn export_value(snapshot: &StatusSnapshot, cards: &[Card], source: &str) -> serde_json::Value {
    let errors = cards.iter().filter(|c| c.is_error()).count();
    let operational = cards
        .iter()
        .filter(|c| c.overall().is_some_and(|s| s.class == StatusClass::Operational))
        .count();
    let degraded = cards
        .iter()
        .filter(|c| c.overall().is_some_and(|s| s.class != StatusClass::Operational))
        .count();

    serde_json::json!({
        "timestamp": snapshot.timestamp.to_rfc3339(),
        "source": source,
        "summary": {
            "total_providers": cards.len(),
            "operational": operational,
            "degraded": degraded,
            "errors": errors,
        },
        "cards": cards,
    })
}

/// Write the export document to `path`.
pub fn write_cards(
    path: &Path,
    snapshot: &StatusSnapshot,
    cards: &[Card],
    source: &str,
) -> Result<()> {
    let json = serde_json::to_string_pretty(&export_value(snapshot, cards, source))?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{build_cards, Locale};

    #[test]
    fn test_export_summary() {
        let snapshot: StatusSnapshot = serde_json::from_str(
            r#"{
                "timestamp": "2025-06-01T12:00:00Z",
                "data": {
                    "OpenAI": { "status": { "indicator": "none", "description": "ok" } },
                    "Anthropic": { "status": { "indicator": "minor", "description": "meh" } },
                    "Google": { "error": "timeout" },
                    "Foo": { "components": [] }
                }
            }"#,
        )
        .unwrap();
        let cards = build_cards(&snapshot, Locale::En);

        let value = export_value(&snapshot, &cards, "file: status.json");
        assert_eq!(value["summary"]["total_providers"], 4);
        assert_eq!(value["summary"]["operational"], 1);
        assert_eq!(value["summary"]["degraded"], 1);
        assert_eq!(value["summary"]["errors"], 1);
        assert_eq!(value["cards"][0]["provider"], "OpenAI");
        assert_eq!(value["cards"][0]["overall"]["class"], "operational");
        assert_eq!(value["source"], "file: status.json");
    }

    #[test]
    fn test_write_cards() {
        let snapshot: StatusSnapshot =
            serde_json::from_str(r#"{"timestamp":"2025-06-01T12:00:00Z","data":{}}"#).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        write_cards(&path, &snapshot, &[], "test").unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["summary"]["total_providers"], 0);
    }
}
