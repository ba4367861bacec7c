//! JSON output formatting
//!
//! Every JSON result is wrapped as `{ "data": ..., "meta": { ... } }` so
//! scripts can rely on a stable envelope.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,

    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// dashcopy version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the output envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{DashboardExportBuilder, TileBuilder};
    use crate::client::models::Dashboard;
    use crate::models::DashboardDisplay;
    use chrono::DateTime;
    use serde_json::{Value, json};

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_dashboard_rows_keep_api_order_and_type_key() {
        let rows: Vec<DashboardDisplay> = ["Ops", "Fin"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                DashboardDisplay::from(Dashboard {
                    id: format!("d{}", i + 1),
                    name: name.to_string(),
                    dashboard_type: "standard".to_string(),
                })
            })
            .collect();

        let value = parse(&format_json(&rows).unwrap());

        assert_eq!(value["data"][0]["id"], "d1");
        assert_eq!(value["data"][1]["name"], "Fin");
        assert_eq!(value["data"][0]["type"], "standard");
        assert!(value["data"][0].get("dashboard_type").is_none());
    }

    #[test]
    fn test_export_record_keeps_file_field_names() {
        let export = DashboardExportBuilder::new("Ops")
            .tile(TileBuilder::new("chart").build())
            .source_org("org_9")
            .build();

        let value = parse(&format_json(&export).unwrap());

        assert_eq!(value["data"]["sourceOrganizationId"], "org_9");
        assert_eq!(value["data"]["exportedAt"], "2025-01-01T00:00:00.000Z");
        assert_eq!(value["data"]["tiles"][0]["options"]["type"], "chart");
    }

    #[test]
    fn test_meta_carries_version_and_rfc3339_timestamp() {
        let value = parse(&format_json(&json!({"deleted": true, "dashboard_id": "d1"})).unwrap());

        assert_eq!(value["data"]["deleted"], true);
        assert_eq!(value["meta"]["version"], env!("CARGO_PKG_VERSION"));
        let timestamp = value["meta"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_no_dashboards_is_an_empty_array() {
        let rows: Vec<DashboardDisplay> = Vec::new();
        let value = parse(&format_json(&rows).unwrap());
        assert_eq!(value["data"], json!([]));
    }
}
