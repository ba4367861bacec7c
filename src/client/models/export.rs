//! Dashboard export models
//!
//! `DashboardExport` is the `.json` file format written by `dashboard export`
//! and read by `dashboard import`. `OrgDashboardSnapshot` is the older
//! org-scoped shape (tile `position`/`config`), kept only for `--legacy`
//! exports; it is never accepted by import.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dashboard::{DashboardDetail, RoleRef, Tile};
use super::lenient;

/// Version tag written into every export file
pub const EXPORT_VERSION: &str = "1.0";

/// Dashboard file interchange format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport {
    pub name: String,

    #[serde(rename = "type")]
    pub dashboard_type: String,

    pub tiles: Vec<Tile>,

    #[serde(default, deserialize_with = "lenient::roles")]
    pub roles: Vec<RoleRef>,

    /// Format sentinel; only its presence is checked, never its type
    pub exported_at: Value,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_organization_id: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub export_version: Option<String>,
}

impl DashboardExport {
    /// Build an export record from a fetched dashboard.
    pub fn from_detail(
        detail: DashboardDetail,
        source_organization_id: impl Into<String>,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: detail.name,
            dashboard_type: detail.dashboard_type,
            tiles: detail.tiles,
            roles: detail.roles,
            exported_at: Value::String(exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            source_organization_id: Some(source_organization_id.into()),
            export_version: Some(EXPORT_VERSION.to_string()),
        }
    }

    /// Role IDs to make the imported dashboard visible to.
    ///
    /// Empty IDs are dropped.
    pub fn visible_role_ids(&self) -> Vec<String> {
        self.roles
            .iter()
            .filter(|role| !role.id.is_empty())
            .map(|role| role.id.clone())
            .collect()
    }
}

/// Tile position in the org-scoped snapshot shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPosition {
    #[serde(default)]
    pub x: Option<Value>,
    #[serde(default)]
    pub y: Option<Value>,
    #[serde(default)]
    pub width: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
}

/// Tile in the org-scoped snapshot shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotTile {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "type")]
    pub tile_type: Option<String>,

    #[serde(default)]
    pub position: Option<SnapshotPosition>,

    #[serde(default)]
    pub config: Option<Value>,
}

/// Dashboard fetched through its organization (legacy export shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgDashboardSnapshot {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub dashboard_type: String,

    #[serde(default)]
    pub tiles: Vec<SnapshotTile>,
}
