//! Dashboard models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::lenient;

/// Dashboard summary, one per dashboard in an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Dashboard ID
    pub id: String,

    /// Dashboard name
    pub name: String,

    /// Dashboard type (e.g. "standard")
    #[serde(rename = "type")]
    pub dashboard_type: String,
}

/// Full dashboard with its tiles and visibility roles.
///
/// The API wraps both collections as `{ "nodes": [...] }`; this type holds
/// the collapsed arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDetail {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub dashboard_type: String,

    #[serde(default)]
    pub tiles: Vec<Tile>,

    #[serde(default, deserialize_with = "lenient::roles")]
    pub roles: Vec<RoleRef>,
}

/// A positioned, sized widget on a dashboard.
///
/// Numbers are kept as `serde_json::Number` so integer/float formatting
/// survives an export/import round trip unchanged. `options` is an opaque,
/// vendor-defined bag whose only required key is `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub height: Number,
    pub width: Number,
    pub x: Number,
    pub y: Number,
    pub options: Map<String, Value>,
}

impl Tile {
    /// The tile's `options.type`, if present and a string.
    pub fn tile_type(&self) -> Option<&str> {
        self.options.get("type").and_then(Value::as_str)
    }
}

/// Reference to a visibility role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: String,
}

/// Organization reference embedded in mutation results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgRef {
    pub id: String,
}

/// Tile reference returned after creating a dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTile {
    pub id: String,
}

/// Result of the `createDashboard` mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedDashboard {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub dashboard_type: String,

    /// Organization the dashboard was created in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrgRef>,

    /// IDs of the created tiles
    #[serde(default)]
    pub tiles: Vec<CreatedTile>,
}
