//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use serde_json::{Map, Number, Value};

use super::models::{DashboardDetail, DashboardExport, Organization, RoleRef, Tile};

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test Organization instances.
///
/// # Example
/// ```ignore
/// let org = OrganizationBuilder::new("org_1").name("Acme").build();
/// ```
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    id: String,
    name: String,
}

impl OrganizationBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Organization {}", &id),
            id,
        }
    }

    /// Set the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Organization {
        Organization {
            id: self.id,
            name: self.name,
        }
    }
}

// ============================================================================
// TileBuilder
// ============================================================================

/// Builder for creating test Tile instances.
///
/// Defaults to a 2x4 tile at the origin.
///
/// # Example
/// ```ignore
/// let tile = TileBuilder::new("chart").size(2, 3).at(1, 0).build();
/// ```
#[derive(Debug, Clone)]
pub struct TileBuilder {
    height: i64,
    width: i64,
    x: i64,
    y: i64,
    options: Map<String, Value>,
}

impl TileBuilder {
    /// Create a new builder with the given `options.type`.
    pub fn new(tile_type: impl Into<String>) -> Self {
        let mut options = Map::new();
        options.insert("type".to_string(), Value::String(tile_type.into()));
        Self {
            height: 2,
            width: 4,
            x: 0,
            y: 0,
            options,
        }
    }

    /// Set height and width.
    pub fn size(mut self, height: i64, width: i64) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Set the grid position.
    pub fn at(mut self, x: i64, y: i64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Add an extra option alongside `type`.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Tile {
        Tile {
            height: Number::from(self.height),
            width: Number::from(self.width),
            x: Number::from(self.x),
            y: Number::from(self.y),
            options: self.options,
        }
    }
}

// ============================================================================
// DashboardDetailBuilder
// ============================================================================

/// Builder for creating test DashboardDetail instances.
#[derive(Debug, Clone)]
pub struct DashboardDetailBuilder {
    id: String,
    name: String,
    dashboard_type: String,
    tiles: Vec<Tile>,
    roles: Vec<RoleRef>,
}

impl DashboardDetailBuilder {
    /// Create a new builder with the given ID and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dashboard_type: "standard".to_string(),
            tiles: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Set the dashboard type.
    pub fn dashboard_type(mut self, dashboard_type: impl Into<String>) -> Self {
        self.dashboard_type = dashboard_type.into();
        self
    }

    /// Append a tile.
    pub fn tile(mut self, tile: Tile) -> Self {
        self.tiles.push(tile);
        self
    }

    /// Append a visibility role.
    pub fn role(mut self, id: impl Into<String>) -> Self {
        self.roles.push(RoleRef { id: id.into() });
        self
    }

    pub fn build(self) -> DashboardDetail {
        DashboardDetail {
            id: self.id,
            name: self.name,
            dashboard_type: self.dashboard_type,
            tiles: self.tiles,
            roles: self.roles,
        }
    }
}

// ============================================================================
// DashboardExportBuilder
// ============================================================================

/// Builder for creating test DashboardExport instances.
///
/// # Example
/// ```ignore
/// let export = DashboardExportBuilder::new("Ops")
///     .tile(TileBuilder::new("chart").build())
///     .role("r1")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct DashboardExportBuilder {
    name: String,
    dashboard_type: String,
    tiles: Vec<Tile>,
    roles: Vec<RoleRef>,
    exported_at: String,
    source_organization_id: String,
}

impl DashboardExportBuilder {
    /// Create a new builder with the given dashboard name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dashboard_type: "standard".to_string(),
            tiles: Vec::new(),
            roles: Vec::new(),
            exported_at: "2025-01-01T00:00:00.000Z".to_string(),
            source_organization_id: "org_1".to_string(),
        }
    }

    /// Set the dashboard type.
    pub fn dashboard_type(mut self, dashboard_type: impl Into<String>) -> Self {
        self.dashboard_type = dashboard_type.into();
        self
    }

    /// Append a tile.
    pub fn tile(mut self, tile: Tile) -> Self {
        self.tiles.push(tile);
        self
    }

    /// Append a visibility role.
    pub fn role(mut self, id: impl Into<String>) -> Self {
        self.roles.push(RoleRef { id: id.into() });
        self
    }

    /// Set the source organization.
    pub fn source_org(mut self, org_id: impl Into<String>) -> Self {
        self.source_organization_id = org_id.into();
        self
    }

    pub fn build(self) -> DashboardExport {
        DashboardExport {
            name: self.name,
            dashboard_type: self.dashboard_type,
            tiles: self.tiles,
            roles: self.roles,
            exported_at: Value::String(self.exported_at),
            source_organization_id: Some(self.source_organization_id),
            export_version: Some("1.0".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_builder_defaults() {
        let tile = TileBuilder::new("chart").build();
        assert_eq!(tile.height, Number::from(2));
        assert_eq!(tile.width, Number::from(4));
        assert_eq!(tile.tile_type(), Some("chart"));
    }

    #[test]
    fn test_export_builder() {
        let export = DashboardExportBuilder::new("Ops")
            .tile(TileBuilder::new("chart").build())
            .role("r1")
            .source_org("org_9")
            .build();

        assert_eq!(export.tiles.len(), 1);
        assert_eq!(export.visible_role_ids(), vec!["r1".to_string()]);
        assert_eq!(export.source_organization_id.as_deref(), Some("org_9"));
    }
}
