//! Dashboard display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Dashboard, Tile};

/// Dashboard summary row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DashboardDisplay {
    #[tabled(rename = "DASHBOARD ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub dashboard_type: String,
}

impl From<Dashboard> for DashboardDisplay {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            id: dashboard.id,
            name: dashboard.name,
            dashboard_type: dashboard.dashboard_type,
        }
    }
}

/// One tile of a dashboard detail view
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TileDisplay {
    #[tabled(rename = "#")]
    pub index: usize,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub tile_type: String,

    /// `height x width`
    #[tabled(rename = "SIZE")]
    pub size: String,

    /// `x,y`
    #[tabled(rename = "POSITION")]
    pub position: String,
}

impl TileDisplay {
    /// Build a row for the tile at 1-based `index`.
    pub fn new(index: usize, tile: &Tile) -> Self {
        Self {
            index,
            tile_type: tile.tile_type().unwrap_or("-").to_string(),
            size: format!("{}x{}", tile.height, tile.width),
            position: format!("{},{}", tile.x, tile.y),
        }
    }

    /// Rows for every tile, numbered from 1.
    pub fn rows(tiles: &[Tile]) -> Vec<Self> {
        tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| Self::new(i + 1, tile))
            .collect()
    }
}
