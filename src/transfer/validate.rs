//! Structural checks for dashboards before import or export
//!
//! Checks run in a fixed order and stop at the first failure: the dashboard
//! itself, `name`, `type`, `tiles`, (for files) `exportedAt`, then each tile
//! in array order.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::client::models::Tile;

/// Tile attribute that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileField {
    Height,
    Width,
    X,
    Y,
    Options,
    OptionsType,
}

impl TileField {
    fn message(&self) -> &'static str {
        match self {
            TileField::Height => "has invalid height",
            TileField::Width => "has invalid width",
            TileField::X => "has invalid x position",
            TileField::Y => "has invalid y position",
            TileField::Options => "has invalid options",
            TileField::OptionsType => "options must include a 'type' field",
        }
    }
}

/// First structural violation found in a dashboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Dashboard data is required")]
    Missing,

    #[error("Dashboard must have a valid name")]
    MissingName,

    #[error("Dashboard must have a valid type")]
    MissingType,

    #[error("Dashboard must have a tiles array")]
    TilesNotArray,

    #[error("File does not appear to be a valid dashboard export (missing exportedAt field)")]
    MissingExportedAt,

    /// `tile` is the 1-based position in the tiles array
    #[error("Tile {tile} {}", .field.message())]
    InvalidTile { tile: usize, field: TileField },
}

/// Validate a dashboard-shaped JSON value (fetched detail or export record).
pub fn validate_dashboard(candidate: &Value) -> Result<(), ValidationError> {
    check(candidate, false)
}

/// Validate a parsed export file; additionally requires `exportedAt`.
pub fn validate_export_file(candidate: &Value) -> Result<(), ValidationError> {
    check(candidate, true)
}

/// Validate typed dashboard fields, as used before building a create mutation.
pub fn validate_parts(
    name: &str,
    dashboard_type: &str,
    tiles: &[Tile],
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if dashboard_type.is_empty() {
        return Err(ValidationError::MissingType);
    }
    validate_tiles(tiles)
}

/// Validate typed tiles in order.
pub fn validate_tiles(tiles: &[Tile]) -> Result<(), ValidationError> {
    for (i, tile) in tiles.iter().enumerate() {
        check_geometry(
            i + 1,
            tile.height.as_f64(),
            tile.width.as_f64(),
            tile.x.as_f64(),
            tile.y.as_f64(),
        )?;
        check_options(i + 1, &tile.options)?;
    }
    Ok(())
}

fn check(candidate: &Value, require_exported_at: bool) -> Result<(), ValidationError> {
    let Value::Object(dashboard) = candidate else {
        return Err(ValidationError::Missing);
    };

    if non_empty_str(dashboard.get("name")).is_none() {
        return Err(ValidationError::MissingName);
    }
    if non_empty_str(dashboard.get("type")).is_none() {
        return Err(ValidationError::MissingType);
    }

    let tiles = dashboard
        .get("tiles")
        .and_then(Value::as_array)
        .ok_or(ValidationError::TilesNotArray)?;

    if require_exported_at && !is_present(dashboard.get("exportedAt")) {
        return Err(ValidationError::MissingExportedAt);
    }

    for (i, tile) in tiles.iter().enumerate() {
        let number = |key: &str| tile.get(key).and_then(Value::as_f64);
        check_geometry(i + 1, number("height"), number("width"), number("x"), number("y"))?;

        let options = tile
            .get("options")
            .and_then(Value::as_object)
            .ok_or(ValidationError::InvalidTile {
                tile: i + 1,
                field: TileField::Options,
            })?;
        check_options(i + 1, options)?;
    }

    Ok(())
}

fn check_geometry(
    tile: usize,
    height: Option<f64>,
    width: Option<f64>,
    x: Option<f64>,
    y: Option<f64>,
) -> Result<(), ValidationError> {
    let fail = |field| Err(ValidationError::InvalidTile { tile, field });

    if !height.is_some_and(|h| h > 0.0) {
        return fail(TileField::Height);
    }
    if !width.is_some_and(|w| w > 0.0) {
        return fail(TileField::Width);
    }
    if !x.is_some_and(|x| x >= 0.0) {
        return fail(TileField::X);
    }
    if !y.is_some_and(|y| y >= 0.0) {
        return fail(TileField::Y);
    }
    Ok(())
}

fn check_options(tile: usize, options: &Map<String, Value>) -> Result<(), ValidationError> {
    if non_empty_str(options.get("type")).is_none() {
        return Err(ValidationError::InvalidTile {
            tile,
            field: TileField::OptionsType,
        });
    }
    Ok(())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
