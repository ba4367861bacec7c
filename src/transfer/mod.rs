//! Dashboard export and import workflows
//!
//! Export fetches a dashboard and wraps it as a [`DashboardExport`]; import
//! reads one back and recreates it in a (possibly different) organization.
//! Both sides run the dashboard validator before anything leaves the process.

pub mod file;
pub mod validate;

use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

use crate::client::{CreateDashboard, CreatedDashboard, DashboardApi, DashboardExport};
use crate::error::Result;

/// Fetch a dashboard and build a validated export record.
pub async fn export_dashboard<A: DashboardApi + ?Sized>(
    api: &A,
    grant_key: &str,
    org_id: &str,
    dashboard_id: &str,
    exported_at: DateTime<Utc>,
) -> Result<DashboardExport> {
    let detail = api.get_dashboard(grant_key, dashboard_id).await?;
    let export = DashboardExport::from_detail(detail, org_id, exported_at);

    validate::validate_dashboard(&serde_json::to_value(&export)?)?;
    debug!(
        "Exported '{}' with {} tile(s)",
        export.name,
        export.tiles.len()
    );

    Ok(export)
}

/// Turn a parsed export file into an export record ready to import.
///
/// A non-empty `name_override` replaces the file's name before validation.
pub fn prepare_import(mut raw: Value, name_override: Option<&str>) -> Result<DashboardExport> {
    let name_override = name_override.filter(|n| !n.is_empty());
    if let (Some(name), Value::Object(map)) = (name_override, &mut raw) {
        map.insert("name".to_string(), Value::String(name.to_string()));
    }

    validate::validate_export_file(&raw)?;
    Ok(serde_json::from_value(raw)?)
}

/// Create a dashboard in `org_id` from an export record.
pub async fn import_dashboard<A: DashboardApi + ?Sized>(
    api: &A,
    grant_key: &str,
    org_id: &str,
    export: &DashboardExport,
) -> Result<CreatedDashboard> {
    let roles = export.visible_role_ids();
    let source = export
        .source_organization_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or("unknown organization");
    debug!("Importing '{}' from {} into {}", export.name, source, org_id);

    api.create_dashboard(
        grant_key,
        &CreateDashboard {
            organization_id: org_id,
            name: &export.name,
            dashboard_type: &export.dashboard_type,
            tiles: &export.tiles,
            visible_to_role_ids: &roles,
        },
    )
    .await
}
