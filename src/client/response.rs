//! Response normalization for Pave replies
//!
//! Pave answers either `{ "data": { ... } }` or a bare object exposing the
//! requested root fields directly. [`normalize`] finds the payload; the
//! per-operation extractors walk the known nesting and collapse the
//! `{ "nodes": [...] }` wrappers into plain vectors.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{
    CreatedDashboard, CreatedTile, Dashboard, DashboardDetail, OrgDashboardSnapshot, OrgRef,
    Organization,
};
use super::query::Operation;
use crate::error::ApiError;

/// Root keys accepted on a bare (unwrapped) response
const KNOWN_ROOT_KEYS: [&str; 4] = ["organization", "dashboard", "createDashboard", "currentGrant"];

/// Pave's collection wrapper
#[derive(Debug, Deserialize)]
struct Nodes<T> {
    nodes: Vec<T>,
}

/// Locate the payload in a response body already checked for `errors`.
pub fn normalize(body: Value, operation: Operation) -> Result<Value, ApiError> {
    let Value::Object(mut map) = body else {
        return Err(ApiError::MalformedResponse(
            "response body is not a JSON object".to_string(),
        ));
    };

    if let Some(data) = map.remove("data").filter(|d| !d.is_null()) {
        return Ok(data);
    }

    let root = operation.root_key();
    let has_root = KNOWN_ROOT_KEYS
        .iter()
        .chain(std::iter::once(&root))
        .any(|key| map.get(*key).is_some_and(|v| !v.is_null()));

    if has_root {
        Ok(Value::Object(map))
    } else {
        Err(ApiError::MalformedResponse(format!(
            "expected `data` or `{}` in response",
            root
        )))
    }
}

fn decode<T: DeserializeOwned>(payload: Value, path: &str) -> Result<T, ApiError> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::MalformedResponse(format!("could not read `{}`: {}", path, e)))
}

/// `currentGrant.user.memberships.nodes[].organization`
pub fn organizations(payload: Value) -> Result<Vec<Organization>, ApiError> {
    #[derive(Deserialize)]
    struct Membership {
        organization: Organization,
    }

    #[derive(Deserialize)]
    struct User {
        memberships: Nodes<Membership>,
    }

    #[derive(Deserialize)]
    struct Grant {
        user: User,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Payload {
        current_grant: Grant,
    }

    let payload: Payload = decode(payload, "currentGrant.user.memberships.nodes")?;
    Ok(payload
        .current_grant
        .user
        .memberships
        .nodes
        .into_iter()
        .map(|m| m.organization)
        .collect())
}

/// `organization.dashboards.nodes`
pub fn dashboards(payload: Value) -> Result<Vec<Dashboard>, ApiError> {
    #[derive(Deserialize)]
    struct Org {
        dashboards: Nodes<Dashboard>,
    }

    #[derive(Deserialize)]
    struct Payload {
        organization: Org,
    }

    let payload: Payload = decode(payload, "organization.dashboards.nodes")?;
    Ok(payload.organization.dashboards.nodes)
}

/// `dashboard` with `tiles.nodes` and `roles.nodes` collapsed into plain
/// arrays but left untyped, so tiles can be validated as the API sent them.
pub fn dashboard_value(payload: Value) -> Result<Value, ApiError> {
    let Some(Value::Object(mut dashboard)) = payload.get("dashboard").cloned() else {
        return Err(ApiError::MalformedResponse(
            "could not read `dashboard`: missing or not an object".to_string(),
        ));
    };

    let tiles = collapse_nodes(dashboard.remove("tiles")).ok_or_else(|| {
        ApiError::MalformedResponse("could not read `dashboard.tiles.nodes`".to_string())
    })?;
    let roles = collapse_nodes(dashboard.remove("roles")).unwrap_or_default();

    dashboard.insert("tiles".to_string(), Value::Array(tiles));
    dashboard.insert("roles".to_string(), Value::Array(roles));
    Ok(Value::Object(dashboard))
}

fn collapse_nodes(wrapper: Option<Value>) -> Option<Vec<Value>> {
    let Value::Object(mut wrapper) = wrapper? else {
        return None;
    };
    match wrapper.remove("nodes") {
        Some(Value::Array(nodes)) => Some(nodes),
        _ => None,
    }
}

/// Typed dashboard from the output of [`dashboard_value`].
pub fn dashboard_detail(dashboard: Value) -> Result<DashboardDetail, ApiError> {
    decode(dashboard, "dashboard")
}

/// `createDashboard.createdDashboard`
pub fn created_dashboard(payload: Value) -> Result<CreatedDashboard, ApiError> {
    #[derive(Deserialize)]
    struct RawCreated {
        id: String,
        name: String,
        #[serde(rename = "type")]
        dashboard_type: String,
        #[serde(default)]
        organization: Option<OrgRef>,
        #[serde(default)]
        tiles: Option<Nodes<CreatedTile>>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Mutation {
        created_dashboard: RawCreated,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Payload {
        create_dashboard: Mutation,
    }

    let raw = decode::<Payload>(payload, "createDashboard.createdDashboard")?
        .create_dashboard
        .created_dashboard;
    Ok(CreatedDashboard {
        id: raw.id,
        name: raw.name,
        dashboard_type: raw.dashboard_type,
        organization: raw.organization,
        tiles: raw.tiles.map(|t| t.nodes).unwrap_or_default(),
    })
}

/// `organization.dashboard` with `tiles.nodes` collapsed
pub fn org_dashboard_snapshot(payload: Value) -> Result<OrgDashboardSnapshot, ApiError> {
    #[derive(Deserialize)]
    struct RawSnapshot {
        id: String,
        name: String,
        #[serde(rename = "type")]
        dashboard_type: String,
        #[serde(default)]
        tiles: Option<Nodes<super::models::SnapshotTile>>,
    }

    #[derive(Deserialize)]
    struct Org {
        dashboard: RawSnapshot,
    }

    #[derive(Deserialize)]
    struct Payload {
        organization: Org,
    }

    let raw = decode::<Payload>(payload, "organization.dashboard")?
        .organization
        .dashboard;
    Ok(OrgDashboardSnapshot {
        id: raw.id,
        name: raw.name,
        dashboard_type: raw.dashboard_type,
        tiles: raw.tiles.map(|t| t.nodes).unwrap_or_default(),
    })
}
