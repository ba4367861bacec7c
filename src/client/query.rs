//! Pave query envelopes
//!
//! Pave queries are nested JSON objects: each key selects a field, an empty
//! object `{}` means "return this scalar", and the reserved `$` key carries
//! arguments. Every envelope built here also carries the grant key under the
//! root `$`, mirroring the bearer header the transport sends.
//!
//! All builders are pure: the same inputs always produce the same JSON.

use serde_json::{Value, json};

use super::models::Tile;

/// Reserved key holding arguments at any level of a query
pub const ARGS_KEY: &str = "$";

/// The operations the client knows how to build and normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListOrganizations,
    ListDashboards,
    GetDashboard,
    CreateDashboard,
    DeleteDashboard,
    ExportOrgDashboard,
}

impl Operation {
    /// Top-level key the response payload is expected under.
    pub fn root_key(&self) -> &'static str {
        match self {
            Operation::ListOrganizations => "currentGrant",
            Operation::ListDashboards => "organization",
            Operation::GetDashboard => "dashboard",
            Operation::CreateDashboard => "createDashboard",
            Operation::DeleteDashboard => "deleteDashboard",
            Operation::ExportOrgDashboard => "organization",
        }
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListOrganizations => "list_organizations",
            Operation::ListDashboards => "list_dashboards",
            Operation::GetDashboard => "get_dashboard",
            Operation::CreateDashboard => "create_dashboard",
            Operation::DeleteDashboard => "delete_dashboard",
            Operation::ExportOrgDashboard => "export_org_dashboard",
        }
    }
}

/// A query ready to send, tagged with the operation that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    operation: Operation,
    query: Value,
}

impl Envelope {
    fn new(operation: Operation, grant_key: &str, mut query: Value) -> Self {
        if let Value::Object(ref mut map) = query {
            map.insert(ARGS_KEY.to_string(), json!({ "grantKey": grant_key }));
        }
        Self { operation, query }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The nested query object
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Request body as sent on the wire: `{ "query": ... }`
    pub fn body(&self) -> Value {
        json!({ "query": self.query() })
    }

    /// Copy of the query with the grant key masked, for logging.
    pub fn redacted(&self) -> Value {
        let mut query = self.query.clone();
        if let Some(args) = query.get_mut(ARGS_KEY).and_then(Value::as_object_mut) {
            args.insert("grantKey".to_string(), json!("***"));
        }
        query
    }
}

/// Parameters for the `createDashboard` mutation
#[derive(Debug, Clone)]
pub struct CreateDashboard<'a> {
    pub organization_id: &'a str,
    pub name: &'a str,
    pub dashboard_type: &'a str,
    pub tiles: &'a [Tile],
    pub visible_to_role_ids: &'a [String],
}

/// Organizations the grant key's user belongs to.
pub fn list_organizations(grant_key: &str) -> Envelope {
    Envelope::new(
        Operation::ListOrganizations,
        grant_key,
        json!({
            "currentGrant": {
                "user": {
                    "memberships": {
                        "nodes": {
                            "organization": { "id": {}, "name": {} }
                        }
                    }
                }
            }
        }),
    )
}

/// Dashboards in an organization.
pub fn list_dashboards(grant_key: &str, organization_id: &str) -> Envelope {
    Envelope::new(
        Operation::ListDashboards,
        grant_key,
        json!({
            "organization": {
                "$": { "id": organization_id },
                "id": {},
                "name": {},
                "dashboards": {
                    "nodes": { "id": {}, "name": {}, "type": {} }
                }
            }
        }),
    )
}

/// A single dashboard with tiles and roles.
pub fn get_dashboard(grant_key: &str, dashboard_id: &str) -> Envelope {
    Envelope::new(
        Operation::GetDashboard,
        grant_key,
        json!({
            "dashboard": {
                "$": { "id": dashboard_id },
                "id": {},
                "name": {},
                "type": {},
                "roles": {
                    "nodes": { "id": {} }
                },
                "tiles": {
                    "nodes": { "height": {}, "width": {}, "x": {}, "y": {}, "options": {} }
                }
            }
        }),
    )
}

/// Create a dashboard from tiles and visibility roles.
pub fn create_dashboard(grant_key: &str, params: &CreateDashboard<'_>) -> Envelope {
    Envelope::new(
        Operation::CreateDashboard,
        grant_key,
        json!({
            "createDashboard": {
                "$": {
                    "organizationId": params.organization_id,
                    "name": params.name,
                    "type": params.dashboard_type,
                    "tiles": params.tiles,
                    "visibleToRoleIds": params.visible_to_role_ids
                },
                "createdDashboard": {
                    "id": {},
                    "name": {},
                    "type": {},
                    "organization": { "id": {} },
                    "tiles": {
                        "nodes": { "id": {} }
                    }
                }
            }
        }),
    )
}

/// Delete a dashboard by ID.
pub fn delete_dashboard(grant_key: &str, dashboard_id: &str) -> Envelope {
    Envelope::new(
        Operation::DeleteDashboard,
        grant_key,
        json!({
            "deleteDashboard": {
                "$": { "id": dashboard_id }
            }
        }),
    )
}

/// A dashboard fetched through its organization, with tile position/config.
pub fn export_org_dashboard(
    grant_key: &str,
    organization_id: &str,
    dashboard_id: &str,
) -> Envelope {
    Envelope::new(
        Operation::ExportOrgDashboard,
        grant_key,
        json!({
            "organization": {
                "$": { "id": organization_id },
                "dashboard": {
                    "$": { "id": dashboard_id },
                    "id": {},
                    "name": {},
                    "type": {},
                    "tiles": {
                        "nodes": {
                            "id": {},
                            "name": {},
                            "type": {},
                            "position": { "x": {}, "y": {}, "width": {}, "height": {} },
                            "config": {}
                        }
                    }
                }
            }
        }),
    )
}
