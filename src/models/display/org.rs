//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Organization;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Marks the configured default organization
    #[tabled(rename = "DEFAULT")]
    #[serde(rename = "default")]
    pub is_default: String,
}

impl OrgDisplay {
    /// Build a row, marking it when it matches the configured organization.
    pub fn new(org: Organization, default_id: Option<&str>) -> Self {
        let is_default = if default_id == Some(org.id.as_str()) {
            "*".to_string()
        } else {
            String::new()
        };
        Self {
            id: org.id,
            name: org.name,
            is_default,
        }
    }
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self::new(org, None)
    }
}
