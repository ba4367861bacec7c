//! Organization models

use serde::{Deserialize, Serialize};

/// Organization the grant key's user is a member of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: String,

    /// Organization name
    pub name: String,
}
