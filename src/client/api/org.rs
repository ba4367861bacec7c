//! Organization API trait

use async_trait::async_trait;

use crate::client::models::Organization;
use crate::error::Result;

/// Organization operations for the Pave API
#[async_trait]
pub trait OrgApi: Send + Sync {
    /// Organizations the grant key's user is a member of, in API order.
    async fn list_organizations(&self, grant_key: &str) -> Result<Vec<Organization>>;
}
