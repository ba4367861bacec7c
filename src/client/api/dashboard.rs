//! Dashboard API trait
//!
//! Every method takes the grant key explicitly; implementations must not
//! remember it between calls.

use async_trait::async_trait;

use crate::client::models::{CreatedDashboard, Dashboard, DashboardDetail, OrgDashboardSnapshot};
use crate::client::query::CreateDashboard;
use crate::error::Result;

/// Dashboard operations for the Pave API
#[async_trait]
pub trait DashboardApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// List dashboard summaries in an organization, in API order.
    async fn list_dashboards(&self, grant_key: &str, org_id: &str) -> Result<Vec<Dashboard>>;

    /// Fetch a dashboard with its tiles and roles.
    ///
    /// This is the canonical detail shape and the one written to export files.
    async fn get_dashboard(&self, grant_key: &str, dashboard_id: &str) -> Result<DashboardDetail>;

    /// Fetch a dashboard through its organization, with tile `position` and
    /// `config` instead of `options`.
    ///
    /// Legacy shape; the result cannot be imported.
    async fn export_org_dashboard(
        &self,
        grant_key: &str,
        org_id: &str,
        dashboard_id: &str,
    ) -> Result<OrgDashboardSnapshot>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Create a dashboard in an organization.
    ///
    /// Implementations validate the name, type and tiles before anything is
    /// sent.
    async fn create_dashboard(
        &self,
        grant_key: &str,
        request: &CreateDashboard<'_>,
    ) -> Result<CreatedDashboard>;

    /// Permanently delete a dashboard.
    async fn delete_dashboard(&self, grant_key: &str, dashboard_id: &str) -> Result<()>;
}
