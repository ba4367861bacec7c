//! Mock Pave transport and API client for testing
//!
//! [`MockTransport`] scripts raw HTTP outcomes for exercising retry and
//! classification. [`MockPaveClient`] implements the API traits directly for
//! testing code that sits above the client.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{DashboardApi, OrgApi};
use super::models::{
    CreatedDashboard, CreatedTile, Dashboard, DashboardDetail, OrgDashboardSnapshot, OrgRef,
    Organization, Tile,
};
use super::query::CreateDashboard;
use super::transport::{RawResponse, Transport, TransportError};
use crate::error::{ApiError, Result};

// ============================================================================
// MockTransport
// ============================================================================

/// One scripted transport outcome
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond(RawResponse),
    Fail(TransportError),
    /// Never completes within any reasonable test timeout
    Hang,
}

impl MockReply {
    /// Respond with a status and raw body text.
    pub fn status(status: u16, body: &str) -> Self {
        MockReply::Respond(RawResponse {
            status,
            body: body.to_string(),
        })
    }

    /// Respond with a status and JSON body.
    pub fn json(status: u16, body: Value) -> Self {
        MockReply::Respond(RawResponse {
            status,
            body: body.to_string(),
        })
    }

    /// Fail before any status is received.
    pub fn network(message: &str) -> Self {
        MockReply::Fail(TransportError::Network(message.to_string()))
    }

    pub fn hang() -> Self {
        MockReply::Hang
    }
}

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub grant_key: String,
    pub body: Value,
}

/// Transport that replays scripted replies in order.
///
/// Once the script is exhausted the last reply repeats, so a single reply
/// scripts every attempt of a retried call.
pub struct MockTransport {
    replies: Vec<MockReply>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<usize>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockTransport {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies,
            call_count: Arc::new(Mutex::new(0)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of POSTs attempted so far.
    pub async fn calls(&self) -> usize {
        *self.call_count.lock().await
    }

    /// All requests seen so far, in order.
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(
        &self,
        body: &Value,
        grant_key: &str,
    ) -> std::result::Result<RawResponse, TransportError> {
        let index = {
            let mut count = self.call_count.lock().await;
            *count += 1;
            *count - 1
        };
        self.captured_requests.lock().await.push(CapturedRequest {
            grant_key: grant_key.to_string(),
            body: body.clone(),
        });

        let reply = self
            .replies
            .get(index)
            .or(self.replies.last())
            .cloned()
            .unwrap_or_else(|| MockReply::network("no scripted reply"));

        match reply {
            MockReply::Respond(response) => Ok(response),
            MockReply::Fail(err) => Err(err),
            MockReply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(TransportError::Timeout)
            }
        }
    }
}

// ============================================================================
// MockPaveClient
// ============================================================================

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub list_dashboards: usize,
    pub get_dashboard: usize,
    pub export_org_dashboard: usize,
    pub create_dashboard: usize,
    pub delete_dashboard: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_organizations
            + self.list_dashboards
            + self.get_dashboard
            + self.export_org_dashboard
            + self.create_dashboard
            + self.delete_dashboard
    }
}

/// Owned copy of a create request for assertions
#[derive(Debug, Clone)]
pub struct CapturedCreate {
    pub organization_id: String,
    pub name: String,
    pub dashboard_type: String,
    pub tiles: Vec<Tile>,
    pub visible_to_role_ids: Vec<String>,
}

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockPaveClient::new()
///     .with_orgs(vec![OrganizationBuilder::new("org_1").build()])
///     .await;
///
/// let orgs = mock.list_organizations("gk").await?;
/// assert_eq!(orgs.len(), 1);
/// ```
pub struct MockPaveClient {
    /// Organizations to return from list_organizations
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Dashboard details; summaries for list_dashboards are derived from these
    details: Arc<Mutex<Vec<DashboardDetail>>>,
    /// Snapshot to return from export_org_dashboard
    snapshot: Arc<Mutex<Option<OrgDashboardSnapshot>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    created: Arc<Mutex<Vec<CapturedCreate>>>,
    deleted: Arc<Mutex<Vec<String>>>,
}

impl Default for MockPaveClient {
    fn default() -> Self {
        Self {
            orgs: Arc::new(Mutex::new(Vec::new())),
            details: Arc::new(Mutex::new(Vec::new())),
            snapshot: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            created: Arc::new(Mutex::new(Vec::new())),
            deleted: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockPaveClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organizations to return from list_organizations.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Configure dashboards returned by list_dashboards and get_dashboard.
    pub async fn with_dashboards(self, details: Vec<DashboardDetail>) -> Self {
        *self.details.lock().await = details;
        self
    }

    /// Configure the snapshot returned by export_org_dashboard.
    pub async fn with_snapshot(self, snapshot: OrgDashboardSnapshot) -> Self {
        *self.snapshot.lock().await = Some(snapshot);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Create requests received, in order.
    pub async fn created(&self) -> Vec<CapturedCreate> {
        self.created.lock().await.clone()
    }

    /// Dashboard IDs deleted, in order.
    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl OrgApi for MockPaveClient {
    async fn list_organizations(&self, _grant_key: &str) -> Result<Vec<Organization>> {
        self.call_count.lock().await.list_organizations += 1;
        self.check_error().await?;

        Ok(self.orgs.lock().await.clone())
    }
}

#[async_trait]
impl DashboardApi for MockPaveClient {
    async fn list_dashboards(&self, _grant_key: &str, _org_id: &str) -> Result<Vec<Dashboard>> {
        self.call_count.lock().await.list_dashboards += 1;
        self.check_error().await?;

        Ok(self
            .details
            .lock()
            .await
            .iter()
            .map(|d| Dashboard {
                id: d.id.clone(),
                name: d.name.clone(),
                dashboard_type: d.dashboard_type.clone(),
            })
            .collect())
    }

    async fn get_dashboard(&self, _grant_key: &str, dashboard_id: &str) -> Result<DashboardDetail> {
        self.call_count.lock().await.get_dashboard += 1;
        self.check_error().await?;

        self.details
            .lock()
            .await
            .iter()
            .find(|d| d.id == dashboard_id)
            .cloned()
            .ok_or_else(|| ApiError::Api(format!("Dashboard {} not found", dashboard_id)).into())
    }

    async fn export_org_dashboard(
        &self,
        _grant_key: &str,
        _org_id: &str,
        dashboard_id: &str,
    ) -> Result<OrgDashboardSnapshot> {
        self.call_count.lock().await.export_org_dashboard += 1;
        self.check_error().await?;

        self.snapshot
            .lock()
            .await
            .clone()
            .filter(|s| s.id == dashboard_id)
            .ok_or_else(|| ApiError::Api(format!("Dashboard {} not found", dashboard_id)).into())
    }

    async fn create_dashboard(
        &self,
        _grant_key: &str,
        request: &CreateDashboard<'_>,
    ) -> Result<CreatedDashboard> {
        self.call_count.lock().await.create_dashboard += 1;
        self.check_error().await?;

        let mut created = self.created.lock().await;
        created.push(CapturedCreate {
            organization_id: request.organization_id.to_string(),
            name: request.name.to_string(),
            dashboard_type: request.dashboard_type.to_string(),
            tiles: request.tiles.to_vec(),
            visible_to_role_ids: request.visible_to_role_ids.to_vec(),
        });

        Ok(CreatedDashboard {
            id: format!("created_{}", created.len()),
            name: request.name.to_string(),
            dashboard_type: request.dashboard_type.to_string(),
            organization: Some(OrgRef {
                id: request.organization_id.to_string(),
            }),
            tiles: (1..=request.tiles.len())
                .map(|i| CreatedTile {
                    id: format!("tile_{}", i),
                })
                .collect(),
        })
    }

    async fn delete_dashboard(&self, _grant_key: &str, dashboard_id: &str) -> Result<()> {
        self.call_count.lock().await.delete_dashboard += 1;
        self.check_error().await?;

        self.deleted.lock().await.push(dashboard_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{DashboardDetailBuilder, OrganizationBuilder};

    #[tokio::test]
    async fn test_mock_transport_repeats_last_reply() {
        let transport = MockTransport::new(vec![
            MockReply::status(500, ""),
            MockReply::status(200, "{}"),
        ]);

        for _ in 0..3 {
            let _ = transport.post(&Value::Null, "gk").await;
        }
        let last = transport.post(&Value::Null, "gk").await.unwrap();

        assert_eq!(last.status, 200);
        assert_eq!(transport.calls().await, 4);
    }

    #[tokio::test]
    async fn test_mock_client_lists_configured_data() {
        let mock = MockPaveClient::new()
            .with_orgs(vec![OrganizationBuilder::new("org_1").build()])
            .await
            .with_dashboards(vec![DashboardDetailBuilder::new("d1", "Ops").build()])
            .await;

        assert_eq!(mock.list_organizations("gk").await.unwrap().len(), 1);
        assert_eq!(mock.list_dashboards("gk", "org_1").await.unwrap()[0].id, "d1");
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_client_error_consumed_once() {
        let mock = MockPaveClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.list_organizations("gk").await.is_err());
        assert!(mock.list_organizations("gk").await.is_ok());
    }
}
