//! Pave API client implementation

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use super::api::{DashboardApi, OrgApi};
use super::models::{
    CreatedDashboard, Dashboard, DashboardDetail, OrgDashboardSnapshot, Organization,
};
use super::query::{self, CreateDashboard, Envelope};
use super::response;
use super::transport::{self, Environment, HttpTransport, RetryPolicy, Transport};
use crate::error::Result;
use crate::transfer::validate;

/// JobTread Pave API client
///
/// Holds no credentials; every call is given the grant key to use.
pub struct PaveClient<T: Transport = HttpTransport> {
    transport: T,
    policy: RetryPolicy,
    environment: Environment,
}

impl PaveClient<HttpTransport> {
    /// Create a client for an endpoint (the vendor URL or a relay).
    pub fn new(
        endpoint: impl Into<String>,
        policy: RetryPolicy,
        environment: Environment,
    ) -> Result<Self> {
        let transport = HttpTransport::new(endpoint, policy.timeout)?;
        debug!("Pave endpoint: {}", transport.endpoint());
        Ok(Self::with_transport(transport, policy, environment))
    }
}

impl<T: Transport> PaveClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: T, policy: RetryPolicy, environment: Environment) -> Self {
        Self {
            transport,
            policy,
            environment,
        }
    }

    /// Send an envelope and locate the response payload.
    async fn call(&self, envelope: &Envelope, grant_key: &str) -> Result<Value> {
        let body = transport::send(
            &self.transport,
            envelope,
            grant_key,
            &self.policy,
            self.environment,
        )
        .await?;

        Ok(response::normalize(body, envelope.operation())?)
    }
}

#[async_trait]
impl<T: Transport> OrgApi for PaveClient<T> {
    async fn list_organizations(&self, grant_key: &str) -> Result<Vec<Organization>> {
        let payload = self.call(&query::list_organizations(grant_key), grant_key).await?;
        let orgs = response::organizations(payload)?;
        debug!("Grant key has access to {} organization(s)", orgs.len());
        Ok(orgs)
    }
}

#[async_trait]
impl<T: Transport> DashboardApi for PaveClient<T> {
    async fn list_dashboards(&self, grant_key: &str, org_id: &str) -> Result<Vec<Dashboard>> {
        let payload = self
            .call(&query::list_dashboards(grant_key, org_id), grant_key)
            .await?;
        Ok(response::dashboards(payload)?)
    }

    async fn get_dashboard(&self, grant_key: &str, dashboard_id: &str) -> Result<DashboardDetail> {
        let payload = self
            .call(&query::get_dashboard(grant_key, dashboard_id), grant_key)
            .await?;
        let dashboard = response::dashboard_value(payload)?;
        validate::validate_dashboard(&dashboard)?;
        Ok(response::dashboard_detail(dashboard)?)
    }

    async fn export_org_dashboard(
        &self,
        grant_key: &str,
        org_id: &str,
        dashboard_id: &str,
    ) -> Result<OrgDashboardSnapshot> {
        let envelope = query::export_org_dashboard(grant_key, org_id, dashboard_id);
        let payload = self.call(&envelope, grant_key).await?;
        Ok(response::org_dashboard_snapshot(payload)?)
    }

    async fn create_dashboard(
        &self,
        grant_key: &str,
        request: &CreateDashboard<'_>,
    ) -> Result<CreatedDashboard> {
        validate::validate_parts(request.name, request.dashboard_type, request.tiles)?;

        debug!(
            "Creating dashboard '{}' with {} tile(s) in {}",
            request.name,
            request.tiles.len(),
            request.organization_id
        );
        let payload = self
            .call(&query::create_dashboard(grant_key, request), grant_key)
            .await?;
        Ok(response::created_dashboard(payload)?)
    }

    async fn delete_dashboard(&self, grant_key: &str, dashboard_id: &str) -> Result<()> {
        // Deletion has no payload worth reading; only the error check applies.
        let envelope = query::delete_dashboard(grant_key, dashboard_id);
        transport::send(
            &self.transport,
            &envelope,
            grant_key,
            &self.policy,
            self.environment,
        )
        .await?;
        Ok(())
    }
}
