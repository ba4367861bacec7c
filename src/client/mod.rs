//! JobTread Pave API client
//!
//! Layers, bottom up: [`query`] builds request envelopes, [`transport`] posts
//! them with retry, [`response`] locates and decodes the payload, and
//! [`PaveClient`] ties them together behind the [`api`] traits.

pub mod api;
pub mod models;
pub mod pave;
pub mod query;
pub mod response;
pub mod transport;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;

pub use api::{DashboardApi, OrgApi};
#[allow(unused_imports)]
pub use models::{
    CreatedDashboard, Dashboard, DashboardDetail, DashboardExport, OrgDashboardSnapshot,
    Organization, Tile,
};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::{MockPaveClient, MockTransport};
pub use pave::PaveClient;
pub use query::CreateDashboard;
pub use transport::{Environment, RetryPolicy};
