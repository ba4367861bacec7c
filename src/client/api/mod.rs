//! API trait definitions split by responsibility
//!
//! This module organizes the Pave API surface into focused sub-traits:
//! - [`OrgApi`] - Organization discovery for a grant key
//! - [`DashboardApi`] - Dashboard listing, detail, create, delete and export

mod dashboard;
mod org;

pub use dashboard::DashboardApi;
pub use org::OrgApi;
