//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod dashboard;
mod org;

pub use dashboard::{DashboardDisplay, TileDisplay};
pub use org::OrgDisplay;
