//! Pave API data models
//!
//! Domain types returned by (or sent to) the JobTread Pave API, plus the
//! dashboard file interchange format.

mod dashboard;
mod export;
mod lenient;
mod org;

pub use dashboard::{
    CreatedDashboard, CreatedTile, Dashboard, DashboardDetail, OrgRef, RoleRef, Tile,
};
pub use export::{DashboardExport, OrgDashboardSnapshot, SnapshotTile};
pub use org::Organization;
