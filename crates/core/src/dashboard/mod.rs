//! Dashboard assembly for one client selection.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::DashboardData;
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
