//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod activity_chart;
pub mod header;
pub mod key_data;
pub mod loading;
pub mod performance_chart;
pub mod score_chart;
pub mod service_error;
pub mod sessions_chart;
pub mod sidebar;

pub use activity_chart::ActivityChart;
pub use header::Header;
pub use key_data::KeyDataCard;
pub use loading::Loading;
pub use performance_chart::PerformanceChart;
pub use score_chart::ScoreChart;
pub use service_error::ServiceError;
pub use sessions_chart::SessionsChart;
pub use sidebar::Sidebar;
