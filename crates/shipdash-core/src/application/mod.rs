pub mod services;
pub mod view_model;

pub use services::dashboard_service::DashboardService;
pub use view_model::{
    DashboardSnapshot,
    LoadPhase,
    OverviewView,
    TableView,
};
