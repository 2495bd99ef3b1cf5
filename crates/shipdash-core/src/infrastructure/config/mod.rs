mod loader;
mod schema;

pub use loader::{
    ConfigLoadError,
    ConfigLoadResult,
    ConfigLoader,
};
pub use schema::DashboardConfig;
