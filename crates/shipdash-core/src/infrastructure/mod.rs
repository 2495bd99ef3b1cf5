pub mod config;
mod http_client;
mod source_adapter;

pub use config::{
    ConfigLoadError,
    ConfigLoadResult,
    ConfigLoader,
    DashboardConfig,
};
pub use http_client::HttpClientManager;
pub use source_adapter::CollectionSourceAdapter;
