pub mod application;
pub mod domain;
pub mod event;
pub mod infrastructure;
pub mod logging;

use std::sync::Arc;
use std::time::Duration;

pub use application::{
    DashboardService,
    DashboardSnapshot,
    LoadPhase,
    OverviewView,
    TableView,
};
pub use domain::{
    DomainError,
    DomainResult,
    FilterState,
    PageState,
    PageToken,
    QuerySpec,
    RegressionLine,
    ShipmentSource,
    SortDirection,
    SortField,
};
pub use event::{
    CoreEvent,
    EventBus,
    NoOpEventBus,
};
pub use infrastructure::{
    ConfigLoader,
    DashboardConfig,
    HttpClientManager,
};
use infrastructure::CollectionSourceAdapter;
use shipdash_client::CollectionClient;

/// Wires the dashboard together: one HTTP client pool, one collection
/// client against the configured endpoint, one orchestrator on top.
pub struct DashboardContext {
    pub event_bus: Arc<dyn EventBus>,

    pub http_client_manager: Arc<HttpClientManager>,

    pub dashboard_service: Arc<DashboardService>,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig, event_bus: Arc<dyn EventBus>) -> anyhow::Result<Self> {
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

        let http_client_manager = Arc::new(HttpClientManager::new(Duration::from_secs(
            config.request_timeout_secs,
        ))?);

        let http_client = http_client_manager
            .client_for_url(&config.base_url)?
            .as_ref()
            .clone();
        let client = CollectionClient::new(http_client, &config.base_url)
            .map_err(DomainError::from)?;

        let source = Arc::new(CollectionSourceAdapter::new(client));
        let dashboard_service = Arc::new(DashboardService::new(
            source,
            Arc::clone(&event_bus),
            config,
        ));

        Ok(Self {
            event_bus,
            http_client_manager,
            dashboard_service,
        })
    }

    /// Kicks off the initial fetch cycle. A first-load failure leaves the
    /// service in the failed phase with an empty view-model; the next user
    /// mutation retries.
    pub async fn load_initial(&self) {
        if let Err(e) = self.dashboard_service.refresh().await {
            tracing::warn!(error = %e, "Initial dashboard load failed");
        }
    }
}
