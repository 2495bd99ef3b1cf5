use async_trait::async_trait;
use shipdash_api::{
    CarrierCostRow,
    CollectionPage,
    DashboardSummary,
    StatusPriorityRow,
    WeightCostRow,
    WindowCount,
};
use shipdash_client::CollectionClient;

use crate::domain::{
    DomainError,
    DomainResult,
    ShipmentSource,
};

/// Bridges the HTTP collection client into the orchestrator's source seam,
/// folding boundary errors into the domain taxonomy.
pub struct CollectionSourceAdapter {
    client: CollectionClient,
}

impl CollectionSourceAdapter {
    pub fn new(client: CollectionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ShipmentSource for CollectionSourceAdapter {
    async fn fetch_shipments(&self, params: &[(String, String)]) -> DomainResult<CollectionPage> {
        self.client
            .fetch_shipments(params)
            .await
            .map_err(DomainError::from)
    }

    async fn fetch_carrier_averages(
        &self, params: &[(String, String)],
    ) -> DomainResult<Vec<CarrierCostRow>> {
        self.client
            .fetch_carrier_averages(params)
            .await
            .map_err(DomainError::from)
    }

    async fn fetch_priority_matrix(
        &self, params: &[(String, String)],
    ) -> DomainResult<Vec<StatusPriorityRow>> {
        self.client
            .fetch_priority_matrix(params)
            .await
            .map_err(DomainError::from)
    }

    async fn fetch_express_correlation(
        &self, params: &[(String, String)],
    ) -> DomainResult<Vec<WeightCostRow>> {
        self.client
            .fetch_express_correlation(params)
            .await
            .map_err(DomainError::from)
    }

    async fn fetch_unique_carriers(&self) -> DomainResult<Vec<String>> {
        self.client
            .fetch_unique_carriers()
            .await
            .map_err(DomainError::from)
    }

    async fn fetch_orders_window(&self, params: &[(String, String)]) -> DomainResult<WindowCount> {
        self.client
            .fetch_orders_window(params)
            .await
            .map_err(DomainError::from)
    }

    async fn fetch_delayed_window(&self, params: &[(String, String)]) -> DomainResult<WindowCount> {
        self.client
            .fetch_delayed_window(params)
            .await
            .map_err(DomainError::from)
    }

    async fn fetch_summary(&self, params: &[(String, String)]) -> DomainResult<DashboardSummary> {
        self.client
            .fetch_summary(params)
            .await
            .map_err(DomainError::from)
    }
}
