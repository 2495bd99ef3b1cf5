use async_trait::async_trait;
use shipdash_api::{
    CarrierCostRow,
    CollectionPage,
    DashboardSummary,
    StatusPriorityRow,
    WeightCostRow,
    WindowCount,
};

use super::error::DomainResult;

/// The remote collection endpoint as the orchestrator sees it: one method
/// per query route, each taking the already-serialized parameter list the
/// query builder produced.
#[async_trait]
pub trait ShipmentSource: Send + Sync {
    async fn fetch_shipments(&self, params: &[(String, String)]) -> DomainResult<CollectionPage>;

    async fn fetch_carrier_averages(
        &self, params: &[(String, String)],
    ) -> DomainResult<Vec<CarrierCostRow>>;

    async fn fetch_priority_matrix(
        &self, params: &[(String, String)],
    ) -> DomainResult<Vec<StatusPriorityRow>>;

    async fn fetch_express_correlation(
        &self, params: &[(String, String)],
    ) -> DomainResult<Vec<WeightCostRow>>;

    async fn fetch_unique_carriers(&self) -> DomainResult<Vec<String>>;

    async fn fetch_orders_window(&self, params: &[(String, String)]) -> DomainResult<WindowCount>;

    async fn fetch_delayed_window(&self, params: &[(String, String)]) -> DomainResult<WindowCount>;

    async fn fetch_summary(&self, params: &[(String, String)]) -> DomainResult<DashboardSummary>;
}
