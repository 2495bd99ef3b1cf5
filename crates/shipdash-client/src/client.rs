use reqwest::StatusCode;
use shipdash_api::utils::RetryPolicy;
use shipdash_api::{
    ApiError,
    ApiResult,
    CarrierCostRow,
    CollectionPage,
    DashboardSummary,
    StatusPriorityRow,
    WeightCostRow,
    WindowCount,
};

use crate::config;
use crate::mapper;
use crate::types;

/// Client for the remote collection endpoint. All read paths live under
/// `/collection`; aggregate metrics under `/collection/aggregate/<metric>`.
pub struct CollectionClient {
    http_client: reqwest::Client,
    api_url: String,
    retry: RetryPolicy,
}

impl CollectionClient {
    pub fn new(http_client: reqwest::Client, base_url: &str) -> ApiResult<Self> {
        Ok(Self {
            http_client,
            api_url: config::normalize_base_url(base_url)?,
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub async fn fetch_shipments(&self, params: &[(String, String)]) -> ApiResult<CollectionPage> {
        let envelope: types::CollectionEnvelope = self.get_json("/collection", params).await?;
        Ok(mapper::map_collection_page(envelope))
    }

    pub async fn fetch_carrier_averages(
        &self, params: &[(String, String)],
    ) -> ApiResult<Vec<CarrierCostRow>> {
        let rows: Vec<types::RawCarrierAverage> = self
            .get_json("/collection/aggregate/carrier_averages", params)
            .await?;
        Ok(rows.iter().map(mapper::map_carrier_average).collect())
    }

    pub async fn fetch_priority_matrix(
        &self, params: &[(String, String)],
    ) -> ApiResult<Vec<StatusPriorityRow>> {
        let cells: Vec<types::RawPriorityCell> = self
            .get_json("/collection/aggregate/priority_by_status", params)
            .await?;
        Ok(cells.iter().map(mapper::map_priority_cell).collect())
    }

    pub async fn fetch_express_correlation(
        &self, params: &[(String, String)],
    ) -> ApiResult<Vec<WeightCostRow>> {
        let rows: Vec<types::RawWeightCost> = self
            .get_json("/collection/aggregate/weight_cost", params)
            .await?;
        Ok(mapper::map_weight_cost(&rows))
    }

    pub async fn fetch_unique_carriers(&self) -> ApiResult<Vec<String>> {
        let values: Vec<serde_json::Value> = self
            .get_json("/collection/aggregate/unique_carriers", &[])
            .await?;
        Ok(mapper::map_unique_carriers(values))
    }

    pub async fn fetch_orders_window(&self, params: &[(String, String)]) -> ApiResult<WindowCount> {
        let raw: types::RawWindowCount = self
            .get_json("/collection/aggregate/orders_window", params)
            .await?;
        Ok(mapper::map_window_count(raw))
    }

    pub async fn fetch_delayed_window(
        &self, params: &[(String, String)],
    ) -> ApiResult<WindowCount> {
        let raw: types::RawWindowCount = self
            .get_json("/collection/aggregate/delayed_window", params)
            .await?;
        Ok(mapper::map_window_count(raw))
    }

    pub async fn fetch_summary(&self, params: &[(String, String)]) -> ApiResult<DashboardSummary> {
        let raw: types::RawSummary = self
            .get_json("/collection/aggregate/summary", params)
            .await?;
        Ok(mapper::map_summary(raw))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self, path: &str, params: &[(String, String)],
    ) -> ApiResult<T> {
        self.retry
            .retry(|| async {
                let url = format!("{}{}", self.api_url, path);
                let response = self
                    .http_client
                    .get(&url)
                    .query(params)
                    .send()
                    .await
                    .map_err(|e| {
                        ApiError::NetworkError(format!("Request to {} failed: {}", path, e))
                    })?;

                self.handle_response(path, response).await
            })
            .await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self, path: &str, response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::ApiError(format!(
                "Collection endpoint route not found: {}",
                path
            )));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::ApiError(format!(
                "Collection endpoint error ({}): {}",
                status, error_text
            )));
        }

        let body = response.text().await.map_err(|e| {
            ApiError::NetworkError(format!("Failed to read response from {}: {}", path, e))
        })?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::debug!(path = path, error = %e, "Response shape mismatch");
            ApiError::MalformedResponse(format!("Unexpected payload from {}: {}", path, e))
        })
    }
}
