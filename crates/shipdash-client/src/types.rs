//! Raw wire shapes as the collection endpoint actually serves them. The
//! endpoint is inconsistent about key casing (PascalCase on the dedicated
//! aggregate routes, camelCase inside the unified summary), so each route
//! gets its own raw struct and the mapper folds them into contract types.

use serde::Deserialize;
use shipdash_api::ShipmentRecord;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CollectionEnvelope {
    pub shipments: Vec<ShipmentRecord>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCarrierAverage {
    #[serde(rename = "Carrier")]
    pub carrier: String,
    #[serde(rename = "AverageCost")]
    pub average_cost: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPriorityCell {
    #[serde(rename = "DeliveryStatus")]
    pub status: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

// Weight or cost can be absent on rows the endpoint never cleaned up;
// incomplete rows are dropped by the mapper.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawWeightCost {
    #[serde(rename = "WeightKG", default)]
    pub weight_kg: Option<f64>,
    #[serde(rename = "CostUSD", default)]
    pub cost_usd: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawWindowCount {
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSummaryCarrierCost {
    pub carrier: String,
    #[serde(rename = "averageCost")]
    pub average_cost: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSummary {
    #[serde(rename = "totalShipments")]
    pub total_shipments: u64,
    #[serde(rename = "totalDelayedShipments")]
    pub total_delayed: u64,
    #[serde(rename = "ordersPast3Months")]
    pub orders_past_window: u64,
    #[serde(rename = "delayedPast3Months")]
    pub delayed_past_window: u64,
    #[serde(rename = "avgCostByCarrierData", default)]
    pub carrier_averages: Vec<RawSummaryCarrierCost>,
    #[serde(rename = "top5ExpensiveShipments", default)]
    pub top_expensive: Vec<ShipmentRecord>,
}
