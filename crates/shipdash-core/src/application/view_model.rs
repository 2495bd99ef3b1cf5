//! Plain-data snapshots handed to the presentation layer. No behavior
//! beyond construction; everything serializes with serde.

use serde::Serialize;
use shipdash_api::ShipmentRecord;

use crate::domain::{
    CarrierCost,
    FilterState,
    OnTimeSplit,
    PageState,
    PageToken,
    RegressionLine,
    StatusPriorityCount,
    WeightCostPoint,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed { error: String },
}

impl LoadPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadPhase::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadPhase::Failed { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub records: Vec<ShipmentRecord>,
    pub window: Vec<PageToken>,
}

impl TableView {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            window: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub total_shipments: u64,
    pub delivery_split: OnTimeSplit,
    pub recent_window: OnTimeSplit,
    pub carrier_costs: Vec<CarrierCost>,
    pub overall_average_cost: Option<f64>,
    pub priority_matrix: Vec<StatusPriorityCount>,
    pub scatter: Vec<WeightCostPoint>,
    pub regression: Option<RegressionLine>,
    pub carriers: Vec<String>,
    pub top_expensive: Vec<ShipmentRecord>,
}

impl OverviewView {
    pub fn empty() -> Self {
        Self {
            total_shipments: 0,
            delivery_split: OnTimeSplit::default(),
            recent_window: OnTimeSplit::default(),
            carrier_costs: Vec::new(),
            overall_average_cost: None,
            priority_matrix: Vec::new(),
            scatter: Vec::new(),
            regression: None,
            carriers: Vec::new(),
            top_expensive: Vec::new(),
        }
    }
}

/// A consistent copy of the whole dashboard state at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub filters: FilterState,
    pub page: PageState,
    pub phase: LoadPhase,
    pub table: TableView,
    pub overview: OverviewView,
}
