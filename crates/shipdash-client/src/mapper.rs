use shipdash_api::{
    CarrierCostRow,
    CollectionPage,
    DashboardSummary,
    StatusPriorityRow,
    WeightCostRow,
    WindowCount,
};

use crate::types;

pub(crate) fn map_collection_page(envelope: types::CollectionEnvelope) -> CollectionPage {
    CollectionPage {
        items: envelope.shipments,
        total_count: envelope.total_count,
    }
}

pub(crate) fn map_carrier_average(row: &types::RawCarrierAverage) -> CarrierCostRow {
    CarrierCostRow {
        carrier: row.carrier.clone(),
        average_cost: row.average_cost,
    }
}

pub(crate) fn map_priority_cell(cell: &types::RawPriorityCell) -> StatusPriorityRow {
    StatusPriorityRow {
        status: cell.status.clone(),
        priority: cell.priority.clone(),
        count: cell.count,
    }
}

pub(crate) fn map_weight_cost(rows: &[types::RawWeightCost]) -> Vec<WeightCostRow> {
    rows.iter()
        .filter_map(|row| {
            let weight_kg = row.weight_kg?;
            let cost_usd = row.cost_usd?;
            Some(WeightCostRow { weight_kg, cost_usd })
        })
        .collect()
}

// The endpoint can return nulls and non-string entries in the distinct
// carrier list; only non-empty strings survive, sorted for stable dropdowns.
pub(crate) fn map_unique_carriers(values: Vec<serde_json::Value>) -> Vec<String> {
    let mut carriers: Vec<String> = values
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect();
    carriers.sort();
    carriers
}

pub(crate) fn map_window_count(raw: types::RawWindowCount) -> WindowCount {
    WindowCount { count: raw.count }
}

pub(crate) fn map_summary(raw: types::RawSummary) -> DashboardSummary {
    DashboardSummary {
        total_shipments: raw.total_shipments,
        total_delayed: raw.total_delayed,
        orders_past_window: raw.orders_past_window,
        delayed_past_window: raw.delayed_past_window,
        carrier_averages: raw
            .carrier_averages
            .iter()
            .map(|row| CarrierCostRow {
                carrier: row.carrier.clone(),
                average_cost: row.average_cost,
            })
            .collect(),
        top_expensive: raw.top_expensive,
    }
}
