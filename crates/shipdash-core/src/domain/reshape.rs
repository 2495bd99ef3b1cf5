//! Pure transforms from flat aggregate rows into the grouped shapes the
//! charts consume. None of these functions fail: absent or malformed input
//! degrades to an empty container.

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use shipdash_api::{
    CarrierCostRow,
    ShipmentRecord,
    StatusPriorityRow,
    WeightCostRow,
};

/// Statuses in the order the charts render them; anything else is appended
/// after these, in first-seen order.
pub const CANONICAL_STATUS_ORDER: [&str; 4] = ["Delivered", "Delayed", "In Transit", "Cancelled"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierCost {
    pub carrier: String,
    pub average_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPriorityCount {
    pub status: String,
    #[serde(rename = "High")]
    pub high: u64,
    #[serde(rename = "Medium")]
    pub medium: u64,
    #[serde(rename = "Low")]
    pub low: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnTimeSplit {
    pub on_time_count: u64,
    pub delayed_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightCostPoint {
    pub weight: f64,
    pub cost: f64,
}

/// One entry per distinct carrier, in first-appearance order. The endpoint
/// pre-aggregates (one row per carrier); a duplicate carrier row replaces
/// the earlier value rather than being averaged again, since re-averaging
/// pre-aggregated rows is the endpoint's responsibility, not this layer's.
pub fn average_cost_by_carrier(rows: Option<&[CarrierCostRow]>) -> Vec<CarrierCost> {
    let Some(rows) = rows else {
        return Vec::new();
    };

    let mut by_carrier: IndexMap<&str, f64> = IndexMap::new();
    for row in rows {
        by_carrier.insert(row.carrier.as_str(), row.average_cost);
    }

    by_carrier
        .into_iter()
        .map(|(carrier, average_cost)| CarrierCost {
            carrier: carrier.to_string(),
            average_cost,
        })
        .collect()
}

/// Pivots status x priority count cells into one row per status with High,
/// Medium, and Low columns. Priorities outside the known three are dropped;
/// statuses outside the canonical order are kept and appended after it.
pub fn priority_by_status(rows: Option<&[StatusPriorityRow]>) -> Vec<StatusPriorityCount> {
    let Some(rows) = rows else {
        return Vec::new();
    };

    let mut groups: IndexMap<&str, StatusPriorityCount> = IndexMap::new();
    for row in rows {
        let entry = groups
            .entry(row.status.as_str())
            .or_insert_with(|| StatusPriorityCount {
                status: row.status.clone(),
                high: 0,
                medium: 0,
                low: 0,
            });
        match row.priority.as_str() {
            "High" => entry.high += row.count,
            "Medium" => entry.medium += row.count,
            "Low" => entry.low += row.count,
            _ => {}
        }
    }

    let mut ordered = Vec::with_capacity(groups.len());
    for status in CANONICAL_STATUS_ORDER {
        if let Some(group) = groups.shift_remove(status) {
            ordered.push(group);
        }
    }
    ordered.extend(groups.into_values());
    ordered
}

/// Splits a total into on-time and delayed halves; inconsistent inputs
/// (delayed exceeding total) clamp the on-time side to zero.
pub fn on_time_vs_delayed(total: u64, delayed: u64) -> OnTimeSplit {
    OnTimeSplit {
        on_time_count: total.saturating_sub(delayed),
        delayed_count: delayed,
    }
}

pub fn scatter_points(rows: Option<&[WeightCostRow]>) -> Vec<WeightCostPoint> {
    let Some(rows) = rows else {
        return Vec::new();
    };

    rows.iter()
        .map(|row| WeightCostPoint {
            weight: row.weight_kg,
            cost: row.cost_usd,
        })
        .collect()
}

/// Mean of the per-carrier averages, the headline KPI on the overview.
pub fn overall_average_cost(rows: &[CarrierCost]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }

    let total: f64 = rows.iter().map(|row| row.average_cost).sum();
    Some(total / rows.len() as f64)
}

/// The `n` most expensive shipments, descending by cost. Ties keep their
/// input order.
pub fn top_expensive(records: &[ShipmentRecord], n: usize) -> Vec<ShipmentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.cost_usd.total_cmp(&a.cost_usd));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carrier_row(carrier: &str, average_cost: f64) -> CarrierCostRow {
        CarrierCostRow {
            carrier: carrier.to_string(),
            average_cost,
        }
    }

    fn priority_row(status: &str, priority: &str, count: u64) -> StatusPriorityRow {
        StatusPriorityRow {
            status: status.to_string(),
            priority: priority.to_string(),
            count,
        }
    }

    #[test]
    fn test_average_cost_none_input_is_empty() {
        assert!(average_cost_by_carrier(None).is_empty());
        assert!(average_cost_by_carrier(Some(&[])).is_empty());
    }

    #[test]
    fn test_average_cost_keeps_first_seen_order() {
        let rows = vec![
            carrier_row("UPS", 50.0),
            carrier_row("DHL", 80.0),
            carrier_row("FedEx", 65.0),
        ];

        let costs = average_cost_by_carrier(Some(&rows));
        let carriers: Vec<&str> = costs.iter().map(|c| c.carrier.as_str()).collect();
        assert_eq!(carriers, vec!["UPS", "DHL", "FedEx"]);
    }

    #[test]
    fn test_average_cost_merges_duplicate_carriers() {
        let rows = vec![carrier_row("DHL", 80.0), carrier_row("DHL", 90.0)];

        let costs = average_cost_by_carrier(Some(&rows));
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0].average_cost, 90.0);
    }

    #[test]
    fn test_priority_by_status_empty() {
        assert_eq!(priority_by_status(None), Vec::new());
        assert_eq!(priority_by_status(Some(&[])), Vec::new());
    }

    #[test]
    fn test_priority_by_status_accumulates_counts() {
        let rows = vec![
            priority_row("Delivered", "High", 3),
            priority_row("Delivered", "Low", 2),
            priority_row("Delivered", "High", 1),
        ];

        let groups = priority_by_status(Some(&rows));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].high, 4);
        assert_eq!(groups[0].medium, 0);
        assert_eq!(groups[0].low, 2);
    }

    #[test]
    fn test_priority_by_status_canonical_order() {
        let rows = vec![
            priority_row("Cancelled", "High", 1),
            priority_row("In Transit", "Medium", 2),
            priority_row("Delivered", "Low", 3),
            priority_row("Delayed", "High", 4),
        ];

        let groups = priority_by_status(Some(&rows));
        let statuses: Vec<&str> = groups.iter().map(|g| g.status.as_str()).collect();
        assert_eq!(
            statuses,
            vec!["Delivered", "Delayed", "In Transit", "Cancelled"]
        );
    }

    #[test]
    fn test_priority_by_status_unknown_statuses_appended() {
        let rows = vec![
            priority_row("Lost", "High", 1),
            priority_row("Delivered", "Low", 2),
            priority_row("Held", "Medium", 3),
        ];

        let groups = priority_by_status(Some(&rows));
        let statuses: Vec<&str> = groups.iter().map(|g| g.status.as_str()).collect();
        assert_eq!(statuses, vec!["Delivered", "Lost", "Held"]);
    }

    #[test]
    fn test_priority_by_status_unknown_priority_dropped() {
        let rows = vec![
            priority_row("Pending", "Urgent", 9),
            priority_row("Pending", "High", 1),
        ];

        let groups = priority_by_status(Some(&rows));
        assert_eq!(groups[0].high, 1);
        assert_eq!(groups[0].medium + groups[0].low, 0);
    }

    #[test]
    fn test_on_time_vs_delayed() {
        assert_eq!(
            on_time_vs_delayed(10, 3),
            OnTimeSplit {
                on_time_count: 7,
                delayed_count: 3,
            }
        );
    }

    #[test]
    fn test_on_time_vs_delayed_never_negative() {
        assert_eq!(
            on_time_vs_delayed(5, 8),
            OnTimeSplit {
                on_time_count: 0,
                delayed_count: 8,
            }
        );
    }

    #[test]
    fn test_overall_average_cost() {
        assert_eq!(overall_average_cost(&[]), None);

        let costs = vec![
            CarrierCost {
                carrier: "DHL".to_string(),
                average_cost: 100.0,
            },
            CarrierCost {
                carrier: "UPS".to_string(),
                average_cost: 50.0,
            },
        ];
        assert_eq!(overall_average_cost(&costs), Some(75.0));
    }

    #[test]
    fn test_scatter_points_none_is_empty() {
        assert!(scatter_points(None).is_empty());
    }

    #[test]
    fn test_top_expensive_sorts_descending_and_truncates() {
        let record = |id: &str, cost: f64| -> ShipmentRecord {
            serde_json::from_value(serde_json::json!({
                "ShipmentID": id,
                "Origin": "Oslo",
                "Destination": "Bergen",
                "Carrier": "PostNord",
                "DeliveryStatus": "Delivered",
                "ServiceType": "Standard",
                "WeightKG": 1.0,
                "CostUSD": cost,
                "ShipmentDate": "2024-01-01T00:00:00Z",
                "Priority": "Low"
            }))
            .unwrap()
        };

        let records = vec![
            record("A", 10.0),
            record("B", 99.0),
            record("C", 50.0),
            record("D", 75.0),
        ];

        let top = top_expensive(&records, 2);
        let ids: Vec<&str> = top.iter().map(|r| r.shipment_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "D"]);
    }

    #[test]
    fn test_carrier_cost_serializes_chart_keys() {
        let cost = CarrierCost {
            carrier: "DHL".to_string(),
            average_cost: 99.5,
        };
        let json = serde_json::to_value(&cost).unwrap();
        assert_eq!(json["carrier"], "DHL");
        assert_eq!(json["averageCost"], 99.5);
    }

    #[test]
    fn test_status_priority_count_serializes_chart_keys() {
        let group = StatusPriorityCount {
            status: "Delivered".to_string(),
            high: 1,
            medium: 2,
            low: 3,
        };
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["status"], "Delivered");
        assert_eq!(json["High"], 1);
        assert_eq!(json["Medium"], 2);
        assert_eq!(json["Low"], 3);
    }
}
