use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Delivered,
    #[serde(rename = "In Transit")]
    InTransit,
    Delayed,
    Cancelled,
    Pending,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::InTransit => "In Transit",
            DeliveryStatus::Delayed => "Delayed",
            DeliveryStatus::Cancelled => "Cancelled",
            DeliveryStatus::Pending => "Pending",
        }
    }
}

impl std::str::FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Delivered" => Ok(DeliveryStatus::Delivered),
            "In Transit" => Ok(DeliveryStatus::InTransit),
            "Delayed" => Ok(DeliveryStatus::Delayed),
            "Cancelled" => Ok(DeliveryStatus::Cancelled),
            "Pending" => Ok(DeliveryStatus::Pending),
            _ => Err(format!("Unknown delivery status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Standard,
    Express,
    Economy,
    #[serde(rename = "Same Day")]
    SameDay,
    Overnight,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Standard => "Standard",
            ServiceType::Express => "Express",
            ServiceType::Economy => "Economy",
            ServiceType::SameDay => "Same Day",
            ServiceType::Overnight => "Overnight",
        }
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(ServiceType::Standard),
            "Express" => Ok(ServiceType::Express),
            "Economy" => Ok(ServiceType::Economy),
            "Same Day" => Ok(ServiceType::SameDay),
            "Overnight" => Ok(ServiceType::Overnight),
            _ => Err(format!("Unknown service type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// One shipment row as served by the collection endpoint. Field names on the
/// wire are PascalCase; the serde renames keep serialization identical to
/// what the endpoint emits, so view-models round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecord {
    #[serde(rename = "ShipmentID")]
    pub shipment_id: String,
    #[serde(rename = "Origin")]
    pub origin: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Carrier")]
    pub carrier: String,
    #[serde(rename = "DeliveryStatus")]
    pub status: DeliveryStatus,
    #[serde(rename = "ServiceType")]
    pub service_type: ServiceType,
    #[serde(rename = "WeightKG")]
    pub weight_kg: f64,
    #[serde(rename = "CostUSD")]
    pub cost_usd: f64,
    #[serde(rename = "ShipmentDate")]
    pub shipment_date: DateTime<Utc>,
    #[serde(rename = "DeliveryDate", default)]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(rename = "Priority")]
    pub priority: Priority,
}

/// Response envelope for the paginated `/collection` query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionPage {
    pub items: Vec<ShipmentRecord>,
    pub total_count: usize,
}

impl CollectionPage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Pre-aggregated per-carrier average, one row per carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierCostRow {
    pub carrier: String,
    pub average_cost: f64,
}

/// One cell of the status x priority count matrix. Status and priority stay
/// strings here: aggregate rows tolerate values outside the known enums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPriorityRow {
    pub status: String,
    pub priority: String,
    pub count: u64,
}

/// A (weight, cost) pair for the correlation scatter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightCostRow {
    pub weight_kg: f64,
    pub cost_usd: f64,
}

/// A single count over a trailing time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCount {
    pub count: u64,
}

/// The unified summary the endpoint assembles for the overview page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_shipments: u64,
    pub total_delayed: u64,
    pub orders_past_window: u64,
    pub delayed_past_window: u64,
    pub carrier_averages: Vec<CarrierCostRow>,
    pub top_expensive: Vec<ShipmentRecord>,
}

impl DashboardSummary {
    pub fn empty() -> Self {
        Self {
            total_shipments: 0,
            total_delayed: 0,
            orders_past_window: 0,
            delayed_past_window: 0,
            carrier_averages: Vec::new(),
            top_expensive: Vec::new(),
        }
    }
}
