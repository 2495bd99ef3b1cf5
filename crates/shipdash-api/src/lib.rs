//! Contract between the Shipdash core and the remote collection endpoint:
//! record and aggregate-row types, the boundary error taxonomy, and retry
//! utilities shared by endpoint integrations.

mod error;
mod types;
pub mod utils;

pub use error::{
    ApiError,
    ApiResult,
};
pub use types::{
    CarrierCostRow,
    CollectionPage,
    DashboardSummary,
    DeliveryStatus,
    Priority,
    ServiceType,
    ShipmentRecord,
    StatusPriorityRow,
    WeightCostRow,
    WindowCount,
};
