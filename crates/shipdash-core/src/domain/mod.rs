pub mod error;
pub mod paging;
pub mod query;
pub mod regression;
pub mod reshape;
pub mod source;
pub mod validation;

pub use error::{
    DomainError,
    DomainResult,
};
pub use paging::{
    page_window,
    page_window_with,
    PageToken,
};
pub use query::{
    FilterState,
    PageState,
    QuerySpec,
    SortDirection,
    SortField,
    ALL_SENTINEL,
};
pub use regression::{
    fit_line,
    RegressionLine,
};
pub use reshape::{
    average_cost_by_carrier,
    on_time_vs_delayed,
    overall_average_cost,
    priority_by_status,
    scatter_points,
    top_expensive,
    CarrierCost,
    OnTimeSplit,
    StatusPriorityCount,
    WeightCostPoint,
};
pub use source::ShipmentSource;
pub use validation::{
    validate_filter_value,
    validate_pagination,
};
