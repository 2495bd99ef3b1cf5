use serde::{
    Deserialize,
    Serialize,
};

use super::error::{
    DomainError,
    DomainResult,
};

/// The sentinel the presentation layer sends when a dropdown is reset.
/// Selecting it clears the field; it is never forwarded to the endpoint.
pub const ALL_SENTINEL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// The sortable record columns. The query builder only ever emits these
/// wire names, so arbitrary column strings cannot reach the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    ShipmentId,
    Origin,
    Destination,
    Carrier,
    DeliveryStatus,
    ServiceType,
    WeightKg,
    CostUsd,
    ShipmentDate,
    DeliveryDate,
    Priority,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::ShipmentId => "ShipmentID",
            SortField::Origin => "Origin",
            SortField::Destination => "Destination",
            SortField::Carrier => "Carrier",
            SortField::DeliveryStatus => "DeliveryStatus",
            SortField::ServiceType => "ServiceType",
            SortField::WeightKg => "WeightKG",
            SortField::CostUsd => "CostUSD",
            SortField::ShipmentDate => "ShipmentDate",
            SortField::DeliveryDate => "DeliveryDate",
            SortField::Priority => "Priority",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ShipmentID" => Ok(SortField::ShipmentId),
            "Origin" => Ok(SortField::Origin),
            "Destination" => Ok(SortField::Destination),
            "Carrier" => Ok(SortField::Carrier),
            "DeliveryStatus" => Ok(SortField::DeliveryStatus),
            "ServiceType" => Ok(SortField::ServiceType),
            "WeightKG" => Ok(SortField::WeightKg),
            "CostUSD" => Ok(SortField::CostUsd),
            "ShipmentDate" => Ok(SortField::ShipmentDate),
            "DeliveryDate" => Ok(SortField::DeliveryDate),
            "Priority" => Ok(SortField::Priority),
            _ => Err(format!("Unknown sort field: {}", s)),
        }
    }
}

/// User-selected filter and sort state. `None` means unset; an unset field
/// is omitted from the outbound query. Applying the `"All"` sentinel also
/// resolves to `None`, clearing any previously selected value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub carrier: Option<String>,
    pub status: Option<String>,
    pub service_type: Option<String>,
    pub sort_field: Option<SortField>,
    pub sort_direction: Option<SortDirection>,
}

impl FilterState {
    pub fn set_carrier(&mut self, value: Option<&str>) {
        self.carrier = normalize_selection(value);
    }

    pub fn set_status(&mut self, value: Option<&str>) {
        self.status = normalize_selection(value);
    }

    pub fn set_service_type(&mut self, value: Option<&str>) {
        self.service_type = normalize_selection(value);
    }

    /// Clearing the sort field always clears the direction with it; a
    /// direction on its own is meaningless.
    pub fn set_sort(&mut self, field: Option<SortField>, direction: Option<SortDirection>) {
        self.sort_field = field;
        self.sort_direction = if field.is_some() { direction } else { None };
    }

    pub fn is_unfiltered(&self) -> bool {
        self.carrier.is_none() && self.status.is_none() && self.service_type.is_none()
    }
}

fn normalize_selection(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() && v != ALL_SENTINEL => Some(v.to_string()),
        _ => None,
    }
}

/// Pagination state for the table view. `total_count` is authoritative
/// from the collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_count: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    /// Rejects a page change before it can be dispatched to the endpoint.
    pub fn validate_target(&self, page: usize) -> DomainResult<()> {
        if page == 0 {
            return Err(DomainError::InvalidPageRequest(
                "Page numbers are 1-indexed".to_string(),
            ));
        }

        let total_pages = self.total_pages();
        if self.total_count > 0 && page > total_pages {
            return Err(DomainError::InvalidPageRequest(format!(
                "Page {} is out of range (1..={})",
                page, total_pages
            )));
        }

        if self.total_count == 0 && page > 1 {
            return Err(DomainError::InvalidPageRequest(
                "No results to page through".to_string(),
            ));
        }

        Ok(())
    }
}

/// Canonical query description for the collection endpoint. Building it is
/// a pure transform: identical FilterState and PageState always produce an
/// identical spec, and identical specs always serialize to identical
/// parameter lists.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub carrier: Option<String>,
    pub status: Option<String>,
    pub service_type: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortDirection>,
    pub page: usize,
    pub limit: usize,
}

impl QuerySpec {
    pub fn build(filters: &FilterState, page: &PageState, default_direction: SortDirection) -> Self {
        let sort_by = filters.sort_field;
        let sort_order = sort_by.map(|_| filters.sort_direction.unwrap_or(default_direction));

        Self {
            carrier: sanitize(&filters.carrier),
            status: sanitize(&filters.status),
            service_type: sanitize(&filters.service_type),
            sort_by,
            sort_order,
            page: page.current_page,
            limit: page.page_size,
        }
    }

    /// Filter keys only, for the aggregate routes.
    pub fn filter_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(carrier) = &self.carrier {
            params.push(("carrier".to_string(), carrier.clone()));
        }
        if let Some(status) = &self.status {
            params.push(("status".to_string(), status.clone()));
        }
        if let Some(service_type) = &self.service_type {
            params.push(("serviceType".to_string(), service_type.clone()));
        }
        params
    }

    /// The full ordered parameter list for the paginated collection query.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = self.filter_params();
        if let Some(sort_by) = self.sort_by {
            params.push(("sortBy".to_string(), sort_by.as_str().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            params.push(("sortOrder".to_string(), sort_order.as_str().to_string()));
        }
        params.push(("page".to_string(), self.page.to_string()));
        params.push(("limit".to_string(), self.limit.to_string()));
        params
    }
}

fn sanitize(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_state(current_page: usize, page_size: usize, total_count: usize) -> PageState {
        PageState {
            current_page,
            page_size,
            total_count,
        }
    }

    #[test]
    fn test_unset_and_all_filters_emit_no_filter_keys() {
        let mut filters = FilterState::default();
        filters.set_carrier(Some(ALL_SENTINEL));
        filters.set_status(None);

        let spec = QuerySpec::build(&filters, &page_state(1, 10, 0), SortDirection::Desc);
        assert_eq!(spec.filter_params(), Vec::new());
        assert_eq!(
            spec.to_params(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_sentinel_clears_previous_selection() {
        let mut filters = FilterState::default();
        filters.set_carrier(Some("DHL"));
        assert_eq!(filters.carrier.as_deref(), Some("DHL"));

        filters.set_carrier(Some(ALL_SENTINEL));
        assert_eq!(filters.carrier, None);
    }

    #[test]
    fn test_page_and_limit_always_emitted() {
        let spec = QuerySpec::build(
            &FilterState::default(),
            &page_state(3, 25, 500),
            SortDirection::Desc,
        );
        let params = spec.to_params();
        assert!(params.contains(&("page".to_string(), "3".to_string())));
        assert!(params.contains(&("limit".to_string(), "25".to_string())));
    }

    #[test]
    fn test_sort_order_defaults_to_policy() {
        let mut filters = FilterState::default();
        filters.set_sort(Some(SortField::CostUsd), None);

        let spec = QuerySpec::build(&filters, &page_state(1, 10, 0), SortDirection::Desc);
        assert_eq!(spec.sort_order, Some(SortDirection::Desc));

        let spec = QuerySpec::build(&filters, &page_state(1, 10, 0), SortDirection::Asc);
        assert_eq!(spec.sort_order, Some(SortDirection::Asc));
    }

    #[test]
    fn test_explicit_sort_order_wins_over_policy() {
        let mut filters = FilterState::default();
        filters.set_sort(Some(SortField::WeightKg), Some(SortDirection::Asc));

        let spec = QuerySpec::build(&filters, &page_state(1, 10, 0), SortDirection::Desc);
        let params = spec.to_params();
        assert!(params.contains(&("sortBy".to_string(), "WeightKG".to_string())));
        assert!(params.contains(&("sortOrder".to_string(), "asc".to_string())));
    }

    #[test]
    fn test_clearing_sort_field_clears_direction() {
        let mut filters = FilterState::default();
        filters.set_sort(Some(SortField::Carrier), Some(SortDirection::Asc));
        filters.set_sort(None, Some(SortDirection::Asc));

        assert_eq!(filters.sort_field, None);
        assert_eq!(filters.sort_direction, None);
    }

    #[test]
    fn test_build_is_deterministic() {
        let mut filters = FilterState::default();
        filters.set_carrier(Some("FedEx"));
        filters.set_sort(Some(SortField::ShipmentDate), None);
        let page = page_state(2, 10, 100);

        let first = QuerySpec::build(&filters, &page, SortDirection::Desc);
        let second = QuerySpec::build(&filters, &page, SortDirection::Desc);
        assert_eq!(first, second);
        assert_eq!(first.to_params(), second.to_params());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(page_state(1, 10, 0).total_pages(), 0);
        assert_eq!(page_state(1, 10, 1).total_pages(), 1);
        assert_eq!(page_state(1, 10, 10).total_pages(), 1);
        assert_eq!(page_state(1, 10, 11).total_pages(), 2);
    }

    #[test]
    fn test_validate_target_rejects_out_of_range() {
        let page = page_state(1, 10, 30);
        assert!(page.validate_target(0).is_err());
        assert!(page.validate_target(1).is_ok());
        assert!(page.validate_target(3).is_ok());
        assert!(matches!(
            page.validate_target(4),
            Err(DomainError::InvalidPageRequest(_))
        ));
    }

    #[test]
    fn test_validate_target_empty_result_set() {
        let page = page_state(1, 10, 0);
        assert!(page.validate_target(1).is_ok());
        assert!(page.validate_target(2).is_err());
    }
}
