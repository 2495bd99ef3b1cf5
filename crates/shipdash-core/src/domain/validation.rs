use super::{
    DomainError,
    DomainResult,
};

const MAX_FILTER_VALUE_LENGTH: usize = 128;

/// Filter values come from dropdowns, but the endpoint interpolates them
/// into its query language, so anything user-shaped is bounded and checked
/// before it leaves this layer.
pub fn validate_filter_value(field: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::InvalidConfig(format!(
            "Filter value for '{}' cannot be empty",
            field
        )));
    }

    if value.len() > MAX_FILTER_VALUE_LENGTH {
        return Err(DomainError::InvalidConfig(format!(
            "Filter value for '{}' exceeds maximum length of {} characters",
            field, MAX_FILTER_VALUE_LENGTH
        )));
    }

    if value.chars().any(|c| c.is_control()) {
        return Err(DomainError::InvalidConfig(format!(
            "Filter value for '{}' contains control characters",
            field
        )));
    }

    Ok(())
}

pub fn validate_pagination(page: usize, page_size: usize) -> DomainResult<()> {
    if page == 0 {
        return Err(DomainError::InvalidPageRequest(
            "Page number must be at least 1".to_string(),
        ));
    }

    if page_size == 0 {
        return Err(DomainError::InvalidConfig(
            "Page size must be at least 1".to_string(),
        ));
    }

    if page_size > 1000 {
        return Err(DomainError::InvalidConfig(
            "Page size cannot exceed 1000".to_string(),
        ));
    }

    Ok(())
}
