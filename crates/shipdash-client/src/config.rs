use shipdash_api::{
    ApiError,
    ApiResult,
};

pub fn normalize_base_url(url: &str) -> ApiResult<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidConfig(
            "Collection endpoint base URL cannot be empty".to_string(),
        ));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
