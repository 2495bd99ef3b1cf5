use shipdash_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Collection endpoint error: {0}")]
    SourceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<ApiError> for DomainError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NetworkError(msg) => DomainError::NetworkError(msg),
            ApiError::MalformedResponse(msg) => DomainError::MalformedResponse(msg),
            ApiError::ApiError(msg) => DomainError::SourceError(msg),
            ApiError::InvalidConfig(msg) => DomainError::InvalidConfig(msg),
            ApiError::Internal(msg) => DomainError::InternalError(msg),
        }
    }
}
