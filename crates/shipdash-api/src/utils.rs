//! Common utilities for collection endpoint integrations

use std::time::Duration;

use crate::{
    ApiError,
    ApiResult,
};

/// Retry policy configuration
pub struct RetryPolicy {
    /// Maximum number of retry attempts
    pub max_retries: usize,
    /// Initial delay between retries
    pub initial_delay: Duration,
    /// Whether to use exponential backoff
    pub exponential_backoff: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            exponential_backoff: true,
        }
    }
}

impl RetryPolicy {
    /// Creates a new retry policy with custom settings
    pub fn new(max_retries: usize, initial_delay: Duration, exponential_backoff: bool) -> Self {
        Self {
            max_retries,
            initial_delay,
            exponential_backoff,
        }
    }

    /// Executes an operation with retry logic. Only network and endpoint
    /// errors are retried; malformed payloads and configuration errors are
    /// returned immediately.
    pub async fn retry<F, Fut, T>(&self, operation: F) -> ApiResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = ApiResult<T>>,
    {
        let mut delay = self.initial_delay;
        let mut last_error = None;

        for attempt in 0..self.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if attempt < self.max_retries - 1 => match &e {
                    ApiError::NetworkError(_) | ApiError::ApiError(_) => {
                        last_error = Some(e);
                        tokio::time::sleep(delay).await;
                        if self.exponential_backoff {
                            delay *= 2;
                        }
                        continue;
                    }
                    _ => return Err(e),
                },
                Err(e) => {
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::NetworkError("Max retries exceeded".to_string())))
    }
}
