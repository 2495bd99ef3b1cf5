use serde::{
    Deserialize,
    Serialize,
};

use crate::domain::paging::{
    DEFAULT_EDGE_THRESHOLD,
    DEFAULT_MAX_VISIBLE,
};
use crate::domain::SortDirection;

pub(super) const DEFAULT_PAGE_SIZE: usize = 10;

pub(super) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub(super) const DEFAULT_BATCH_TIMEOUT_SECS: u64 = 60;

pub(super) const DEFAULT_TRAILING_WINDOW_DAYS: u32 = 90;

/// Dashboard configuration. Everything except the endpoint base URL has a
/// sensible default, so a one-line TOML file is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub base_url: String,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Direction applied when a sort field is chosen without an explicit
    /// direction. A policy rather than a constant: deployments disagree on
    /// what "sorted by default" should mean.
    #[serde(default)]
    pub default_sort_direction: SortDirection,

    #[serde(default = "default_window_max_visible")]
    pub window_max_visible: usize,

    #[serde(default = "default_window_edge_threshold")]
    pub window_edge_threshold: usize,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_batch_timeout_secs")]
    pub batch_timeout_secs: u64,

    #[serde(default = "default_trailing_window_days")]
    pub trailing_window_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            default_sort_direction: SortDirection::default(),
            window_max_visible: DEFAULT_MAX_VISIBLE,
            window_edge_threshold: DEFAULT_EDGE_THRESHOLD,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            batch_timeout_secs: DEFAULT_BATCH_TIMEOUT_SECS,
            trailing_window_days: DEFAULT_TRAILING_WINDOW_DAYS,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must be set".to_string());
        }
        if self.default_page_size == 0 {
            return Err("default_page_size must be at least 1".to_string());
        }
        if self.window_max_visible == 0 {
            return Err("window_max_visible must be at least 1".to_string());
        }
        if self.request_timeout_secs == 0 || self.batch_timeout_secs == 0 {
            return Err("Timeouts must be at least 1 second".to_string());
        }
        Ok(())
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_window_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_window_edge_threshold() -> usize {
    DEFAULT_EDGE_THRESHOLD
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_batch_timeout_secs() -> u64 {
    DEFAULT_BATCH_TIMEOUT_SECS
}

fn default_trailing_window_days() -> u32 {
    DEFAULT_TRAILING_WINDOW_DAYS
}
