use async_trait::async_trait;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CoreEvent {
    FiltersChanged,

    PageChanged {
        page: usize,
    },

    TableUpdated {
        total_count: usize,
        timestamp: i64,
    },

    OverviewUpdated {
        timestamp: i64,
    },

    FetchFailed {
        error: String,
    },
}

impl CoreEvent {
    pub fn event_name(&self) -> &'static str {
        match self {
            CoreEvent::FiltersChanged => "filters-changed",
            CoreEvent::PageChanged { .. } => "page-changed",
            CoreEvent::TableUpdated { .. } => "table-updated",
            CoreEvent::OverviewUpdated { .. } => "overview-updated",
            CoreEvent::FetchFailed { .. } => "fetch-failed",
        }
    }

    pub fn to_json_payload(&self) -> serde_json::Value {
        match self {
            CoreEvent::FiltersChanged => serde_json::json!({}),
            CoreEvent::PageChanged { page } => serde_json::json!(page),
            CoreEvent::TableUpdated {
                total_count,
                timestamp,
            } => serde_json::json!({
                "totalCount": total_count,
                "timestamp": timestamp,
            }),
            CoreEvent::OverviewUpdated { timestamp } => serde_json::json!({
                "timestamp": timestamp,
            }),
            CoreEvent::FetchFailed { error } => serde_json::json!(error),
        }
    }
}

#[async_trait]
pub trait EventBus: Send + Sync {
    async fn emit(&self, event: CoreEvent);
}

pub struct NoOpEventBus;

#[async_trait]
impl EventBus for NoOpEventBus {
    async fn emit(&self, _event: CoreEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(CoreEvent::FiltersChanged.event_name(), "filters-changed");
        assert_eq!(
            CoreEvent::FetchFailed {
                error: "boom".to_string()
            }
            .event_name(),
            "fetch-failed"
        );
    }

    #[test]
    fn test_event_serialization() {
        let event = CoreEvent::TableUpdated {
            total_count: 42,
            timestamp: 1700000000000,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("TableUpdated"));
        assert!(json.contains("42"));
    }

    #[test]
    fn test_json_payload_uses_camel_case_keys() {
        let payload = CoreEvent::TableUpdated {
            total_count: 7,
            timestamp: 1,
        }
        .to_json_payload();
        assert_eq!(payload["totalCount"], 7);
    }
}
