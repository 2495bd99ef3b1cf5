use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use reqwest::Client;

use crate::domain::{
    DomainError,
    DomainResult,
};

/// Builds and caches pooled HTTP clients, one per base URL.
pub struct HttpClientManager {
    request_timeout: Duration,
    default_client: Arc<Client>,
    custom_clients: DashMap<String, Arc<Client>>,
}

impl HttpClientManager {
    pub fn new(request_timeout: Duration) -> DomainResult<Self> {
        let default_client = Self::create_pooled_client(request_timeout)?;
        Ok(Self {
            request_timeout,
            default_client: Arc::new(default_client),
            custom_clients: DashMap::new(),
        })
    }

    pub fn default_client(&self) -> Arc<Client> {
        Arc::clone(&self.default_client)
    }

    pub fn client_for_url(&self, base_url: &str) -> DomainResult<Arc<Client>> {
        if let Some(client) = self.custom_clients.get(base_url) {
            return Ok(Arc::clone(client.value()));
        }

        let client = Self::create_pooled_client(self.request_timeout)?;
        let client = Arc::new(client);
        self.custom_clients
            .insert(base_url.to_string(), Arc::clone(&client));
        Ok(client)
    }

    fn create_pooled_client(request_timeout: Duration) -> DomainResult<Client> {
        let pool_size = std::env::var("SHIPDASH_HTTP_POOL_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(pool_size)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to create HTTP client: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> HttpClientManager {
        HttpClientManager::new(Duration::from_secs(30)).unwrap()
    }

    #[test]
    fn test_http_client_manager_creation() {
        let manager = manager();
        let client = manager.default_client();
        assert!(Arc::strong_count(&client) >= 1);
    }

    #[test]
    fn test_client_caching() {
        let manager = manager();

        let client1 = manager.client_for_url("http://localhost:5000").unwrap();
        let client2 = manager.client_for_url("http://localhost:5000").unwrap();

        assert!(Arc::ptr_eq(&client1, &client2));
    }

    #[test]
    fn test_different_urls_different_clients() {
        let manager = manager();

        let client1 = manager.client_for_url("http://localhost:5000").unwrap();
        let client2 = manager.client_for_url("https://api.example.com").unwrap();

        assert!(!Arc::ptr_eq(&client1, &client2));
    }

    #[test]
    fn test_default_client_separate_from_custom() {
        let manager = manager();

        let default_client = manager.default_client();
        let custom_client = manager.client_for_url("http://localhost:5000").unwrap();

        assert!(!Arc::ptr_eq(&default_client, &custom_client));
    }
}
