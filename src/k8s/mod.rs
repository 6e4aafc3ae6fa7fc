pub mod client;
pub mod types;

pub use client::K8sClient;
pub use types::Hosts;

use crate::Result;
use async_trait::async_trait;

/// Source of the backend addresses registered for a service.
#[async_trait]
pub trait EndpointReader: Send + Sync {
    /// One lookup against the discovery records, no caching and no retries.
    async fn read(&self, namespace: &str, service: &str) -> Result<Hosts>;
}
