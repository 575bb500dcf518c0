// ABOUTME: Network listing trait for container runtimes.
// ABOUTME: Lists networks with their driver.

use crate::types::NetworkId;
use async_trait::async_trait;

/// Network listing.
#[async_trait]
pub trait NetworkOps: Send + Sync {
    /// List networks in the order the runtime returns them.
    async fn list_networks(&self) -> Result<Vec<NetworkSummary>, NetworkError>;
}

/// Summary information about a network.
#[derive(Debug, Clone)]
pub struct NetworkSummary {
    pub id: NetworkId,
    pub name: String,
    pub driver: String,
}

/// Errors from network operations.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("runtime error: {0}")]
    Runtime(String),
}
