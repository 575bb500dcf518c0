// ABOUTME: Container listing trait for container runtimes.
// ABOUTME: Lists every container, stopped ones included.

use crate::types::ContainerId;
use async_trait::async_trait;

/// Container listing.
#[async_trait]
pub trait ContainerOps: Send + Sync {
    /// List all containers, including stopped ones, in the order the runtime returns them.
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError>;
}

/// Summary information about a container.
#[derive(Debug, Clone)]
pub struct ContainerSummary {
    /// Container ID.
    pub id: ContainerId,
    /// Image reference the container was created from.
    pub image: String,
    /// First assigned name, without the leading `/`.
    pub name: Option<String>,
    /// Lifecycle state (`running`, `exited`, `paused`, ...).
    pub state: String,
    /// Free-text status message.
    pub status: String,
}

impl ContainerSummary {
    /// Pick the display name from the raw names the runtime reports.
    pub fn name_from(names: &[String]) -> Option<String> {
        names
            .first()
            .map(|n| n.strip_prefix('/').unwrap_or(n).to_string())
            .filter(|n| !n.is_empty())
    }
}

/// Errors from container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("runtime reported a container state that could not be decoded: {0}")]
    UnknownState(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
