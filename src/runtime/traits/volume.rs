// ABOUTME: Volume listing trait for container runtimes.

use async_trait::async_trait;

/// Volume listing.
#[async_trait]
pub trait VolumeOps: Send + Sync {
    /// List volumes in the order the runtime returns them.
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError>;
}

/// Summary information about a volume.
#[derive(Debug, Clone)]
pub struct VolumeSummary {
    pub driver: String,
    pub name: String,
    /// Number of containers referencing the volume, when the runtime reports usage data.
    pub ref_count: Option<i64>,
}

/// Errors from volume operations.
#[derive(Debug, thiserror::Error)]
pub enum VolumeError {
    #[error("runtime error: {0}")]
    Runtime(String),
}
