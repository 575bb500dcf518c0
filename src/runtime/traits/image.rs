// ABOUTME: Image listing trait for container runtimes.
// ABOUTME: Lists local images with their repository tags.

use crate::types::ImageId;
use async_trait::async_trait;

/// Image listing.
#[async_trait]
pub trait ImageOps: Send + Sync {
    /// List local images in the order the runtime returns them.
    async fn list_images(&self) -> Result<Vec<ImageSummary>, ImageError>;
}

/// Summary information about an image.
#[derive(Debug, Clone)]
pub struct ImageSummary {
    /// Content-addressed image ID (`sha256:...`).
    pub id: ImageId,
    /// `repository:tag` labels. Empty for dangling images.
    pub repo_tags: Vec<String>,
}

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("runtime error: {0}")]
    Runtime(String),
}
