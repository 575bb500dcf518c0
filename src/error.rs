// ABOUTME: Application-wide error types for dockview.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::report::ResourceKind;
use crate::runtime::RuntimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("failed to list {kind}: {source}")]
    List {
        kind: ResourceKind,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a listing failure for `kind`.
    pub fn list(kind: ResourceKind, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::List {
            kind,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
