// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Unifies detection and connection errors for programmatic handling.

use snafu::Snafu;

use super::detection::DetectionError;

/// Failure to build a client for a detected endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// Unified runtime error for detection and connection failures.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RuntimeError {
    #[snafu(display("runtime detection failed: {source}"))]
    Detection { source: DetectionError },

    #[snafu(display("runtime connection failed: {source}"))]
    Connection { source: ConnectError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// No container runtime found on the system.
    NoRuntimeFound,
    /// The configured host uses a transport we cannot speak.
    UnsupportedHost,
    /// Failed to build a client for the runtime endpoint.
    ConnectionFailed,
}

impl RuntimeError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::Detection { source } => match source {
                DetectionError::NoRuntimeFound => RuntimeErrorKind::NoRuntimeFound,
                DetectionError::UnsupportedHost(_) => RuntimeErrorKind::UnsupportedHost,
            },
            RuntimeError::Connection { .. } => RuntimeErrorKind::ConnectionFailed,
        }
    }

    /// Suggested fix to show alongside the error, if there is an obvious one.
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind() {
            RuntimeErrorKind::NoRuntimeFound => {
                Some("start Docker or Podman, or set DOCKER_HOST to the runtime's API endpoint")
            }
            RuntimeErrorKind::UnsupportedHost => {
                Some("point CONTAINER_HOST at a unix:// socket, or set DOCKER_HOST instead")
            }
            RuntimeErrorKind::ConnectionFailed => None,
        }
    }
}

impl From<DetectionError> for RuntimeError {
    fn from(source: DetectionError) -> Self {
        RuntimeError::Detection { source }
    }
}

impl From<ConnectError> for RuntimeError {
    fn from(source: ConnectError) -> Self {
        RuntimeError::Connection { source }
    }
}
