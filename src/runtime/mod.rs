// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detects the local endpoint and exposes the listing traits.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local, detect_with};
pub use error::{ConnectError, RuntimeError, RuntimeErrorKind};
pub use traits::*;
pub use types::{Endpoint, RuntimeConfig, RuntimeInfo, RuntimeType};

use tracing::debug;

/// Detect the local runtime from the environment and build a client for it.
pub fn connect_local() -> Result<BollardRuntime, RuntimeError> {
    let config = RuntimeConfig::from_env();
    let info = detect_local(&config)?;
    debug!(runtime = %info.runtime_type, endpoint = %info.endpoint, "detected container runtime");
    Ok(BollardRuntime::connect(&info)?)
}
