// ABOUTME: Runtime detection logic for the local system.
// ABOUTME: Honors DOCKER_HOST and CONTAINER_HOST, then checks Podman sockets before Docker.

use super::types::{Endpoint, RuntimeConfig, RuntimeInfo, RuntimeType};
use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked DOCKER_HOST, CONTAINER_HOST, Podman and Docker sockets)")]
    NoRuntimeFound,

    #[error("unsupported CONTAINER_HOST (only unix:// is supported): {0}")]
    UnsupportedHost(String),
}

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Detect the container runtime on the local system.
///
/// Detection order:
/// 1. `DOCKER_HOST`
/// 2. `CONTAINER_HOST` (unix sockets only)
/// 3. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 4. Rootful Podman socket (`/run/podman/podman.sock`)
/// 5. Docker socket (`/var/run/docker.sock`)
pub fn detect_local(config: &RuntimeConfig) -> Result<RuntimeInfo, DetectionError> {
    detect_with(config, |path| Path::new(path).exists())
}

/// Detection with an injectable socket probe.
pub fn detect_with(
    config: &RuntimeConfig,
    socket_exists: impl Fn(&str) -> bool,
) -> Result<RuntimeInfo, DetectionError> {
    // 1. DOCKER_HOST
    if let Some(host) = &config.docker_host {
        let runtime_type = if host.contains("podman") {
            RuntimeType::Podman
        } else {
            RuntimeType::Docker
        };
        return Ok(RuntimeInfo {
            runtime_type,
            endpoint: Endpoint::DockerHost(host.clone()),
        });
    }

    // 2. CONTAINER_HOST
    if let Some(host) = &config.container_host {
        let path = host
            .strip_prefix("unix://")
            .ok_or_else(|| DetectionError::UnsupportedHost(host.clone()))?;
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            endpoint: Endpoint::Socket(path.to_string()),
        });
    }

    // 3. Rootless Podman
    if let Some(uid) = &config.uid {
        let rootless_socket = format!("/run/user/{}/podman/podman.sock", uid);
        if socket_exists(&rootless_socket) {
            return Ok(RuntimeInfo {
                runtime_type: RuntimeType::Podman,
                endpoint: Endpoint::Socket(rootless_socket),
            });
        }
    }

    // 4. Rootful Podman
    if socket_exists(ROOTFUL_PODMAN) {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            endpoint: Endpoint::Socket(ROOTFUL_PODMAN.to_string()),
        });
    }

    // 5. Docker
    if socket_exists(DOCKER_SOCKET) {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Docker,
            endpoint: Endpoint::Socket(DOCKER_SOCKET.to_string()),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}
