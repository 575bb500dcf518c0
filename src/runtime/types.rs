// ABOUTME: Runtime type definitions for Docker and Podman.
// ABOUTME: Includes RuntimeType, Endpoint and the detected RuntimeInfo.

/// The container runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeType {
    Docker,
    Podman,
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeType::Docker => write!(f, "docker"),
            RuntimeType::Podman => write!(f, "podman"),
        }
    }
}

/// Where the runtime API is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `DOCKER_HOST` is set; the client resolves it itself.
    DockerHost(String),
    /// Unix socket path.
    Socket(String),
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::DockerHost(host) => write!(f, "{host} (DOCKER_HOST)"),
            Endpoint::Socket(path) => write!(f, "unix://{path}"),
        }
    }
}

/// Detected runtime information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// The type of runtime detected.
    pub runtime_type: RuntimeType,
    /// How to reach the runtime API.
    pub endpoint: Endpoint,
}

/// Environment-provided overrides for runtime discovery.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Value of `DOCKER_HOST`.
    pub docker_host: Option<String>,
    /// Value of `CONTAINER_HOST` (Podman's equivalent).
    pub container_host: Option<String>,
    /// Current user ID, used to locate the rootless Podman socket.
    pub uid: Option<String>,
}

impl RuntimeConfig {
    /// Read discovery settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            docker_host: non_empty_var("DOCKER_HOST"),
            container_host: non_empty_var("CONTAINER_HOST"),
            uid: non_empty_var("UID").or_else(uid_from_proc),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn uid_from_proc() -> Option<String> {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|s| {
            s.lines()
                .find(|l| l.starts_with("Uid:"))
                .and_then(|l| l.split_whitespace().nth(1))
                .map(|s| s.to_string())
        })
}
