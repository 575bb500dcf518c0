// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::error::ConnectError;
use crate::runtime::traits::{
    ContainerError, ContainerOps, ContainerSummary, ImageError, ImageOps, ImageSummary,
    NetworkError, NetworkOps, NetworkSummary, VolumeError, VolumeOps, VolumeSummary,
};
use crate::runtime::types::{Endpoint, RuntimeInfo, RuntimeType};
use crate::types::{ContainerId, ImageId, NetworkId};
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::{
    ListContainersOptions, ListImagesOptions, ListNetworksOptions, ListVolumesOptions,
};
use tracing::debug;

/// Seconds bollard waits on a single API request.
const CLIENT_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_container_list_error(e: bollard::errors::Error) -> ContainerError {
    let message = e.to_string();
    // Podman reports transient "stopping"/"stopped" states bollard cannot deserialize.
    if message.contains("unknown variant `stopping`") || message.contains("unknown variant `stopped`")
    {
        debug!(%message, "container list contained an undecodable state");
        return ContainerError::UnknownState(message);
    }
    ContainerError::Runtime(message)
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime using detected runtime info.
    ///
    /// No request is made here; an unreachable endpoint surfaces on the first list call.
    pub fn connect(info: &RuntimeInfo) -> Result<Self, ConnectError> {
        let client = match &info.endpoint {
            Endpoint::DockerHost(_) => Docker::connect_with_local_defaults(),
            Endpoint::Socket(path) => {
                Docker::connect_with_unix(path, CLIENT_TIMEOUT_SECS, bollard::API_DEFAULT_VERSION)
            }
        }
        .map_err(|e| ConnectError::ConnectionFailed(e.to_string()))?;

        Ok(Self::new(client, info.runtime_type))
    }

    /// The runtime type this client talks to.
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }
}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError> {
        let opts = ListContainersOptions {
            all: true,
            ..Default::default()
        };

        let containers = self
            .client
            .list_containers(Some(opts))
            .await
            .map_err(map_container_list_error)?;
        debug!(count = containers.len(), "listed containers");

        Ok(containers
            .into_iter()
            .map(|c| ContainerSummary {
                id: ContainerId::new(c.id.unwrap_or_default()),
                image: c.image.unwrap_or_default(),
                name: ContainerSummary::name_from(&c.names.unwrap_or_default()),
                state: c.state.map(|s| s.to_string()).unwrap_or_default(),
                status: c.status.unwrap_or_default(),
            })
            .collect())
    }
}

#[async_trait]
impl ImageOps for BollardRuntime {
    async fn list_images(&self) -> Result<Vec<ImageSummary>, ImageError> {
        let images = self
            .client
            .list_images(Some(ListImagesOptions::default()))
            .await
            .map_err(|e| ImageError::Runtime(e.to_string()))?;
        debug!(count = images.len(), "listed images");

        Ok(images
            .into_iter()
            .map(|i| ImageSummary {
                id: ImageId::new(i.id),
                repo_tags: i.repo_tags,
            })
            .collect())
    }
}

#[async_trait]
impl VolumeOps for BollardRuntime {
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError> {
        let response = self
            .client
            .list_volumes(Some(ListVolumesOptions::default()))
            .await
            .map_err(|e| VolumeError::Runtime(e.to_string()))?;
        let volumes = response.volumes.unwrap_or_default();
        debug!(count = volumes.len(), "listed volumes");

        Ok(volumes
            .into_iter()
            .map(|v| VolumeSummary {
                driver: v.driver,
                name: v.name,
                ref_count: v.usage_data.map(|u| u.ref_count),
            })
            .collect())
    }
}

#[async_trait]
impl NetworkOps for BollardRuntime {
    async fn list_networks(&self) -> Result<Vec<NetworkSummary>, NetworkError> {
        let networks = self
            .client
            .list_networks(Some(ListNetworksOptions::default()))
            .await
            .map_err(|e| NetworkError::Runtime(e.to_string()))?;
        debug!(count = networks.len(), "listed networks");

        Ok(networks
            .into_iter()
            .map(|n| NetworkSummary {
                id: NetworkId::new(n.id.unwrap_or_default()),
                name: n.name.unwrap_or_default(),
                driver: n.driver.unwrap_or_default(),
            })
            .collect())
    }
}
