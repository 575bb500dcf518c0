// ABOUTME: Test support utilities.
// ABOUTME: Provides an in-memory runtime with scripted listings and failures.

use async_trait::async_trait;
use dockview::report::ResourceKind;
use dockview::runtime::{
    ContainerError, ContainerOps, ContainerSummary, ImageError, ImageOps, ImageSummary,
    NetworkError, NetworkOps, NetworkSummary, VolumeError, VolumeOps, VolumeSummary,
};
use dockview::types::{ContainerId, ImageId, NetworkId};
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("dockview=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Runtime double returning canned records, optionally failing one kind.
#[derive(Default)]
pub struct FakeRuntime {
    pub containers: Vec<ContainerSummary>,
    pub images: Vec<ImageSummary>,
    pub volumes: Vec<VolumeSummary>,
    pub networks: Vec<NetworkSummary>,
    pub fail: Option<ResourceKind>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeRuntime {
    pub fn failing(mut self, kind: ResourceKind) -> Self {
        self.fail = Some(kind);
        self
    }

    /// Number of list calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, kind: ResourceKind) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fail == Some(kind)
    }
}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ContainerError> {
        if self.record(ResourceKind::Containers) {
            return Err(ContainerError::Runtime("connection refused".to_string()));
        }
        Ok(self.containers.clone())
    }
}

#[async_trait]
impl ImageOps for FakeRuntime {
    async fn list_images(&self) -> Result<Vec<ImageSummary>, ImageError> {
        if self.record(ResourceKind::Images) {
            return Err(ImageError::Runtime("connection refused".to_string()));
        }
        Ok(self.images.clone())
    }
}

#[async_trait]
impl VolumeOps for FakeRuntime {
    async fn list_volumes(&self) -> Result<Vec<VolumeSummary>, VolumeError> {
        if self.record(ResourceKind::Volumes) {
            return Err(VolumeError::Runtime("connection refused".to_string()));
        }
        Ok(self.volumes.clone())
    }
}

#[async_trait]
impl NetworkOps for FakeRuntime {
    async fn list_networks(&self) -> Result<Vec<NetworkSummary>, NetworkError> {
        if self.record(ResourceKind::Networks) {
            return Err(NetworkError::Runtime("connection refused".to_string()));
        }
        Ok(self.networks.clone())
    }
}

#[allow(dead_code)]
pub fn container(id: &str, image: &str, name: Option<&str>, state: &str, status: &str) -> ContainerSummary {
    ContainerSummary {
        id: ContainerId::new(id),
        image: image.to_string(),
        name: name.map(str::to_string),
        state: state.to_string(),
        status: status.to_string(),
    }
}

#[allow(dead_code)]
pub fn image(id: &str, tags: &[&str]) -> ImageSummary {
    ImageSummary {
        id: ImageId::new(id),
        repo_tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[allow(dead_code)]
pub fn volume(driver: &str, name: &str, ref_count: Option<i64>) -> VolumeSummary {
    VolumeSummary {
        driver: driver.to_string(),
        name: name.to_string(),
        ref_count,
    }
}

#[allow(dead_code)]
pub fn network(id: &str, name: &str, driver: &str) -> NetworkSummary {
    NetworkSummary {
        id: NetworkId::new(id),
        name: name.to_string(),
        driver: driver.to_string(),
    }
}

/// A runtime populated with one record of each kind.
#[allow(dead_code)]
pub fn sample_runtime() -> FakeRuntime {
    FakeRuntime {
        containers: vec![container(
            "abcdef01239999999999",
            "nginx:latest",
            Some("web"),
            "running",
            "Up 2 hours",
        )],
        images: vec![image("sha256:abcdef1234567890", &["nginx:latest"])],
        volumes: vec![volume("local", "pgdata", Some(2))],
        networks: vec![network("f00dfeedc0ffee42", "bridge", "bridge")],
        ..Default::default()
    }
}
