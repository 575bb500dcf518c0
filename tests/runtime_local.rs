// ABOUTME: Integration tests against a local Docker/Podman daemon.
// ABOUTME: Skipped when no runtime is reachable.

use dockview::report::{self, ResourceKind};
use dockview::runtime::{
    BollardRuntime, ContainerOps, ImageOps, NetworkOps, RuntimeConfig, RuntimeErrorKind,
    VolumeOps, connect_local, detect_local,
};

/// Get local runtime, skipping test if unavailable.
fn local_runtime() -> Option<BollardRuntime> {
    let info = detect_local(&RuntimeConfig::from_env()).ok()?;
    BollardRuntime::connect(&info).ok()
}

/// Skip test if no local runtime available.
macro_rules! require_runtime {
    () => {
        match local_runtime() {
            Some(rt) => rt,
            None => {
                eprintln!("Skipping test: no local container runtime found");
                return;
            }
        }
    };
}

#[tokio::test]
async fn lists_every_kind() {
    let runtime = require_runtime!();

    // A configured socket may still be dead; treat that like a missing runtime.
    let Ok(containers) = runtime.list_containers().await else {
        eprintln!("Skipping test: runtime socket not answering");
        return;
    };
    for c in &containers {
        assert!(!c.id.as_str().is_empty());
    }

    runtime.list_images().await.expect("should list images");
    runtime.list_volumes().await.expect("should list volumes");
    let networks = runtime.list_networks().await.expect("should list networks");
    assert!(
        !networks.is_empty(),
        "every runtime ships at least one default network"
    );
}

#[tokio::test]
async fn full_report_renders() {
    let runtime = require_runtime!();
    if runtime.list_containers().await.is_err() {
        eprintln!("Skipping test: runtime socket not answering");
        return;
    }

    let mut out = Vec::new();
    report::render_all(&runtime, &mut out)
        .await
        .expect("report should render");
    let output = String::from_utf8(out).unwrap();
    for kind in ResourceKind::ALL {
        for column in kind.columns() {
            assert!(output.contains(column), "missing column {column} for {kind}");
        }
    }
}

#[test]
fn connect_local_reports_missing_runtime() {
    temp_env::with_vars(
        [
            ("DOCKER_HOST", None::<&str>),
            ("CONTAINER_HOST", Some("tcp://127.0.0.1:1")),
        ],
        || {
            let err = connect_local().err().expect("tcp CONTAINER_HOST is unsupported");
            assert_eq!(err.kind(), RuntimeErrorKind::UnsupportedHost);
        },
    );
}
