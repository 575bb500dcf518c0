// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: The tool takes no arguments; clap supplies --help and --version.

use clap::Parser;

#[derive(Parser)]
#[command(name = "dockview")]
#[command(
    about = "Print containers, images, volumes and networks of the local Docker or Podman runtime"
)]
#[command(
    long_about = "Print containers, images, volumes and networks of the local Docker or Podman runtime.\n\n\
The runtime is located through DOCKER_HOST, CONTAINER_HOST, or the default Podman and Docker sockets. \
Set RUST_LOG=debug to see detection and listing details on stderr."
)]
#[command(version)]
pub struct Cli {}
