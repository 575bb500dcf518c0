// ABOUTME: Composable listing traits for container runtimes.
// ABOUTME: Defines ContainerOps, ImageOps, VolumeOps, NetworkOps and the Inventory bundle.

mod container;
mod image;
mod network;
mod volume;

pub use container::{ContainerError, ContainerOps, ContainerSummary};
pub use image::{ImageError, ImageOps, ImageSummary};
pub use network::{NetworkError, NetworkOps, NetworkSummary};
pub use volume::{VolumeError, VolumeOps, VolumeSummary};

/// Everything the report needs from a runtime.
///
/// Implemented automatically for any type providing all four listing traits.
pub trait Inventory: ContainerOps + ImageOps + VolumeOps + NetworkOps {}

impl<T> Inventory for T where T: ContainerOps + ImageOps + VolumeOps + NetworkOps {}
