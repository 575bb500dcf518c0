// ABOUTME: Type-safe identifiers for runtime resources.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;

pub use id::{ContainerId, DIGEST_PREFIX, Id, ImageId, NetworkId};
