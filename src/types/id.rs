// ABOUTME: Phantom-typed identifiers for compile-time type safety.
// ABOUTME: Also provides the short display forms used in report tables.

use std::marker::PhantomData;

/// Scheme prefix the runtime puts in front of content-addressed IDs.
pub const DIGEST_PREFIX: &str = "sha256:";

/// Marker types for phantom type parameters.
/// Using empty enums prevents instantiation and requires no trait bounds.
pub enum ContainerMarker {}
pub enum NetworkMarker {}
pub enum ImageMarker {}

/// A type-safe identifier that prevents accidental mixing of different ID types.
///
/// Using phantom types, this ensures you can't accidentally pass a `ContainerId`
/// where a `NetworkId` is expected, catching bugs at compile time.
#[must_use = "IDs reference resources and should not be ignored"]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// First `len` characters of the ID.
    ///
    /// IDs shorter than `len` are returned whole, so truncating an already
    /// short ID gives back the same value.
    pub fn truncated(&self, len: usize) -> &str {
        prefix_chars(&self.value, len)
    }

    /// Like [`Id::truncated`], after dropping a leading `sha256:`.
    pub fn short_digest(&self, len: usize) -> &str {
        let digest = self.value.strip_prefix(DIGEST_PREFIX).unwrap_or(&self.value);
        prefix_chars(digest, len)
    }
}

fn prefix_chars(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

// Manual trait implementations that don't require T to implement the trait.
// This is necessary because T is only used as a phantom type marker.

impl<T> std::fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Id").field("value", &self.value).finish()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::fmt::Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub type ContainerId = Id<ContainerMarker>;
pub type NetworkId = Id<NetworkMarker>;
pub type ImageId = Id<ImageMarker>;
