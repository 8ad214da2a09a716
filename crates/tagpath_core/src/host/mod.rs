//! Host container contracts consumed by the path layer.
//!
//! # Responsibility
//! - Describe the flat, single-level primitives a host store must provide.
//! - Describe holders that own one root container.
//!
//! # Invariants
//! - `get` returns `None` for missing keys and for values stored under a
//!   different tag; it never coerces.
//! - Containers returned by `get` may be detached snapshots. Changes to them
//!   are only visible from the parent after `set` writes them back.

use crate::model::value::{TagType, TagValue};
use std::error::Error;

pub mod holder;
pub mod memory;

/// Key type of container `C`.
pub type KeyOf<C> = <C as TaggedContainer>::Key;
/// Host error type of container `C`.
pub type HostErrorOf<C> = <C as TaggedContainer>::Error;

/// One level of a host-managed tagged key-value store.
pub trait TaggedContainer: Sized {
    /// Opaque entry key. Only equality is meaningful to the core.
    type Key;
    /// Host-level failure (for example storage I/O).
    type Error: Error + 'static;

    /// Returns whether `key` holds a value stored under `tag`.
    fn has(&self, key: &Self::Key, tag: TagType) -> Result<bool, Self::Error>;
    /// Reads the value stored under `key` with `tag`.
    fn get(&self, key: &Self::Key, tag: TagType) -> Result<Option<TagValue<Self>>, Self::Error>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &Self::Key, value: TagValue<Self>) -> Result<(), Self::Error>;
    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &Self::Key) -> Result<(), Self::Error>;
    /// Creates a detached empty container from the same adapter context.
    fn new_empty(&self) -> Self;

    /// Reads `key` under `tag`, or returns `default` when it is absent.
    fn get_or_default(
        &self,
        key: &Self::Key,
        tag: TagType,
        default: TagValue<Self>,
    ) -> Result<TagValue<Self>, Self::Error> {
        Ok(self.get(key, tag)?.unwrap_or(default))
    }

    /// Reads the nested container under `key`, if one is stored there.
    fn child_container(&self, key: &Self::Key) -> Result<Option<Self>, Self::Error> {
        if !self.has(key, TagType::Container)? {
            return Ok(None);
        }
        Ok(self
            .get(key, TagType::Container)?
            .and_then(TagValue::into_container))
    }
}
