//! Leaf value access through nested key paths.
//!
//! # Responsibility
//! - Read, write and delete one typed value addressed by a key path.
//! - Translate host failures and empty paths into `TagPathError`.
//!
//! # Invariants
//! - `get` never writes; a missing level is a read miss, not an error.
//! - `set`/`delete` reject an empty path before touching the host.
//! - `delete` leaves emptied parent containers in place.

use crate::error::{TagPathError, TagPathResult};
use crate::host::{KeyOf, TaggedContainer};
use crate::model::value::{TagType, TagValue};
use crate::path::navigator::{mutate_at, resolve_for_read};
use crate::path::split_leaf;
use log::trace;

/// Reads the value stored at `path` under `tag`.
///
/// An empty path addresses no value and returns `Ok(None)`.
pub fn get<C: TaggedContainer>(
    root: &C,
    tag: TagType,
    path: &[KeyOf<C>],
) -> TagPathResult<Option<TagValue<C>>, C::Error> {
    let Some((leaf, parents)) = path.split_last() else {
        return Ok(None);
    };
    let Some(container) = resolve_for_read(root, parents).map_err(TagPathError::Host)? else {
        return Ok(None);
    };
    let value = container.get(leaf, tag).map_err(TagPathError::Host)?;
    trace!(
        "event=leaf_get module=path status={} tag={} depth={}",
        if value.is_some() { "ok" } else { "miss" },
        tag,
        parents.len()
    );
    Ok(value)
}

/// Reads the value at `path`, falling back to `default` on a miss.
pub fn get_or_default<C: TaggedContainer>(
    root: &C,
    tag: TagType,
    default: TagValue<C>,
    path: &[KeyOf<C>],
) -> TagPathResult<TagValue<C>, C::Error> {
    Ok(get(root, tag, path)?.unwrap_or(default))
}

/// Stores `value` at `path`, creating missing parent containers.
///
/// # Errors
/// - `InvalidPath` when `path` is empty.
pub fn set<C: TaggedContainer>(
    root: &mut C,
    value: TagValue<C>,
    path: &[KeyOf<C>],
) -> TagPathResult<(), C::Error> {
    let (leaf, parents) = split_leaf::<_, C::Error>(path, "set")?;
    let tag = value.tag();
    mutate_at(root, parents, |container| container.set(leaf, value))
        .map_err(TagPathError::Host)?;
    trace!(
        "event=leaf_set module=path status=ok tag={} depth={}",
        tag,
        parents.len()
    );
    Ok(())
}

/// Removes the value at `path`.
///
/// Parent containers are written back even when they end up empty; they are
/// never pruned. Removing a missing value is not an error.
///
/// # Errors
/// - `InvalidPath` when `path` is empty.
pub fn delete<C: TaggedContainer>(root: &mut C, path: &[KeyOf<C>]) -> TagPathResult<(), C::Error> {
    let (leaf, parents) = split_leaf::<_, C::Error>(path, "delete")?;
    mutate_at(root, parents, |container| container.remove(leaf)).map_err(TagPathError::Host)?;
    trace!(
        "event=leaf_delete module=path status=ok depth={}",
        parents.len()
    );
    Ok(())
}

/// Applies `mutation` to the container at `path` and writes it back.
///
/// An empty path is valid and operates on `root` itself.
pub fn modify_nested<C, F, R>(
    root: &mut C,
    path: &[KeyOf<C>],
    mutation: F,
) -> TagPathResult<R, C::Error>
where
    C: TaggedContainer,
    F: FnOnce(&mut C) -> Result<R, C::Error>,
{
    mutate_at(root, path, mutation).map_err(TagPathError::Host)
}

#[cfg(test)]
mod tests {
    use super::{delete, get, get_or_default, modify_nested, set};
    use crate::error::TagPathError;
    use crate::host::memory::MemoryContainer;
    use crate::host::TaggedContainer;
    use crate::model::value::{TagType, TagValue};

    type Container = MemoryContainer<&'static str>;

    #[test]
    fn empty_path_get_is_a_miss() {
        let mut root = Container::new();
        root.set(&"a", TagValue::Int(1)).expect("set");
        assert_eq!(get(&root, TagType::Int, &[]).expect("get"), None);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let mut root = Container::new();
        set(&mut root, "hello".into(), &["a", "b", "greeting"]).expect("set");

        assert_eq!(
            get(&root, TagType::String, &["a", "b", "greeting"]).expect("get"),
            Some(TagValue::String("hello".to_string()))
        );
        assert_eq!(
            get(&root, TagType::Int, &["a", "b", "greeting"]).expect("get"),
            None
        );
    }

    #[test]
    fn empty_path_set_and_delete_are_rejected_without_writes() {
        let mut root = Container::new();

        let err = set(&mut root, TagValue::Int(1), &[]).expect_err("empty set must fail");
        assert_eq!(err, TagPathError::InvalidPath { operation: "set" });

        let err = delete(&mut root, &[]).expect_err("empty delete must fail");
        assert_eq!(err, TagPathError::InvalidPath { operation: "delete" });

        assert!(root.is_empty());
    }

    #[test]
    fn default_is_returned_on_miss() {
        let root = Container::new();
        let value = get_or_default(&root, TagType::Double, TagValue::Double(1.5), &["x", "y"])
            .expect("get");
        assert_eq!(value, TagValue::Double(1.5));
    }

    #[test]
    fn modify_nested_returns_mutation_output() {
        let mut root = Container::new();
        let size = modify_nested(&mut root, &["inv"], |container| {
            container.set(&"slot0", TagValue::Byte(64))?;
            container.set(&"slot1", TagValue::Byte(12))?;
            Ok(container.len())
        })
        .expect("modify");

        assert_eq!(size, 2);
        assert_eq!(
            get(&root, TagType::Byte, &["inv", "slot1"]).expect("get"),
            Some(TagValue::Byte(12))
        );
    }
}
