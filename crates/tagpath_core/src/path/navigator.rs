//! Nested container resolution and write-back.
//!
//! # Responsibility
//! - Resolve a key path to the container it addresses, read-only or for write.
//! - Re-link every visited container into its parent after a mutation.
//!
//! # Invariants
//! - Read resolution never creates or writes anything.
//! - Write resolution never fails on absence; missing levels become empty
//!   containers that only exist in the chain until `commit`.
//! - `commit` writes innermost-first, so after it returns every level from the
//!   mutated container up to the root is reachable from the root.

use crate::host::{KeyOf, TaggedContainer};
use crate::model::value::{TagType, TagValue};
use log::{debug, trace};
use std::ops::Deref;

/// Container addressed by a read-only resolution.
#[derive(Debug)]
pub enum ReadTarget<'a, C> {
    /// Empty path: the root itself.
    Root(&'a C),
    /// Detached copy of a nested container.
    Nested(C),
}

impl<C> Deref for ReadTarget<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        match self {
            Self::Root(root) => root,
            Self::Nested(container) => container,
        }
    }
}

/// Resolves `path` without creating or writing anything.
///
/// Returns `Ok(None)` as soon as one level is missing or is not a container.
pub fn resolve_for_read<'a, C: TaggedContainer>(
    root: &'a C,
    path: &[KeyOf<C>],
) -> Result<Option<ReadTarget<'a, C>>, C::Error> {
    let mut current = ReadTarget::Root(root);
    for (depth, key) in path.iter().enumerate() {
        match current.child_container(key)? {
            Some(child) => current = ReadTarget::Nested(child),
            None => {
                trace!(
                    "event=path_resolve module=path status=miss mode=read depth={} path_len={}",
                    depth,
                    path.len()
                );
                return Ok(None);
            }
        }
    }
    Ok(Some(current))
}

/// Stack of containers visited by a write resolution.
///
/// Each frame holds the key under which its container must be stored in the
/// previous frame (or in the root, for the first frame).
pub struct WriteChain<'r, 'p, C: TaggedContainer> {
    root: &'r mut C,
    frames: Vec<(&'p C::Key, C)>,
}

impl<C: TaggedContainer> WriteChain<'_, '_, C> {
    /// Number of nested levels below the root.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Container addressed by the full path.
    pub fn innermost_mut(&mut self) -> &mut C {
        match self.frames.last_mut() {
            Some((_, container)) => container,
            None => &mut *self.root,
        }
    }

    /// Writes every frame back into its parent, innermost first.
    pub fn commit(mut self) -> Result<(), C::Error> {
        while let Some((key, child)) = self.frames.pop() {
            match self.frames.last_mut() {
                Some((_, parent)) => parent.set(key, TagValue::Container(child))?,
                None => self.root.set(key, TagValue::Container(child))?,
            }
        }
        Ok(())
    }
}

/// Resolves `path` for writing, materializing missing levels in memory.
///
/// Nothing is written to the host until [`WriteChain::commit`].
pub fn resolve_for_write<'r, 'p, C: TaggedContainer>(
    root: &'r mut C,
    path: &'p [KeyOf<C>],
) -> Result<WriteChain<'r, 'p, C>, C::Error> {
    let mut frames: Vec<(&'p C::Key, C)> = Vec::with_capacity(path.len());
    for key in path {
        let parent: &C = match frames.last() {
            Some((_, container)) => container,
            None => &*root,
        };
        let fallback = TagValue::Container(parent.new_empty());
        let child = match parent.get_or_default(key, TagType::Container, fallback)? {
            TagValue::Container(child) => child,
            // Hosts only return values of the requested tag.
            _ => parent.new_empty(),
        };
        frames.push((key, child));
    }
    Ok(WriteChain { root, frames })
}

/// Applies `mutation` to the container addressed by `path` and writes the
/// chain back to `root`.
///
/// An empty path applies `mutation` to `root` directly. When `mutation`
/// fails nothing is written back and its error is returned.
pub fn mutate_at<C, F, R>(root: &mut C, path: &[KeyOf<C>], mutation: F) -> Result<R, C::Error>
where
    C: TaggedContainer,
    F: FnOnce(&mut C) -> Result<R, C::Error>,
{
    if path.is_empty() {
        return mutation(root);
    }

    let mut chain = resolve_for_write(root, path)?;
    let output = mutation(chain.innermost_mut())?;
    let depth = chain.depth();
    chain.commit()?;

    debug!("event=path_mutate module=path status=ok depth={depth}");
    Ok(output)
}
