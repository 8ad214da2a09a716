//! Nested key path traversal over tagged containers.
//!
//! # Responsibility
//! - Resolve key paths to nested containers (`navigator`).
//! - Expose leaf get/set/delete on top of that resolution (`leaf`).
//!
//! # Invariants
//! - A path's last key addresses the leaf; all earlier keys address
//!   nested containers.
//! - Every successful write re-links the full chain up to the root.

use crate::error::{TagPathError, TagPathResult};
use log::warn;

pub mod leaf;
pub mod navigator;

/// Splits `path` into `(leaf, parents)`, rejecting an empty path.
pub(crate) fn split_leaf<'p, K, E>(
    path: &'p [K],
    operation: &'static str,
) -> TagPathResult<(&'p K, &'p [K]), E> {
    path.split_last().ok_or_else(|| {
        warn!("event=path_validate module=path status=error operation={operation} error_code=empty_path");
        TagPathError::InvalidPath { operation }
    })
}
