//! Error types for nested path and accumulation operations.
//!
//! # Invariants
//! - `InvalidPath` and `UnsupportedValueType` are raised before any host write.
//! - Host failures are carried unchanged in `Host`.

use crate::model::value::TagType;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by public path and accumulation operations.
pub type TagPathResult<T, E> = Result<T, TagPathError<E>>;

/// Errors from path and accumulation operations over a host error type `E`.
#[derive(Debug, Clone, PartialEq)]
pub enum TagPathError<E> {
    /// Operation needs a leaf key but the path was empty.
    InvalidPath { operation: &'static str },
    /// Value or bound passed to the accumulator is not one of the six numeric kinds.
    UnsupportedValueType(TagType),
    /// Host container primitive failed.
    Host(E),
}

impl<E: Display> Display for TagPathError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath { operation } => {
                write!(f, "`{operation}` requires a non-empty key path")
            }
            Self::UnsupportedValueType(tag) => {
                write!(f, "value of type `{tag}` is not a supported number type")
            }
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

impl<E: Error + 'static> Error for TagPathError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPath { .. } => None,
            Self::UnsupportedValueType(_) => None,
            Self::Host(err) => Some(err),
        }
    }
}
