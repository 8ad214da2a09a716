//! Clamped read-modify-write of numeric leaves.
//!
//! # Responsibility
//! - Add or subtract a delta on a numeric leaf that may not exist yet.
//! - Bound the result to optional inclusive limits and persist it.
//!
//! # Invariants
//! - The path and every argument's type are validated before the host is
//!   touched; a rejected call writes nothing.
//! - A missing or differently-tagged leaf counts as zero.
//! - Integer overflow wraps before clamping. A sum that leaves the
//!   representation's range is clamped after wrapping, not before.

use crate::error::{TagPathError, TagPathResult};
use crate::host::{KeyOf, TaggedContainer};
use crate::model::value::{Number, TagValue};
use crate::numeric::repr::{clamp_bounds, NumericRepr};
use crate::path::navigator::mutate_at;
use crate::path::split_leaf;
use log::{debug, warn};

/// Adds or subtracts `value` at `path`, clamping to `min`/`max` when given.
///
/// Dispatches on the representation of `value`; bounds of any numeric kind
/// are narrowed into that representation.
///
/// Integer sums wrap before clamping. Floats keep IEEE semantics: a NaN sum
/// stays NaN and a NaN bound makes the stored result NaN.
///
/// # Errors
/// - `InvalidPath` when `path` is empty.
/// - `UnsupportedValueType` when `value` or a bound is not numeric.
pub fn modify_number_clamped<C, N>(
    root: &mut C,
    value: N,
    min: Option<N>,
    max: Option<N>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<Number, C::Error>
where
    C: TaggedContainer,
    N: Into<TagValue<C>>,
{
    dispatch("modify_number_clamped", root, value, min, max, add, path)
}

/// Adds `value` at `path`, clamping to `min`/`max` when given.
pub fn add_clamped<C, N>(
    root: &mut C,
    value: N,
    min: Option<N>,
    max: Option<N>,
    path: &[KeyOf<C>],
) -> TagPathResult<Number, C::Error>
where
    C: TaggedContainer,
    N: Into<TagValue<C>>,
{
    dispatch("add_clamped", root, value, min, max, true, path)
}

/// Subtracts `value` at `path`, clamping to `min`/`max` when given.
pub fn remove_capped<C, N>(
    root: &mut C,
    value: N,
    min: Option<N>,
    max: Option<N>,
    path: &[KeyOf<C>],
) -> TagPathResult<Number, C::Error>
where
    C: TaggedContainer,
    N: Into<TagValue<C>>,
{
    dispatch("remove_capped", root, value, min, max, false, path)
}

/// Adds `value` at `path` without bounds.
pub fn add<C, N>(root: &mut C, value: N, path: &[KeyOf<C>]) -> TagPathResult<Number, C::Error>
where
    C: TaggedContainer,
    N: Into<TagValue<C>>,
{
    dispatch("add", root, value, None, None, true, path)
}

pub fn modify_byte_clamped<C: TaggedContainer>(
    root: &mut C,
    value: i8,
    min: Option<Number>,
    max: Option<Number>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<i8, C::Error> {
    modify_clamped("modify_byte_clamped", root, value, min, max, add, path)
}

pub fn modify_short_clamped<C: TaggedContainer>(
    root: &mut C,
    value: i16,
    min: Option<Number>,
    max: Option<Number>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<i16, C::Error> {
    modify_clamped("modify_short_clamped", root, value, min, max, add, path)
}

pub fn modify_int_clamped<C: TaggedContainer>(
    root: &mut C,
    value: i32,
    min: Option<Number>,
    max: Option<Number>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<i32, C::Error> {
    modify_clamped("modify_int_clamped", root, value, min, max, add, path)
}

pub fn modify_long_clamped<C: TaggedContainer>(
    root: &mut C,
    value: i64,
    min: Option<Number>,
    max: Option<Number>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<i64, C::Error> {
    modify_clamped("modify_long_clamped", root, value, min, max, add, path)
}

pub fn modify_float_clamped<C: TaggedContainer>(
    root: &mut C,
    value: f32,
    min: Option<Number>,
    max: Option<Number>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<f32, C::Error> {
    modify_clamped("modify_float_clamped", root, value, min, max, add, path)
}

pub fn modify_double_clamped<C: TaggedContainer>(
    root: &mut C,
    value: f64,
    min: Option<Number>,
    max: Option<Number>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<f64, C::Error> {
    modify_clamped("modify_double_clamped", root, value, min, max, add, path)
}

fn dispatch<C, N>(
    operation: &'static str,
    root: &mut C,
    value: N,
    min: Option<N>,
    max: Option<N>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<Number, C::Error>
where
    C: TaggedContainer,
    N: Into<TagValue<C>>,
{
    split_leaf::<_, C::Error>(path, operation)?;
    let value = to_number::<C, C::Error>(operation, value.into())?;
    let min = min
        .map(|bound| to_number::<C, C::Error>(operation, bound.into()))
        .transpose()?;
    let max = max
        .map(|bound| to_number::<C, C::Error>(operation, bound.into()))
        .transpose()?;

    match value {
        Number::Byte(v) => {
            modify_clamped(operation, root, v, min, max, add, path).map(Number::Byte)
        }
        Number::Short(v) => {
            modify_clamped(operation, root, v, min, max, add, path).map(Number::Short)
        }
        Number::Int(v) => {
            modify_clamped(operation, root, v, min, max, add, path).map(Number::Int)
        }
        Number::Long(v) => {
            modify_clamped(operation, root, v, min, max, add, path).map(Number::Long)
        }
        Number::Float(v) => {
            modify_clamped(operation, root, v, min, max, add, path).map(Number::Float)
        }
        Number::Double(v) => {
            modify_clamped(operation, root, v, min, max, add, path).map(Number::Double)
        }
    }
}

fn to_number<C, E>(operation: &'static str, value: TagValue<C>) -> TagPathResult<Number, E> {
    Number::try_from(value).map_err(|tag| {
        warn!(
            "event=number_modify module=numeric status=error operation={} error_code=unsupported_value_type tag={}",
            operation, tag
        );
        TagPathError::UnsupportedValueType(tag)
    })
}

fn modify_clamped<C, T>(
    operation: &'static str,
    root: &mut C,
    value: T,
    min: Option<Number>,
    max: Option<Number>,
    add: bool,
    path: &[KeyOf<C>],
) -> TagPathResult<T, C::Error>
where
    C: TaggedContainer,
    T: NumericRepr,
{
    let (leaf, parents) = split_leaf::<_, C::Error>(path, operation)?;
    let min = min.map(T::from_number);
    let max = max.map(T::from_number);

    let next = mutate_at(root, parents, |container| {
        let current = container.get_or_default(leaf, T::TAG, T::ZERO.into_tag())?;
        let current = T::from_tag(current).unwrap_or(T::ZERO);
        let next = clamp_bounds(current.offset(value, add), min, max);
        container.set(leaf, next.into_tag())?;
        Ok(next)
    })
    .map_err(TagPathError::Host)?;

    debug!(
        "event=number_modify module=numeric status=ok operation={} tag={} add={} bounded={} depth={}",
        operation,
        T::TAG,
        add,
        min.is_some() || max.is_some(),
        parents.len()
    );
    Ok(next)
}
