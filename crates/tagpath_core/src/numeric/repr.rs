//! Fixed-width numeric representations accepted by the accumulator.

use crate::model::value::{Number, TagType, TagValue};

/// One of the six numeric kinds a tagged container can store.
pub(crate) trait NumericRepr: Copy + PartialOrd {
    const TAG: TagType;
    const ZERO: Self;

    /// Narrows a bound of any numeric kind into this representation.
    fn from_number(number: Number) -> Self;
    fn from_tag<C>(value: TagValue<C>) -> Option<Self>;
    fn into_tag<C>(self) -> TagValue<C>;
    /// `self + delta` or `self - delta`; integers wrap on overflow.
    fn offset(self, delta: Self, add: bool) -> Self;
    /// True for a float NaN; always false for integers.
    fn is_unordered(self) -> bool;
}

macro_rules! integer_repr {
    ($ty:ty, $variant:ident, $narrow:ident) => {
        impl NumericRepr for $ty {
            const TAG: TagType = TagType::$variant;
            const ZERO: Self = 0;

            fn from_number(number: Number) -> Self {
                number.$narrow()
            }

            fn from_tag<C>(value: TagValue<C>) -> Option<Self> {
                match value {
                    TagValue::$variant(value) => Some(value),
                    _ => None,
                }
            }

            fn into_tag<C>(self) -> TagValue<C> {
                TagValue::$variant(self)
            }

            fn offset(self, delta: Self, add: bool) -> Self {
                if add {
                    self.wrapping_add(delta)
                } else {
                    self.wrapping_sub(delta)
                }
            }

            fn is_unordered(self) -> bool {
                false
            }
        }
    };
}

macro_rules! float_repr {
    ($ty:ty, $variant:ident, $narrow:ident) => {
        impl NumericRepr for $ty {
            const TAG: TagType = TagType::$variant;
            const ZERO: Self = 0.0;

            fn from_number(number: Number) -> Self {
                number.$narrow()
            }

            fn from_tag<C>(value: TagValue<C>) -> Option<Self> {
                match value {
                    TagValue::$variant(value) => Some(value),
                    _ => None,
                }
            }

            fn into_tag<C>(self) -> TagValue<C> {
                TagValue::$variant(self)
            }

            fn offset(self, delta: Self, add: bool) -> Self {
                if add {
                    self + delta
                } else {
                    self - delta
                }
            }

            fn is_unordered(self) -> bool {
                self.is_nan()
            }
        }
    };
}

integer_repr!(i8, Byte, as_i8);
integer_repr!(i16, Short, as_i16);
integer_repr!(i32, Int, as_i32);
integer_repr!(i64, Long, as_i64);
float_repr!(f32, Float, as_f32);
float_repr!(f64, Double, as_f64);

/// Applies the lower bound first and the upper bound last.
///
/// With `min > max` the result is `max`. A NaN value stays NaN, and a NaN
/// bound turns the result into NaN.
pub(crate) fn clamp_bounds<T: NumericRepr>(value: T, min: Option<T>, max: Option<T>) -> T {
    let mut clamped = value;
    if let Some(min) = min {
        if min.is_unordered() || clamped < min {
            clamped = min;
        }
    }
    if let Some(max) = max {
        if max.is_unordered() || clamped > max {
            clamped = max;
        }
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::{clamp_bounds, NumericRepr};
    use crate::model::value::Number;

    #[test]
    fn integer_offset_wraps() {
        assert_eq!(120i8.offset(10, true), -126);
        assert_eq!((-120i8).offset(10, false), 126);
        assert_eq!(i64::MAX.offset(1, true), i64::MIN);
    }

    #[test]
    fn bounds_apply_min_then_max() {
        assert_eq!(clamp_bounds(13, Some(0), Some(10)), 10);
        assert_eq!(clamp_bounds(-3, Some(0), None), 0);
        assert_eq!(clamp_bounds(5, Some(8), Some(2)), 2);
        assert!(clamp_bounds(f64::NAN, Some(0.0), Some(1.0)).is_nan());
    }

    #[test]
    fn nan_bound_yields_nan() {
        assert!(clamp_bounds(1.0f64, Some(f64::NAN), None).is_nan());
        assert!(clamp_bounds(1.0f32, None, Some(f32::NAN)).is_nan());
        assert!(clamp_bounds(5.0f64, Some(f64::NAN), Some(2.0)).is_nan());
        assert_eq!(clamp_bounds(5.0f64, Some(0.0), Some(10.0)), 5.0);
    }

    #[test]
    fn bounds_are_narrowed_from_any_kind() {
        assert_eq!(i8::from_number(Number::Long(300)), 44);
        assert_eq!(f32::from_number(Number::Int(3)), 3.0);
        assert_eq!(i32::from_number(Number::Double(2.75)), 2);
    }
}
