//! Typed values stored in tagged containers.
//!
//! # Responsibility
//! - Mirror the host's type tags and tagged value union.
//! - Provide the closed numeric sum type used by clamped accumulation.
//!
//! # Invariants
//! - `TagValue::tag()` always agrees with the variant.
//! - `Number` covers exactly the six numeric kinds the host recognizes.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Host type tag used by typed container accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    ByteArray,
    /// Nested tagged container.
    Container,
}

impl TagType {
    /// Stable lowercase name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::ByteArray => "byte_array",
            Self::Container => "container",
        }
    }
}

impl Display for TagType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed value held by a container of type `C`.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue<C> {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<u8>),
    Container(C),
}

impl<C> TagValue<C> {
    pub fn tag(&self) -> TagType {
        match self {
            Self::Byte(_) => TagType::Byte,
            Self::Short(_) => TagType::Short,
            Self::Int(_) => TagType::Int,
            Self::Long(_) => TagType::Long,
            Self::Float(_) => TagType::Float,
            Self::Double(_) => TagType::Double,
            Self::String(_) => TagType::String,
            Self::ByteArray(_) => TagType::ByteArray,
            Self::Container(_) => TagType::Container,
        }
    }

    /// Consumes the value and returns the nested container, if it is one.
    pub fn into_container(self) -> Option<C> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }
}

impl<C> From<i8> for TagValue<C> {
    fn from(value: i8) -> Self {
        Self::Byte(value)
    }
}

impl<C> From<i16> for TagValue<C> {
    fn from(value: i16) -> Self {
        Self::Short(value)
    }
}

impl<C> From<i32> for TagValue<C> {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl<C> From<i64> for TagValue<C> {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl<C> From<f32> for TagValue<C> {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl<C> From<f64> for TagValue<C> {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl<C> From<String> for TagValue<C> {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<C> From<&str> for TagValue<C> {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<C> From<Vec<u8>> for TagValue<C> {
    fn from(value: Vec<u8>) -> Self {
        Self::ByteArray(value)
    }
}

impl<C> From<Number> for TagValue<C> {
    fn from(value: Number) -> Self {
        match value {
            Number::Byte(v) => Self::Byte(v),
            Number::Short(v) => Self::Short(v),
            Number::Int(v) => Self::Int(v),
            Number::Long(v) => Self::Long(v),
            Number::Float(v) => Self::Float(v),
            Number::Double(v) => Self::Double(v),
        }
    }
}

/// Numeric value in one of the six fixed-width representations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Number {
    pub fn tag(self) -> TagType {
        match self {
            Self::Byte(_) => TagType::Byte,
            Self::Short(_) => TagType::Short,
            Self::Int(_) => TagType::Int,
            Self::Long(_) => TagType::Long,
            Self::Float(_) => TagType::Float,
            Self::Double(_) => TagType::Double,
        }
    }

    /// Integers sign-extend; floats saturate (NaN becomes 0).
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Byte(v) => i64::from(v),
            Self::Short(v) => i64::from(v),
            Self::Int(v) => i64::from(v),
            Self::Long(v) => v,
            Self::Float(v) => v as i64,
            Self::Double(v) => v as i64,
        }
    }

    /// Wider integers truncate; floats saturate at the `i32` range.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Float(v) => v as i32,
            Self::Double(v) => v as i32,
            other => other.as_i64() as i32,
        }
    }

    /// Floats saturate at the `i32` range before truncating to 16 bits.
    pub fn as_i16(self) -> i16 {
        self.as_i32() as i16
    }

    /// Floats saturate at the `i32` range before truncating to 8 bits.
    pub fn as_i8(self) -> i8 {
        self.as_i32() as i8
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Byte(v) => f64::from(v),
            Self::Short(v) => f64::from(v),
            Self::Int(v) => f64::from(v),
            Self::Long(v) => v as f64,
            Self::Float(v) => f64::from(v),
            Self::Double(v) => v,
        }
    }

    pub fn as_f32(self) -> f32 {
        match self {
            Self::Byte(v) => f32::from(v),
            Self::Short(v) => f32::from(v),
            Self::Int(v) => v as f32,
            Self::Long(v) => v as f32,
            Self::Float(v) => v,
            Self::Double(v) => v as f32,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
        }
    }
}

impl<C> TryFrom<TagValue<C>> for Number {
    /// The tag of the rejected non-numeric value.
    type Error = TagType;

    fn try_from(value: TagValue<C>) -> Result<Self, Self::Error> {
        match value {
            TagValue::Byte(v) => Ok(Self::Byte(v)),
            TagValue::Short(v) => Ok(Self::Short(v)),
            TagValue::Int(v) => Ok(Self::Int(v)),
            TagValue::Long(v) => Ok(Self::Long(v)),
            TagValue::Float(v) => Ok(Self::Float(v)),
            TagValue::Double(v) => Ok(Self::Double(v)),
            other => Err(other.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Number, TagType, TagValue};

    type Value = TagValue<()>;

    #[test]
    fn tag_matches_variant() {
        assert_eq!(Value::from(3i8).tag(), TagType::Byte);
        assert_eq!(Value::from(3i64).tag(), TagType::Long);
        assert_eq!(Value::from("x").tag(), TagType::String);
        assert_eq!(Value::Container(()).tag(), TagType::Container);
    }

    #[test]
    fn non_numeric_values_are_rejected_with_their_tag() {
        let err = Number::try_from(Value::from(vec![1u8, 2])).expect_err("byte array");
        assert_eq!(err, TagType::ByteArray);
        let err = Number::try_from(Value::Container(())).expect_err("container");
        assert_eq!(err, TagType::Container);
        assert_eq!(
            Number::try_from(Value::Short(-4)).expect("short"),
            Number::Short(-4)
        );
    }

    #[test]
    fn integer_narrowing_truncates() {
        assert_eq!(Number::Long(300).as_i8(), 44);
        assert_eq!(Number::Int(70_000).as_i16(), 4_464);
        assert_eq!(Number::Long(i64::from(i32::MAX) + 1).as_i32(), i32::MIN);
    }

    #[test]
    fn float_narrowing_saturates_then_truncates() {
        assert_eq!(Number::Double(1e20).as_i64(), i64::MAX);
        assert_eq!(Number::Double(1e20).as_i32(), i32::MAX);
        // i32::MAX truncated to 16 bits is -1.
        assert_eq!(Number::Double(1e20).as_i16(), -1);
        assert_eq!(Number::Float(f32::NAN).as_i32(), 0);
        assert_eq!(Number::Double(-2.9).as_i8(), -2);
    }

    #[test]
    fn serializes_with_snake_case_tags() {
        let json = serde_json::to_string(&Number::Short(5)).expect("serialize");
        assert_eq!(json, r#"{"short":5}"#);
        let tag: TagType = serde_json::from_str(r#""byte_array""#).expect("deserialize");
        assert_eq!(tag, TagType::ByteArray);
    }
}
