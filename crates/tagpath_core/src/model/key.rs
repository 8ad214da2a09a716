//! Namespaced key model.
//!
//! # Responsibility
//! - Provide the default key type used to address container entries.
//! - Enforce the host's canonical character set at construction time.
//!
//! # Invariants
//! - A constructed key is always valid; fields are never mutated afterwards.
//! - Equality and hashing compare `namespace` and `name` as opaque strings.
//! - Serialized form is the `namespace:name` string; deserialization goes
//!   through the same validation as `FromStr`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Namespace used when a key string carries no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "tagpath";

static NAMESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9._-]+$").expect("namespace pattern is valid"));
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9/._-]+$").expect("name pattern is valid"));

/// Opaque `namespace:name` identifier for one container entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamespacedKey {
    namespace: String,
    name: String,
}

impl NamespacedKey {
    /// Creates a key after validating both parts.
    ///
    /// # Errors
    /// - Returns `KeyError::EmptyNamespace`/`EmptyName` for blank parts.
    /// - Returns `KeyError::InvalidNamespace`/`InvalidName` for characters
    ///   outside the canonical set.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let name = name.into();

        if namespace.is_empty() {
            return Err(KeyError::EmptyNamespace);
        }
        if name.is_empty() {
            return Err(KeyError::EmptyName);
        }
        if !NAMESPACE_PATTERN.is_match(&namespace) {
            return Err(KeyError::InvalidNamespace(namespace));
        }
        if !NAME_PATTERN.is_match(&name) {
            return Err(KeyError::InvalidName(name));
        }

        Ok(Self { namespace, name })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for NamespacedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

impl FromStr for NamespacedKey {
    type Err = KeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split(':');
        let first = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => Self::new(DEFAULT_NAMESPACE, first),
            (Some(name), None) => Self::new(first, name),
            (Some(_), Some(_)) => Err(KeyError::TooManySeparators(value.to_string())),
        }
    }
}

impl TryFrom<String> for NamespacedKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NamespacedKey> for String {
    fn from(key: NamespacedKey) -> Self {
        key.to_string()
    }
}

/// Key construction and parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    EmptyNamespace,
    EmptyName,
    InvalidNamespace(String),
    InvalidName(String),
    TooManySeparators(String),
}

impl Display for KeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNamespace => write!(f, "key namespace must not be empty"),
            Self::EmptyName => write!(f, "key name must not be empty"),
            Self::InvalidNamespace(value) => {
                write!(f, "key namespace has invalid characters: `{value}`")
            }
            Self::InvalidName(value) => write!(f, "key name has invalid characters: `{value}`"),
            Self::TooManySeparators(value) => {
                write!(f, "key must contain at most one `:` separator: `{value}`")
            }
        }
    }
}

impl Error for KeyError {}
