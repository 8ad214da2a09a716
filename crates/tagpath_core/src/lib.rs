//! Nested path access and clamped numeric accumulation over host-provided
//! tagged containers.
//!
//! The host supplies flat, single-level container primitives
//! ([`TaggedContainer`]); this crate addresses values nested arbitrarily deep
//! through key paths and keeps every level linked back to the root.

pub mod error;
pub mod host;
pub mod logging;
pub mod model;
pub mod numeric;
pub mod path;

pub use error::{TagPathError, TagPathResult};
pub use host::holder::ContainerHolder;
pub use host::memory::MemoryContainer;
pub use host::{HostErrorOf, KeyOf, TaggedContainer};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::key::{KeyError, NamespacedKey, DEFAULT_NAMESPACE};
pub use model::value::{Number, TagType, TagValue};
pub use numeric::accumulator::{
    add, add_clamped, modify_byte_clamped, modify_double_clamped, modify_float_clamped,
    modify_int_clamped, modify_long_clamped, modify_number_clamped, modify_short_clamped,
    remove_capped,
};
pub use path::leaf::{delete, get, get_or_default, modify_nested, set};
pub use path::navigator::{mutate_at, resolve_for_read, resolve_for_write, ReadTarget, WriteChain};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
