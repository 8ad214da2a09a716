//! Value and key model shared by the host interface and path operations.
//!
//! # Responsibility
//! - Define the key type and the host's typed value union.
//! - Keep numeric representation rules in one place.
//!
//! # Invariants
//! - Keys are opaque to path operations; only equality is used.
//! - The accumulator recognizes exactly the six `Number` kinds.

pub mod key;
pub mod value;
