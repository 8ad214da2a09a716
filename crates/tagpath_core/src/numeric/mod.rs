//! Clamped numeric accumulation on nested leaves.
//!
//! # Responsibility
//! - Dispatch on the six numeric representations the host stores.
//! - Read-modify-write one leaf through the path navigator.
//!
//! # Invariants
//! - Accumulation is not atomic; concurrent callers on one tree must
//!   serialize externally.

pub mod accumulator;
mod repr;
