//! Shared primitives and traits for the nucleo sequence toolkit.
//!
//! `nucleo-core` is the foundation the sequence crate builds on:
//!
//! - **Error types**: [`NucleoError`] and [`Result`] for validation failures
//! - **Traits**: [`Sequence`], [`ContentAddressable`], [`Summarizable`]
//! - **Hashing**: SHA-256 content addressing of normalized symbols

pub mod error;
pub mod hash;
pub mod traits;

pub use error::{NucleoError, Result};
pub use traits::*;
