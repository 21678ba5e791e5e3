//! `gstinvoice-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod error;
pub mod reducer;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use reducer::Reducer;
pub use value_object::ValueObject;
