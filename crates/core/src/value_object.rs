//! Value object trait: equality by value, not identity.
//!
//! Invoice line items, buyer records and computed totals are all value objects:
//! they have no identity and are defined entirely by their attribute values.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value; reducers rely on this to keep previous states intact.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Rate(f64);
///
/// impl ValueObject for Rate {}
///
/// assert_eq!(Rate(12.5), Rate(12.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
