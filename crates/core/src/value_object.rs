//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Handle
///
/// - **Value Object**: copied on assignment; two copies with the same values are equal
/// - **Handle**: shared by every holder; mutation through one holder is seen by all
///
/// Both can still compare *structurally*. What differs is what a mutation
/// reaches, not what `==` looks at.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: a clone is the "copy on assignment" of the value
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (helpful for logging, testing)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Population {
///     year: i32,
///     count: u64,
/// }
///
/// impl ValueObject for Population {}
///
/// let a = Population { year: 2022, count: 19_031_335 };
/// let b = Population { year: 2022, count: 19_031_335 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
