//! Record trait: value equality, a consistent hash, and copy-with-overrides.

use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

use crate::value_object::ValueObject;

/// Hash any value with a fixed-key hasher.
///
/// `DefaultHasher::new()` is keyed identically for every call in a process,
/// so equal values always produce equal codes.
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// A value object that can be hashed and shallow-cloned with field overrides.
///
/// Implementors decide, field by field, what equality means: scalar fields
/// compare by value, shared collection fields may compare by identity. Whatever
/// the choice, `Hash` must agree with `Eq` so that `a.equals(&b)` implies
/// `a.hash_code() == b.hash_code()`.
pub trait Record: ValueObject + Eq + Hash {
    /// Set of optional field overrides. `Default` overrides nothing.
    type Patch: Default;

    /// Field-by-field equality.
    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Hash code consistent with [`Record::equals`].
    fn hash_code(&self) -> u64 {
        hash_of(self)
    }

    /// Shallow clone: fields named in `patch` take the override, every other
    /// field is copied from `self` (shared collections by reference).
    fn copy_with(&self, patch: Self::Patch) -> Self;
}
