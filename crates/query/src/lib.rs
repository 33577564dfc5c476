//! Sequence query operators.
//!
//! Stateless functions over finite, ordered sequences: keyed extremum
//! queries, keyed set operations, fixed-size chunking, and element/range
//! addressing that can count from the end. Fallible operations return
//! [`valuekit_core::QueryResult`].

pub mod chunk;
pub mod extremum;
pub mod index;
pub mod set_ops;

pub use chunk::chunk;
pub use extremum::{max, max_by_key, min, min_by_key};
pub use index::{Index, IndexRange, element_at, element_from_end, slice, slice_from_end};
pub use set_ops::{distinct_by_key, except_by_key, intersect_by_key, union_by_key};
