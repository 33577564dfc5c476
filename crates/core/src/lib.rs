//! `valuekit-core` — shared building blocks.
//!
//! The error model used by the query operators and the traits every record
//! variant implements. No IO, no global state.

pub mod error;
pub mod record;
pub mod value_object;

pub use error::{QueryError, QueryResult};
pub use record::{Record, hash_of};
pub use value_object::ValueObject;
