//! User records in three flavours of equality and ownership.
//!
//! - [`ReferenceUser`]: shared handle, mutable in place, structural equality.
//! - [`ValueUser`]: copied on assignment, mutable locally, structural equality.
//! - [`ImmutableUser`]: copied on assignment, never mutated, structural over
//!   its scalars but identity-based over its [`SharedList`].
//!
//! All three implement [`valuekit_core::Record`], so they share `equals`,
//! `hash_code` and `copy_with`.

pub mod immutable_user;
pub mod patch;
pub mod reference_user;
pub mod shared_list;
pub mod value_user;

pub use immutable_user::ImmutableUser;
pub use patch::{ImmutableUserPatch, UserPatch};
pub use reference_user::ReferenceUser;
pub use shared_list::SharedList;
pub use value_user::ValueUser;
