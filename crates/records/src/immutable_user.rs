//! Immutable user record owning an identity-compared list.

use chrono::{DateTime, Utc};
use serde::Serialize;

use valuekit_core::{Record, ValueObject};

use crate::patch::ImmutableUserPatch;
use crate::shared_list::SharedList;

/// A user whose fields cannot change after construction.
///
/// `name` and `birthdate` compare by value. `stuff` compares by identity (see
/// [`SharedList`]): two users are equal only when both lists are absent or both
/// point at the same list. Two users built with their own fresh empty lists are
/// therefore *not* equal. Keep that in mind before putting these in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImmutableUser {
    name: Option<String>,
    birthdate: DateTime<Utc>,
    stuff: Option<SharedList>,
}

impl ImmutableUser {
    /// Build a user with a freshly allocated, empty `stuff` list.
    pub fn new(name: impl Into<String>, birthdate: DateTime<Utc>) -> Self {
        Self::with_stuff(Some(name.into()), birthdate, Some(SharedList::new()))
    }

    pub fn with_stuff(
        name: Option<String>,
        birthdate: DateTime<Utc>,
        stuff: Option<SharedList>,
    ) -> Self {
        Self {
            name,
            birthdate,
            stuff,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn birthdate(&self) -> DateTime<Utc> {
        self.birthdate
    }

    pub fn stuff(&self) -> Option<&SharedList> {
        self.stuff.as_ref()
    }
}

impl Default for ImmutableUser {
    fn default() -> Self {
        Self::with_stuff(
            Some(String::new()),
            DateTime::<Utc>::default(),
            Some(SharedList::new()),
        )
    }
}

impl ValueObject for ImmutableUser {}

impl Record for ImmutableUser {
    type Patch = ImmutableUserPatch;

    fn copy_with(&self, patch: Self::Patch) -> Self {
        tracing::trace!(?patch, "copying immutable user");
        Self {
            name: patch.user.apply_name(&self.name),
            birthdate: patch.user.apply_birthdate(self.birthdate),
            stuff: match patch.stuff {
                Some(stuff) => stuff,
                None => self.stuff.clone(),
            },
        }
    }
}
