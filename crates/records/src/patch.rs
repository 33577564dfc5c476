//! Field overrides used by `copy_with`.

use chrono::{DateTime, Utc};

use crate::shared_list::SharedList;

/// Overrides for the scalar fields every user variant has.
///
/// `name` is nullable, so its override is doubly optional: `None` leaves it
/// alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<Option<String>>,
    pub birthdate: Option<DateTime<Utc>>,
}

impl UserPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(name.into()));
        self
    }

    pub fn clear_name(mut self) -> Self {
        self.name = Some(None);
        self
    }

    pub fn birthdate(mut self, birthdate: DateTime<Utc>) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    pub(crate) fn apply_name(&self, current: &Option<String>) -> Option<String> {
        match &self.name {
            Some(name) => name.clone(),
            None => current.clone(),
        }
    }

    pub(crate) fn apply_birthdate(&self, current: DateTime<Utc>) -> DateTime<Utc> {
        self.birthdate.unwrap_or(current)
    }
}

/// Overrides for [`crate::ImmutableUser`], which also owns a shared list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImmutableUserPatch {
    pub user: UserPatch,
    pub stuff: Option<Option<SharedList>>,
}

impl ImmutableUserPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user = self.user.name(name);
        self
    }

    pub fn clear_name(mut self) -> Self {
        self.user = self.user.clear_name();
        self
    }

    pub fn birthdate(mut self, birthdate: DateTime<Utc>) -> Self {
        self.user = self.user.birthdate(birthdate);
        self
    }

    pub fn stuff(mut self, stuff: Option<SharedList>) -> Self {
        self.stuff = Some(stuff);
        self
    }
}

impl From<UserPatch> for ImmutableUserPatch {
    fn from(user: UserPatch) -> Self {
        Self { user, stuff: None }
    }
}
