//! User record shared by reference.

use core::hash::{Hash, Hasher};
use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use valuekit_core::{Record, ValueObject};

use crate::patch::UserPatch;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
struct UserFields {
    name: Option<String>,
    birthdate: DateTime<Utc>,
}

/// A user every holder shares.
///
/// `clone()` hands out another handle to the same record, so a setter called
/// through any handle is seen through all of them. Equality is still
/// structural: two separately built users with the same fields are equal.
/// Use [`ReferenceUser::ptr_eq`] to ask whether two handles are the same record.
#[derive(Clone)]
pub struct ReferenceUser(Rc<RefCell<UserFields>>);

impl ReferenceUser {
    pub fn new(name: impl Into<String>, birthdate: DateTime<Utc>) -> Self {
        Self::from_fields(UserFields {
            name: Some(name.into()),
            birthdate,
        })
    }

    pub fn anonymous(birthdate: DateTime<Utc>) -> Self {
        Self::from_fields(UserFields {
            name: None,
            birthdate,
        })
    }

    fn from_fields(fields: UserFields) -> Self {
        Self(Rc::new(RefCell::new(fields)))
    }

    pub fn name(&self) -> Option<String> {
        self.0.borrow().name.clone()
    }

    pub fn birthdate(&self) -> DateTime<Utc> {
        self.0.borrow().birthdate
    }

    pub fn set_name(&self, name: Option<String>) {
        self.0.borrow_mut().name = name;
    }

    pub fn set_birthdate(&self, birthdate: DateTime<Utc>) {
        self.0.borrow_mut().birthdate = birthdate;
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl core::fmt::Debug for ReferenceUser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let fields = self.0.borrow();
        f.debug_struct("ReferenceUser")
            .field("name", &fields.name)
            .field("birthdate", &fields.birthdate)
            .finish()
    }
}

impl PartialEq for ReferenceUser {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl Eq for ReferenceUser {}

impl Hash for ReferenceUser {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.borrow().hash(state);
    }
}

impl Serialize for ReferenceUser {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.borrow().serialize(serializer)
    }
}

impl ValueObject for ReferenceUser {}

impl Record for ReferenceUser {
    type Patch = UserPatch;

    /// Builds a new record; the result does not alias `self`.
    fn copy_with(&self, patch: Self::Patch) -> Self {
        tracing::trace!(?patch, "copying reference user");
        let fields = self.0.borrow();
        Self::from_fields(UserFields {
            name: patch.apply_name(&fields.name),
            birthdate: patch.apply_birthdate(fields.birthdate),
        })
    }
}
