//! User record with value semantics and mutable fields.

use core::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use valuekit_core::{Record, ValueObject};

use crate::patch::UserPatch;

/// A user copied on every assignment.
///
/// Setters change only the local copy; any clone taken earlier keeps the old
/// values. Equality and hashing are written out field by field rather than
/// derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueUser {
    name: Option<String>,
    birthdate: DateTime<Utc>,
}

impl ValueUser {
    pub fn new(name: impl Into<String>, birthdate: DateTime<Utc>) -> Self {
        Self {
            name: Some(name.into()),
            birthdate,
        }
    }

    pub fn anonymous(birthdate: DateTime<Utc>) -> Self {
        Self {
            name: None,
            birthdate,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn birthdate(&self) -> DateTime<Utc> {
        self.birthdate
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_birthdate(&mut self, birthdate: DateTime<Utc>) {
        self.birthdate = birthdate;
    }
}

impl PartialEq for ValueUser {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.birthdate == other.birthdate
    }
}

impl Eq for ValueUser {}

impl Hash for ValueUser {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.birthdate.hash(state);
    }
}

impl ValueObject for ValueUser {}

impl Record for ValueUser {
    type Patch = UserPatch;

    fn copy_with(&self, patch: Self::Patch) -> Self {
        tracing::trace!(?patch, "copying value user");
        Self {
            name: patch.apply_name(&self.name),
            birthdate: patch.apply_birthdate(self.birthdate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn test_birthdate() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 3, 21, 0, 0, 0).unwrap()
    }

    #[test]
    fn users_with_same_fields_are_equal() {
        let user1 = ValueUser::new("Daniel", test_birthdate());
        let user2 = ValueUser::new("Daniel", test_birthdate());

        assert_eq!(user1, user2);
        assert_eq!(user1.hash_code(), user2.hash_code());
    }

    #[test]
    fn mutating_a_copy_leaves_the_original_alone() {
        let original = ValueUser::new("Daniel", test_birthdate());
        let mut copy = original.clone();
        copy.set_name(Some("Alex".to_string()));

        assert_eq!(original.name(), Some("Daniel"));
        assert_eq!(copy.name(), Some("Alex"));
        assert_ne!(original, copy);
    }

    #[test]
    fn setting_birthdate_on_a_copy_leaves_the_original_alone() {
        let original = ValueUser::new("Daniel", test_birthdate());
        let mut copy = original.clone();
        let later = Utc.with_ymd_and_hms(1994, 4, 22, 0, 0, 0).unwrap();
        copy.set_birthdate(later);

        assert_eq!(original.birthdate(), test_birthdate());
        assert_eq!(copy.birthdate(), later);
        assert_eq!(copy.name(), original.name());
        assert_ne!(original, copy);
    }

    #[test]
    fn copy_with_birthdate_keeps_name() {
        let user1 = ValueUser::new("Daniel", test_birthdate());
        let later = Utc.with_ymd_and_hms(1994, 4, 22, 0, 0, 0).unwrap();
        let user2 = user1.copy_with(UserPatch::default().birthdate(later));

        assert_eq!(user2.birthdate(), later);
        assert_eq!(user2.name(), user1.name());
        assert_ne!(user1, user2);
    }

    #[test]
    fn mutated_user_equals_one_built_with_the_new_value() {
        let mut user1 = ValueUser::new("Daniel", test_birthdate());
        let user2 = ValueUser::new("Alex", test_birthdate());
        user1.set_name(Some("Alex".to_string()));

        assert_eq!(user1.name(), Some("Alex"));
        assert_eq!(user1, user2);
    }

    #[test]
    fn copy_with_no_overrides_is_equal() {
        let user1 = ValueUser::new("Daniel", test_birthdate());
        let user2 = user1.copy_with(UserPatch::default());

        assert_eq!(user1.name(), user2.name());
        assert_eq!(user1.birthdate(), user2.birthdate());
        assert_eq!(user1, user2);
    }

    #[test]
    fn copy_with_name_changes_only_the_name() {
        let user1 = ValueUser::new("Daniel", test_birthdate());
        let user2 = user1.copy_with(UserPatch::default().name("Alex"));

        assert_eq!(user2.name(), Some("Alex"));
        assert_eq!(user1.birthdate(), user2.birthdate());
        assert_ne!(user1.name(), user2.name());
        assert_ne!(user1, user2);
    }

    #[test]
    fn clearing_the_name_yields_an_anonymous_user() {
        let user = ValueUser::new("Daniel", test_birthdate());
        let cleared = user.copy_with(UserPatch::default().clear_name());
        assert_eq!(cleared, ValueUser::anonymous(test_birthdate()));
    }

    #[test]
    fn equal_users_collapse_in_a_hash_set() {
        let user1 = ValueUser::new("Daniel", test_birthdate());
        let user2 = ValueUser::new("Daniel", test_birthdate());

        let mut set = HashSet::new();
        assert!(set.insert(user1.clone()));
        assert!(!set.insert(user2.clone()));

        assert!(set.contains(&user1));
        assert!(set.contains(&user2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn json_round_trip_preserves_equality() {
        let user = ValueUser::new("Daniel", test_birthdate());
        let json = serde_json::to_string(&user).unwrap();
        let back: ValueUser = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
