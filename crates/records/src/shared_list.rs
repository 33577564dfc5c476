//! A list shared by reference and compared by identity.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::cell::RefCell;
use std::rc::Rc;

use serde::{Serialize, Serializer};

/// Handle to a growable list of strings owned jointly by every clone.
///
/// Cloning the handle never copies the contents: pushes through any clone are
/// visible through all of them. Equality and hashing look at *which* list a
/// handle points to, not at what it contains, so two freshly allocated empty
/// lists are unequal while two handles to one list stay equal whatever is
/// pushed into it.
#[derive(Clone, Default)]
pub struct SharedList(Rc<RefCell<Vec<String>>>);

impl SharedList {
    /// Allocate a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        Self(Rc::new(RefCell::new(items)))
    }

    pub fn push(&self, item: impl Into<String>) {
        self.0.borrow_mut().push(item.into());
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// True when both handles point to the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for SharedList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for SharedList {}

impl Hash for SharedList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(Rc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for SharedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(items) => f.debug_tuple("SharedList").field(&*items).finish(),
            Err(_) => f.write_str("SharedList(<borrowed>)"),
        }
    }
}

impl Serialize for SharedList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.borrow().serialize(serializer)
    }
}
