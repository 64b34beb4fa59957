//! Broadcasting list container and its native sequence operations.
//!
//! # Responsibility
//! - Own the ordered backing storage and the lifecycle hook pair.
//! - Expose the fixed set of native sequence operations.
//!
//! # Invariants
//! - Insertion order is preserved; duplicates are allowed.
//! - `append`/`remove` fire their hook exactly once, after the mutation is
//!   visible. No other operation fires hooks.
//! - A failed removal leaves the list untouched.

use crate::hooks::Hooks;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;
use std::slice;
use std::vec;

/// Error returned by [`BroadcastList::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    /// No element equal to the removal target exists in the list.
    NotFound,
}

impl Display for RemoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "element not in list"),
        }
    }
}

impl Error for RemoveError {}

/// Ordered, mutable sequence that can broadcast operations across all of
/// its elements and notifies hooks after insertions and removals.
///
/// The list wraps its backing storage instead of inheriting a sequence
/// type, so the native operations below are a fixed, enumerable set and can
/// never be shadowed by a broadcast: broadcasting only ever happens through
/// the explicit broadcast API in [`crate::broadcast`].
pub struct BroadcastList<T> {
    storage: Vec<T>,
    hooks: Hooks<T>,
}

impl<T> BroadcastList<T> {
    /// Creates an empty list with no-op hooks.
    pub fn new() -> Self {
        Self::with_hooks(Hooks::new())
    }

    /// Creates an empty list with the given hook pair.
    pub fn with_hooks(hooks: Hooks<T>) -> Self {
        Self {
            storage: Vec::new(),
            hooks,
        }
    }

    /// Creates a list from initial elements and a hook pair.
    ///
    /// The insert hook runs once per initial element, in iteration order.
    /// Storage is fully populated before the first hook call, so every
    /// construction-time hook observes the complete list rather than an
    /// incrementally growing prefix.
    pub fn with_hooks_from<I>(elements: I, hooks: Hooks<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let list = Self {
            storage: elements.into_iter().collect(),
            hooks,
        };
        for element in &list.storage {
            list.hooks.notify_insert(&list, element);
        }
        list
    }

    /// Appends an element at the end of the list, then fires the insert
    /// hook with the updated list and the new element.
    ///
    /// A panic inside the hook propagates to the caller; the insertion
    /// itself is not rolled back.
    pub fn append(&mut self, element: T) {
        self.storage.push(element);
        debug!(
            "event=append module=list status=ok len={}",
            self.storage.len()
        );
        let list: &Self = &*self;
        if let Some(element) = list.storage.last() {
            list.hooks.notify_insert(list, element);
        }
    }

    /// Removes the first element equal to `target` and returns it, then
    /// fires the remove hook with the updated list and the removed element.
    ///
    /// # Errors
    /// Returns [`RemoveError::NotFound`] when no equal element exists; the
    /// list is left unchanged and no hook fires.
    pub fn remove(&mut self, target: &T) -> Result<T, RemoveError>
    where
        T: PartialEq,
    {
        let index = match self.storage.iter().position(|element| element == target) {
            Some(index) => index,
            None => {
                debug!(
                    "event=remove module=list status=not_found len={}",
                    self.storage.len()
                );
                return Err(RemoveError::NotFound);
            }
        };

        let removed = self.storage.remove(index);
        debug!(
            "event=remove module=list status=ok index={index} len={}",
            self.storage.len()
        );
        let list: &Self = &*self;
        list.hooks.notify_remove(list, &removed);
        Ok(removed)
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    /// Returns the first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Returns the last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Consumes the list and returns the backing storage. Hooks are
    /// dropped; nothing fires.
    pub fn into_inner(self) -> Vec<T> {
        self.storage
    }
}

impl<T> Default for BroadcastList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BroadcastList<T> {
    /// Clones the elements; the hook pair is shared with the original.
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            hooks: self.hooks.clone(),
        }
    }
}

impl<T: Debug> Debug for BroadcastList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for BroadcastList<T> {
    /// Equality compares elements only; hooks never participate.
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq> Eq for BroadcastList<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for BroadcastList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.storage == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for BroadcastList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.storage == *other
    }
}

impl<T> From<Vec<T>> for BroadcastList<T> {
    /// Takes the vector as backing storage with no-op hooks. No hook fires.
    fn from(storage: Vec<T>) -> Self {
        Self {
            storage,
            hooks: Hooks::new(),
        }
    }
}

impl<T> FromIterator<T> for BroadcastList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for BroadcastList<T> {
    /// Native bulk mutator; does not fire hooks.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

impl<T> Index<usize> for BroadcastList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T> IntoIterator for BroadcastList<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BroadcastList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T: Serialize> Serialize for BroadcastList<T> {
    /// Serializes the element sequence only; hooks are not serializable.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.storage.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for BroadcastList<T> {
    /// Deserializes the element sequence and installs no-op hooks.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
