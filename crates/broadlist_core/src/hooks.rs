//! Lifecycle hooks fired after list mutations.
//!
//! # Responsibility
//! - Define the hook signature shared by insert and remove notifications.
//! - Provide no-op defaults so hook-free lists carry no extra ceremony.
//!
//! # Invariants
//! - Hooks run only after the mutation is visible in the list.
//! - Hooks are fixed at construction and never replaced afterwards.

use crate::list::BroadcastList;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// Signature shared by insert and remove hooks.
///
/// The first argument is the list *after* the mutation took effect, the
/// second is the element that was inserted or removed. A hook that does not
/// accept both arguments does not compile, so the two-argument contract
/// needs no runtime check.
pub type HookFn<T> = dyn Fn(&BroadcastList<T>, &T);

/// Hook pair attached to a [`BroadcastList`] at construction.
///
/// Hooks are reference-counted so cloned lists share them. This keeps the
/// container deliberately single-threaded; wrap it in external
/// synchronization if you need to share it across threads.
pub struct Hooks<T> {
    on_insert: Rc<HookFn<T>>,
    on_remove: Rc<HookFn<T>>,
}

impl<T> Hooks<T> {
    /// Creates a hook pair where both hooks do nothing.
    pub fn new() -> Self {
        Self {
            on_insert: Rc::new(|_, _| {}),
            on_remove: Rc::new(|_, _| {}),
        }
    }

    /// Sets the hook fired after every successful insertion.
    pub fn on_insert(mut self, hook: impl Fn(&BroadcastList<T>, &T) + 'static) -> Self {
        self.on_insert = Rc::new(hook);
        self
    }

    /// Sets the hook fired after every successful removal.
    pub fn on_remove(mut self, hook: impl Fn(&BroadcastList<T>, &T) + 'static) -> Self {
        self.on_remove = Rc::new(hook);
        self
    }

    pub(crate) fn notify_insert(&self, list: &BroadcastList<T>, element: &T) {
        (self.on_insert)(list, element);
    }

    pub(crate) fn notify_remove(&self, list: &BroadcastList<T>, element: &T) {
        (self.on_remove)(list, element);
    }
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        Self {
            on_insert: Rc::clone(&self.on_insert),
            on_remove: Rc::clone(&self.on_remove),
        }
    }
}

impl<T> Debug for Hooks<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}
