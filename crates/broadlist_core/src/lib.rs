//! Broadcasting sequence container.
//!
//! [`BroadcastList`] behaves like an ordinary ordered sequence and can
//! additionally broadcast one operation across every element, collecting
//! the results in a new list of the same kind. Caller-supplied hooks fire
//! after every insertion and removal.
//!
//! ```
//! use broadlist_core::BroadcastList;
//!
//! let mut readings = BroadcastList::from(vec![3_i64, -4, 5]);
//! readings.append(-6);
//!
//! let doubled = readings.broadcast(|value| value * 2);
//! assert_eq!(doubled, vec![6, -8, 10, -12]);
//!
//! let magnitudes = readings.magnitude().unwrap();
//! assert_eq!(magnitudes, vec![3, 4, 5, 6]);
//! ```
//!
//! The list wraps its backing storage rather than extending a sequence
//! type, so native operations and broadcasts live in separate namespaces
//! and can never shadow each other. Broadcasts are all-or-nothing: the
//! first element that does not support the requested operation aborts the
//! broadcast with an error naming its index, and no partial list escapes.

pub mod broadcast;
pub mod capability;
pub mod hooks;
pub mod list;
pub mod logging;

pub use broadcast::BroadcastError;
pub use capability::{Callable, Magnitude};
pub use hooks::Hooks;
pub use list::{BroadcastList, RemoveError};
pub use logging::{default_log_level, init_logging, logging_status};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
