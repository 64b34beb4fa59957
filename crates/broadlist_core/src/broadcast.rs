//! Broadcast operations over every element of a list.
//!
//! # Responsibility
//! - Apply one per-element operation to every element in order and collect
//!   the results in a new list.
//! - Enforce all-or-nothing semantics: the first non-conforming element
//!   aborts the broadcast and no partial result escapes.
//!
//! # Invariants
//! - Result lists carry no-op hooks, not the source list's hooks.
//! - Errors name the zero-based index of the first failing element.

use crate::capability::{Callable, Magnitude};
use crate::list::BroadcastList;
use log::debug;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Error returned by the fallible broadcast operations.
///
/// Each variant carries the index of the first element, in iteration order,
/// that does not support the requested operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastError {
    /// An element does not expose the requested attribute.
    AttributeUnavailable {
        /// Caller-supplied name of the attribute being read.
        attribute: String,
        /// Index of the first element lacking the attribute.
        index: usize,
    },
    /// An element cannot be invoked.
    NotCallable {
        /// Index of the first non-callable element.
        index: usize,
    },
    /// An element has no magnitude.
    MagnitudeUnsupported {
        /// Index of the first element without a magnitude.
        index: usize,
    },
}

impl Display for BroadcastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeUnavailable { attribute, index } => {
                write!(
                    f,
                    "attribute `{attribute}` unavailable on element at index {index}"
                )
            }
            Self::NotCallable { index } => {
                write!(f, "element at index {index} is not callable")
            }
            Self::MagnitudeUnsupported { index } => {
                write!(f, "element at index {index} has no magnitude")
            }
        }
    }
}

impl Error for BroadcastError {}

impl<T> BroadcastList<T> {
    /// Applies `op` to every element in order and collects the results in a
    /// new list with no-op hooks.
    ///
    /// This is the total form of attribute broadcast: the caller supplies
    /// the per-element read explicitly, so there is nothing that can fail
    /// at runtime.
    pub fn broadcast<U, F>(&self, op: F) -> BroadcastList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(op).collect()
    }

    /// Applies a partial per-element read to every element in order.
    ///
    /// `attribute` names the read for error reporting only. The first
    /// element for which `op` returns `None` aborts the broadcast; results
    /// computed so far are discarded.
    ///
    /// # Errors
    /// Returns [`BroadcastError::AttributeUnavailable`] with the attribute
    /// name and the failing element's index.
    pub fn try_broadcast<U, F>(
        &self,
        attribute: &str,
        mut op: F,
    ) -> Result<BroadcastList<U>, BroadcastError>
    where
        F: FnMut(&T) -> Option<U>,
    {
        let mut results = Vec::with_capacity(self.len());
        for (index, element) in self.iter().enumerate() {
            match op(element) {
                Some(value) => results.push(value),
                None => {
                    debug!(
                        "event=broadcast module=broadcast status=error \
                         kind=attribute attribute={attribute} index={index}"
                    );
                    return Err(BroadcastError::AttributeUnavailable {
                        attribute: attribute.to_string(),
                        index,
                    });
                }
            }
        }
        Ok(BroadcastList::from(results))
    }

    /// Invokes every element with the same arguments and collects the
    /// results in a new list.
    ///
    /// # Errors
    /// Returns [`BroadcastError::NotCallable`] at the first element whose
    /// [`Callable::try_call`] returns `None`; no partial result escapes.
    pub fn call<A>(&self, args: A) -> Result<BroadcastList<T::Output>, BroadcastError>
    where
        T: Callable<A>,
        A: Clone,
    {
        let mut results = Vec::with_capacity(self.len());
        for (index, element) in self.iter().enumerate() {
            match element.try_call(args.clone()) {
                Some(value) => results.push(value),
                None => {
                    debug!(
                        "event=broadcast module=broadcast status=error kind=call index={index}"
                    );
                    return Err(BroadcastError::NotCallable { index });
                }
            }
        }
        Ok(BroadcastList::from(results))
    }

    /// Maps the magnitude operation over every element and collects the
    /// results in a new list.
    ///
    /// # Errors
    /// Returns [`BroadcastError::MagnitudeUnsupported`] at the first
    /// element whose [`Magnitude::magnitude`] returns `None`; no partial
    /// result escapes.
    pub fn magnitude(&self) -> Result<BroadcastList<T::Output>, BroadcastError>
    where
        T: Magnitude,
    {
        let mut results = Vec::with_capacity(self.len());
        for (index, element) in self.iter().enumerate() {
            match element.magnitude() {
                Some(value) => results.push(value),
                None => {
                    debug!(
                        "event=broadcast module=broadcast status=error \
                         kind=magnitude index={index}"
                    );
                    return Err(BroadcastError::MagnitudeUnsupported { index });
                }
            }
        }
        Ok(BroadcastList::from(results))
    }
}
