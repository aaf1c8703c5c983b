//! Identifier types for the access roster
//!
//! This module contains the user identifier carried by every roster record and
//! the arena handles the access control system hands out for stored entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier assigned to a user by whoever registers them
///
/// Identifiers are not validated and need not be unique; they are persisted
/// verbatim in the roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Wrap a raw identifier
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a user stored in an [`AccessControlSystem`](crate::system::AccessControlSystem)
///
/// Handles index the system's user arena and stay valid when the display
/// order is re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserHandle(pub(crate) usize);

impl UserHandle {
    /// Position of the user in the arena (insertion order)
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for UserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USER#{}", self.0)
    }
}

/// Handle to a resource stored in an [`AccessControlSystem`](crate::system::AccessControlSystem)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle(pub(crate) usize);

impl ResourceHandle {
    /// Position of the resource in the arena (insertion order)
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RES#{}", self.0)
    }
}
