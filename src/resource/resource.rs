//! Resource definition and access checking
//!
//! This module contains the Resource struct and the access rule that compares
//! a user's access level with the level a resource requires.

use serde::Serialize;
use std::fmt;

use crate::system::{RosterError, RosterResult};
use crate::user::User;

/// A named resource guarded by a minimum access level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    name: String,
    required_access_level: u32,
}

impl Resource {
    /// Create a new resource
    ///
    /// Fails with [`RosterError::InvalidArgument`] if the name is empty or the
    /// required level is negative.
    pub fn new(name: impl Into<String>, required_access_level: i32) -> RosterResult<Self> {
        let name = name.into();
        let required_access_level = u32::try_from(required_access_level).ok();

        match required_access_level {
            Some(level) if !name.is_empty() => Ok(Self { name, required_access_level: level }),
            _ => Err(RosterError::invalid_argument("Invalid resource data")),
        }
    }

    /// Resource name (never empty)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum access level a user needs
    pub fn required_access_level(&self) -> u32 {
        self.required_access_level
    }

    /// Check whether the user may access this resource
    pub fn check_access(&self, user: &User) -> bool {
        user.access_level() >= self.required_access_level
    }

    /// Human-readable summary of the resource
    pub fn display_info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resource: {}, Required access level: {}", self.name, self.required_access_level)
    }
}
