//! Result of checking one user against one resource

use std::fmt;

use crate::types::{ResourceHandle, UserHandle};

/// Access decision for a (user, resource) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCheck {
    /// User that was checked
    pub user: UserHandle,
    /// Name of the user at check time
    pub user_name: String,
    /// Resource that was checked
    pub resource: ResourceHandle,
    /// Display text of the resource at check time
    pub resource_info: String,
    /// Whether access is granted
    pub granted: bool,
}

impl fmt::Display for AccessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.granted { "has access to" } else { "does NOT have access to" };
        write!(f, "{} {} {}", self.user_name, verdict, self.resource_info)
    }
}
