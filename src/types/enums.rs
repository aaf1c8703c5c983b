//! Enumeration types for the access roster

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of role a user holds, without the role-specific detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    /// Plain user with no role-specific detail
    Base,
    /// Student belonging to a group
    Student,
    /// Teacher belonging to a department
    Teacher,
    /// Administrator holding a named role
    Administrator,
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleKind::Base => write!(f, "User"),
            RoleKind::Student => write!(f, "Student"),
            RoleKind::Teacher => write!(f, "Teacher"),
            RoleKind::Administrator => write!(f, "Administrator"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_kind_display() {
        assert_eq!(format!("{}", RoleKind::Base), "User");
        assert_eq!(format!("{}", RoleKind::Administrator), "Administrator");
    }
}
