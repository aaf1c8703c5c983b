//! Role variants for users
//!
//! A user's role only changes how the user is described; access decisions
//! look at the access level alone.

use serde::{Deserialize, Serialize};

use crate::types::RoleKind;

/// Role held by a user together with its role-specific detail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserRole {
    /// Plain user
    #[default]
    Base,
    /// Student in a study group
    Student {
        /// Study group the student belongs to
        group: String,
    },
    /// Teacher attached to a department
    Teacher {
        /// Department the teacher works in
        department: String,
    },
    /// Administrator with a named responsibility
    Administrator {
        /// Administrative role, e.g. "System administrator"
        role: String,
    },
}

impl UserRole {
    /// Get the kind of this role without its detail
    pub fn kind(&self) -> RoleKind {
        match self {
            UserRole::Base => RoleKind::Base,
            UserRole::Student { .. } => RoleKind::Student,
            UserRole::Teacher { .. } => RoleKind::Teacher,
            UserRole::Administrator { .. } => RoleKind::Administrator,
        }
    }

    /// Get the role-specific detail, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            UserRole::Base => None,
            UserRole::Student { group } => Some(group.as_str()),
            UserRole::Teacher { department } => Some(department.as_str()),
            UserRole::Administrator { role } => Some(role.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_kind_and_detail() {
        let student = UserRole::Student { group: "02".to_string() };
        assert_eq!(student.kind(), RoleKind::Student);
        assert_eq!(student.detail(), Some("02"));

        assert_eq!(UserRole::Base.kind(), RoleKind::Base);
        assert_eq!(UserRole::Base.detail(), None);
        assert_eq!(UserRole::default(), UserRole::Base);
    }

    #[test]
    fn test_role_json_is_tagged() {
        let role = UserRole::Teacher { department: "Computer Science".to_string() };
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, r#"{"kind":"teacher","department":"Computer Science"}"#);

        let parsed: UserRole = serde_json::from_str(r#"{"kind":"base"}"#).unwrap();
        assert_eq!(parsed, UserRole::Base);
    }
}
