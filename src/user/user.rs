//! Core user struct and methods
//!
//! This module contains the User struct, its validated constructors and the
//! role-dependent display text.

use serde::Serialize;
use std::fmt;

use crate::system::{RosterError, RosterResult};
use crate::types::UserId;
use crate::user::UserRole;

/// Represents a user registered in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: String,
    id: UserId,
    access_level: u32,
    role: UserRole,
}

impl User {
    /// Create a plain user
    ///
    /// Fails with [`RosterError::InvalidArgument`] if the name is empty or the
    /// access level is negative.
    pub fn new(name: impl Into<String>, id: i64, access_level: i32) -> RosterResult<Self> {
        Self::with_role(name, id, access_level, UserRole::Base)
    }

    /// Create a student in the given study group
    pub fn student(
        name: impl Into<String>,
        id: i64,
        access_level: i32,
        group: impl Into<String>,
    ) -> RosterResult<Self> {
        Self::with_role(name, id, access_level, UserRole::Student { group: group.into() })
    }

    /// Create a teacher in the given department
    pub fn teacher(
        name: impl Into<String>,
        id: i64,
        access_level: i32,
        department: impl Into<String>,
    ) -> RosterResult<Self> {
        Self::with_role(name, id, access_level, UserRole::Teacher { department: department.into() })
    }

    /// Create an administrator with the given role description
    pub fn administrator(
        name: impl Into<String>,
        id: i64,
        access_level: i32,
        role: impl Into<String>,
    ) -> RosterResult<Self> {
        Self::with_role(name, id, access_level, UserRole::Administrator { role: role.into() })
    }

    /// Create a user with an explicit role
    pub fn with_role(
        name: impl Into<String>,
        id: i64,
        access_level: i32,
        role: UserRole,
    ) -> RosterResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RosterError::invalid_argument("Invalid user name."));
        }
        let access_level = u32::try_from(access_level)
            .map_err(|_| RosterError::invalid_argument("Invalid access level."))?;

        Ok(Self { name, id: UserId::new(id), access_level, role })
    }

    /// User's name (never empty)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// User's identifier
    pub fn id(&self) -> UserId {
        self.id
    }

    /// User's access level
    pub fn access_level(&self) -> u32 {
        self.access_level
    }

    /// User's role
    pub fn role(&self) -> &UserRole {
        &self.role
    }

    /// Human-readable summary; wording depends on the role
    pub fn display_info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.role {
            UserRole::Base => write!(
                f,
                "Name: {}, ID: {}, Access level: {}",
                self.name, self.id, self.access_level
            ),
            UserRole::Student { group } => write!(
                f,
                "Student: {}, Group: {}, Access: {}",
                self.name, group, self.access_level
            ),
            UserRole::Teacher { department } => write!(
                f,
                "Teacher: {}, Department: {}, Access: {}",
                self.name, department, self.access_level
            ),
            UserRole::Administrator { role } => write!(
                f,
                "Administrator: {}, Role: {}, Access: {}",
                self.name, role, self.access_level
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoleKind;

    #[test]
    fn test_user_creation() {
        let user = User::new("Igor", 1, 2).unwrap();
        assert_eq!(user.name(), "Igor");
        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.access_level(), 2);
        assert_eq!(user.role().kind(), RoleKind::Base);
    }

    #[test]
    fn test_zero_access_level_is_valid() {
        let user = User::new("Guest", 0, 0).unwrap();
        assert_eq!(user.access_level(), 0);
    }

    #[test]
    fn test_negative_id_is_accepted() {
        let user = User::new("Ghost", -5, 1).unwrap();
        assert_eq!(user.id().value(), -5);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = User::new("", 1, 2).unwrap_err();
        assert!(matches!(err, RosterError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: Invalid user name.");
    }

    #[test]
    fn test_negative_access_level_rejected() {
        let err = User::teacher("Natalya", 2, -1, "Computer Science").unwrap_err();
        assert!(matches!(err, RosterError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: Invalid access level.");
    }

    #[test]
    fn test_display_depends_on_role() {
        let base = User::new("Igor", 1, 2).unwrap();
        assert_eq!(base.display_info(), "Name: Igor, ID: 1, Access level: 2");

        let student = User::student("Igor", 1, 2, "02").unwrap();
        assert_eq!(student.display_info(), "Student: Igor, Group: 02, Access: 2");

        let teacher = User::teacher("Natalya", 2, 3, "Computer Science").unwrap();
        assert_eq!(
            teacher.display_info(),
            "Teacher: Natalya, Department: Computer Science, Access: 3"
        );

        let admin = User::administrator("Viktor", 3, 5, "System administrator").unwrap();
        assert_eq!(
            admin.display_info(),
            "Administrator: Viktor, Role: System administrator, Access: 5"
        );
    }

    #[test]
    fn test_user_serializes_role() {
        let user = User::student("Igor", 1, 2, "02").unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["name"], "Igor");
        assert_eq!(json["id"], 1);
        assert_eq!(json["access_level"], 2);
        assert_eq!(json["role"]["kind"], "student");
        assert_eq!(json["role"]["group"], "02");
    }
}
