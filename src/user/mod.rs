//! User modeling
//!
//! This module contains the roster's users and the role variants that change
//! how a user is described.
//!
//! # Overview
//!
//! - **User**: Validated identity holding a name, an id and an access level
//! - **UserRole**: Tagged role variant (base, student, teacher, administrator)
//!
//! # Usage Example
//!
//! ```rust
//! use access_roster::user::*;
//!
//! let student = User::student("Igor", 1, 2, "02")?;
//! assert_eq!(student.access_level(), 2);
//! assert_eq!(student.display_info(), "Student: Igor, Group: 02, Access: 2");
//!
//! // Invalid input is rejected at construction
//! assert!(User::new("", 4, 1).is_err());
//! # Ok::<(), access_roster::system::RosterError>(())
//! ```

pub mod role;
#[allow(clippy::module_inception)]
pub mod user;

// Re-export all public types for convenience
pub use role::UserRole;
pub use user::User;
