//! Access control system, persistence and runtime support
//!
//! This module contains the system that owns the roster, the access decisions
//! it produces, roster file storage, error handling and logging setup.
//!
//! # Overview
//!
//! - **AccessControlSystem**: Owns users and resources; bulk display, access
//!   checks, sorting, lookup and roster file persistence
//! - **AccessCheck**: One access decision for a (user, resource) pair
//! - **storage**: The `name,id,access_level` roster file format
//! - **RosterError**: Error type for construction and persistence
//! - **LoggingConfig**: Tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use access_roster::resource::Resource;
//! use access_roster::system::*;
//! use access_roster::user::User;
//!
//! let mut system = AccessControlSystem::new();
//! system.add_user(User::student("Igor", 1, 2, "02")?);
//! system.add_user(User::administrator("Viktor", 3, 5, "System administrator")?);
//! system.add_resource(Resource::new("Laboratory", 3)?);
//!
//! let granted: Vec<bool> = system.check_access_for_all().iter().map(|c| c.granted).collect();
//! assert_eq!(granted, vec![false, true]);
//!
//! system.sort_users_by_access_level();
//! assert_eq!(system.users().next().unwrap().name(), "Viktor");
//! # Ok::<(), RosterError>(())
//! ```

pub mod access_check;
pub mod access_control;
pub mod error;
pub mod logging;
pub mod storage;

// Re-export all public types for convenience
pub use access_check::*;
pub use access_control::*;
pub use error::*;
pub use logging::*;
pub use storage::{read_roster, write_roster, write_user_profiles, RosterRecord};
