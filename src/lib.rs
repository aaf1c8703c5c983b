//! Access Roster
//!
//! A role-based access control roster: users with access levels, resources
//! with required levels, and a system that checks every user against every
//! resource.
//!
//! # Overview
//!
//! Users carry a role (student, teacher, administrator or plain user) that
//! changes how they are described but never how access is decided: a user may
//! access a resource iff the user's access level is at least the resource's
//! required level.
//!
//! ## Quick Start
//!
//! ```rust
//! use access_roster::*;
//!
//! let mut system = AccessControlSystem::new();
//! system.add_user(User::student("Igor", 1, 2, "02")?);
//! system.add_user(User::administrator("Viktor", 3, 5, "System administrator")?);
//! system.add_user(User::teacher("Natalya", 2, 3, "Computer Science")?);
//! system.add_resource(Resource::new("Laboratory", 3)?);
//!
//! for check in system.check_access_for_all() {
//!     println!("{}", check);
//! }
//!
//! system.sort_users_by_access_level();
//! # Ok::<(), RosterError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, role kinds and configuration
//! - [`user`]: Users and their role variants
//! - [`resource`]: Resources and the access rule
//! - [`system`]: The access control system, roster files, errors and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod resource;
pub mod system;
pub mod types;
pub mod user;

// Core types and identifiers
pub use types::{
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    // Identifiers
    ResourceHandle,
    // Enums
    RoleKind,
    RosterConfig,
    UserHandle,
    UserId,
};

// User types
pub use user::{User, UserRole};

// Resource types
pub use resource::Resource;

// System types and functionality
pub use system::{
    AccessCheck, AccessControlSystem, LoggingConfig, RosterError, RosterRecord, RosterResult,
};
