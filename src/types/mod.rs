//! Core types, identifiers and configuration for the access roster
//!
//! # Overview
//!
//! - **Identifiers**: `UserId` plus the arena handles `UserHandle` and `ResourceHandle`
//! - **Enums**: `RoleKind`, the role tag without its detail
//! - **Configuration**: Roster configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use access_roster::types::*;
//!
//! let config = RosterConfig::default();
//! assert_eq!(config.users.len(), 3);
//! config.validate()?;
//! # Ok::<(), ConfigValidationError>(())
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
