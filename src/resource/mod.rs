//! Resources and access rules
//!
//! A resource names something users want to reach and the minimum access
//! level needed to reach it.
//!
//! # Usage Example
//!
//! ```rust
//! use access_roster::resource::Resource;
//! use access_roster::user::User;
//!
//! let laboratory = Resource::new("Laboratory", 3)?;
//! let igor = User::new("Igor", 1, 2)?;
//! assert!(!laboratory.check_access(&igor));
//! # Ok::<(), access_roster::system::RosterError>(())
//! ```

#[allow(clippy::module_inception)]
pub mod resource;

pub use resource::Resource;
