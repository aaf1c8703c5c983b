//! Access control system
//!
//! The system owns every user and resource in two arenas. Users additionally
//! have a display order that starts as insertion order and is permuted by
//! sorting; handles index the arenas and are unaffected by sorting.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::resource::Resource;
use crate::system::{storage, AccessCheck, RosterResult};
use crate::types::{ResourceHandle, UserHandle};
use crate::user::User;

/// Roster of users and resources with bulk access checking and persistence
#[derive(Debug, Clone, Default)]
pub struct AccessControlSystem {
    users: Vec<User>,
    resources: Vec<Resource>,
    user_order: Vec<UserHandle>,
}

impl AccessControlSystem {
    /// Create an empty system
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user; no duplicate checks
    pub fn add_user(&mut self, user: User) -> UserHandle {
        let handle = UserHandle(self.users.len());
        debug!(
            name = user.name(),
            id = %user.id(),
            role = %user.role().kind(),
            detail = ?user.role().detail(),
            %handle,
            "Adding user"
        );
        self.users.push(user);
        self.user_order.push(handle);
        handle
    }

    /// Append a resource; no duplicate checks
    pub fn add_resource(&mut self, resource: Resource) -> ResourceHandle {
        let handle = ResourceHandle(self.resources.len());
        debug!(name = resource.name(), %handle, "Adding resource");
        self.resources.push(resource);
        handle
    }

    /// Look up a user by handle
    pub fn user(&self, handle: UserHandle) -> Option<&User> {
        self.users.get(handle.0)
    }

    /// Look up a resource by handle
    pub fn resource(&self, handle: ResourceHandle) -> Option<&Resource> {
        self.resources.get(handle.0)
    }

    /// Users in display order
    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.user_order.iter().map(move |handle| &self.users[handle.0])
    }

    /// Resources in insertion order
    pub fn resources(&self) -> impl Iterator<Item = &Resource> + '_ {
        self.resources.iter()
    }

    /// Number of users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of resources
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Display text of every user, in display order
    pub fn user_summaries(&self) -> Vec<String> {
        self.users().map(User::display_info).collect()
    }

    /// Write every user's display text followed by a `---` separator line
    pub fn display_all_users<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for user in self.users() {
            writeln!(out, "{}", user)?;
            writeln!(out, "---")?;
        }
        Ok(())
    }

    /// Check every user against every resource
    ///
    /// Users are visited in display order, resources in insertion order.
    pub fn check_access_for_all(&self) -> Vec<AccessCheck> {
        let mut checks = Vec::with_capacity(self.users.len() * self.resources.len());

        for &user_handle in &self.user_order {
            let user = &self.users[user_handle.0];
            for (index, resource) in self.resources.iter().enumerate() {
                checks.push(AccessCheck {
                    user: user_handle,
                    user_name: user.name().to_string(),
                    resource: ResourceHandle(index),
                    resource_info: resource.display_info(),
                    granted: resource.check_access(user),
                });
            }
        }

        info!(
            checks = checks.len(),
            granted = checks.iter().filter(|c| c.granted).count(),
            "Checked access for all users"
        );
        checks
    }

    /// Write one line per access decision
    pub fn report_access_for_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for check in self.check_access_for_all() {
            writeln!(out, "{}", check)?;
        }
        Ok(())
    }

    /// Sort the display order by access level, highest first
    ///
    /// The sort is stable: users with equal levels keep their relative order.
    pub fn sort_users_by_access_level(&mut self) {
        let users = &self.users;
        self.user_order
            .sort_by(|a, b| users[b.0].access_level().cmp(&users[a.0].access_level()));
        debug!("Sorted {} users by access level", self.user_order.len());
    }

    /// Handle of the first user (in display order) with exactly this name
    pub fn find_user_by_name(&self, name: &str) -> Option<UserHandle> {
        self.user_order.iter().copied().find(|handle| self.users[handle.0].name() == name)
    }

    /// First user (in display order) with exactly this name
    pub fn find_user(&self, name: &str) -> Option<&User> {
        self.find_user_by_name(name).and_then(|handle| self.user(handle))
    }

    /// Write all users to a roster file in display order
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> RosterResult<usize> {
        let written = storage::write_roster(path.as_ref(), self.users())?;
        info!(users = written, "Saved roster");
        Ok(written)
    }

    /// Append the users recorded in a roster file
    ///
    /// Every loaded user is a base user; role variants are not persisted.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> RosterResult<usize> {
        let loaded = storage::read_roster(path.as_ref(), |user| {
            self.add_user(user);
        })?;
        info!(users = loaded, "Loaded roster");
        Ok(loaded)
    }
}
