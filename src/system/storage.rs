//! Roster file format
//!
//! One user per line as `name,id,access_level`. Fields are not escaped, so
//! names containing a comma or a line break are refused when writing. Roles
//! are not stored; records always come back as base users.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::system::{RosterError, RosterResult};
use crate::user::User;

/// One parsed roster line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    /// User name as stored
    pub name: String,
    /// User identifier
    pub id: i64,
    /// Access level as stored (may be negative in a hand-edited file)
    pub access_level: i32,
}

impl RosterRecord {
    /// Take the persisted fields of a user
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            id: user.id().value(),
            // Levels come from validated i32 input
            access_level: i32::try_from(user.access_level()).unwrap_or(i32::MAX),
        }
    }

    /// Parse a single `name,id,access_level` line
    pub fn parse(line_number: usize, line: &str) -> RosterResult<Self> {
        let mut fields = line.trim_end_matches('\r').split(',');
        let (Some(name), Some(id), Some(level), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(RosterError::malformed_record(line_number, line));
        };

        let id = id.trim().parse::<i64>();
        let access_level = level.trim().parse::<i32>();
        match (id, access_level) {
            (Ok(id), Ok(access_level)) => {
                Ok(Self { name: name.to_string(), id, access_level })
            }
            _ => Err(RosterError::malformed_record(line_number, line)),
        }
    }

    /// Check that the record reads back as the same single line
    pub fn ensure_storable(&self) -> RosterResult<()> {
        if self.name.contains([',', '\n', '\r']) {
            return Err(RosterError::invalid_argument(format!(
                "User name {:?} cannot be stored in a roster file.",
                self.name
            )));
        }
        Ok(())
    }

    /// Build a base user from this record, applying the usual validation
    pub fn into_user(self) -> RosterResult<User> {
        User::new(self.name, self.id, self.access_level)
    }
}

impl std::fmt::Display for RosterRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.name, self.id, self.access_level)
    }
}

/// Write users to a roster file, replacing any existing content
///
/// Every record is checked before the file is touched; a name that would not
/// read back fails with [`RosterError::InvalidArgument`] and nothing is written.
pub fn write_roster<'a, P, I>(path: P, users: I) -> RosterResult<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a User>,
{
    let records = users
        .into_iter()
        .map(|user| {
            let record = RosterRecord::from_user(user);
            record.ensure_storable().map(|()| record)
        })
        .collect::<RosterResult<Vec<_>>>()?;

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;

    for record in &records {
        writeln!(writer, "{}", record)?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Read users from a roster file
///
/// Blank lines are ignored and lines that do not parse are skipped with a
/// warning. A parsed record that fails user validation stops the read; users
/// read before it are handed to `sink` already.
pub fn read_roster<P, F>(path: P, mut sink: F) -> RosterResult<usize>
where
    P: AsRef<Path>,
    F: FnMut(User),
{
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let mut loaded = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = match RosterRecord::parse(index + 1, &line) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping roster line: {}", e);
                continue;
            }
        };

        debug!(line = index + 1, name = %record.name, "Loaded roster record");
        sink(record.into_user()?);
        loaded += 1;
    }

    Ok(loaded)
}

/// Write users as JSON Lines, one serialized user (role included) per line
///
/// Unlike the roster file this keeps each user's role.
pub fn write_user_profiles<'a, P, I>(path: P, users: I) -> RosterResult<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a User>,
{
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;

    for user in users {
        let json_line = serde_json::to_string(user)?;
        writeln!(writer, "{}", json_line)?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}
