//! Composite keys used to group and identify stored records.
//!
//! Every record kind lives under a single fixed ancestor key. Stores use the
//! encoded `kind/name` form as the grouping column and generate a
//! [`RecordId`] on insert.

use std::fmt;

use uuid::Uuid;

/// Grouping key under which all records of one kind are stored.
///
/// # Examples
/// ```
/// use timecard::domain::PUNCH_ANCESTOR;
///
/// assert_eq!(PUNCH_ANCESTOR.encode(), "Punch/default_punch");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AncestorKey {
    kind: &'static str,
    name: &'static str,
}

/// Ancestor shared by every punch record.
pub const PUNCH_ANCESTOR: AncestorKey = AncestorKey::new("Punch", "default_punch");

/// Ancestor shared by every directory user record.
pub const USER_ANCESTOR: AncestorKey = AncestorKey::new("User", "default_user");

impl AncestorKey {
    /// Build a key from its record kind and grouping name.
    #[must_use]
    pub const fn new(kind: &'static str, name: &'static str) -> Self {
        Self { kind, name }
    }

    /// Record kind, e.g. `Punch`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Grouping name within the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Encoded `kind/name` form used as the storage grouping column.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }
}

impl fmt::Display for AncestorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// Store-generated identifier for an inserted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Allocate a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
