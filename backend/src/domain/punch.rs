//! Punch records: arrival and leave events stamped by the signed-in user.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Display format for punch timestamps (`YYYY-MM-DD HH:MM`).
pub const PUNCH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The two kinds of punch a user can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunchKind {
    /// The user arrived.
    Arrival,
    /// The user left.
    Leave,
}

impl PunchKind {
    /// Stored literal for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arrival => "arrival",
            Self::Leave => "leave",
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored kind is neither `arrival` nor `leave`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown punch kind: {value}")]
pub struct PunchKindParseError {
    value: String,
}

impl FromStr for PunchKind {
    type Err = PunchKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arrival" => Ok(Self::Arrival),
            "leave" => Ok(Self::Leave),
            other => Err(PunchKindParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// An immutable arrival or leave event.
///
/// ## Invariants
/// - `puncher` is the email of the identity that recorded the punch.
/// - `kind` is one of the two [`PunchKind`] literals.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use timecard::domain::{Punch, PunchKind};
///
/// let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 42).unwrap();
/// let punch = Punch::new("ada@example.com", PunchKind::Arrival, at);
/// assert_eq!(punch.formatted_time(), "2026-10-18 09:05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Punch {
    puncher: String,
    kind: PunchKind,
    punched_at: DateTime<Utc>,
}

impl Punch {
    /// Build a punch record.
    pub fn new(puncher: impl Into<String>, kind: PunchKind, punched_at: DateTime<Utc>) -> Self {
        Self {
            puncher: puncher.into(),
            kind,
            punched_at,
        }
    }

    /// Email of the user who punched.
    pub fn puncher(&self) -> &str {
        self.puncher.as_str()
    }

    /// Arrival or leave.
    pub fn kind(&self) -> PunchKind {
        self.kind
    }

    /// When the punch was recorded.
    pub fn punched_at(&self) -> DateTime<Utc> {
        self.punched_at
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM` in UTC.
    pub fn formatted_time(&self) -> String {
        self.punched_at.format(PUNCH_TIME_FORMAT).to_string()
    }
}
