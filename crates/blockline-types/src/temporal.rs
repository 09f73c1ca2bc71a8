use std::fmt;

use chrono::{DateTime, Utc};

/// Wall-clock instant at which an entry was created.
///
/// Entries carry their creation time as text. The layout is
/// `YYYY-MM-DD HH:MM:SS.fffffffff +0000 UTC`, always in UTC, so clients can
/// split date and time on the first space.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    const LAYOUT: &'static str = "%Y-%m-%d %H:%M:%S%.9f %z UTC";

    /// Capture the current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wrap an explicit instant.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Render in the ledger's text layout.
    pub fn to_ledger_string(&self) -> String {
        self.0.format(Self::LAYOUT).to_string()
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_ledger_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ledger_string())
    }
}
