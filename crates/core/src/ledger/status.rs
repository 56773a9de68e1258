//! Lifecycle status of a ledger entry.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an entry.
///
/// Every entry starts out as `Pending`; callers move it to `Settled` or
/// `Cancelled` through the status-change operation. A status change is an
/// unconditional overwrite followed by the regular update path: there is
/// no transition graph, any status may replace any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Entry has been recorded but not yet settled.
    Pending,
    /// Entry has been settled (income received / expense paid).
    Settled,
    /// Entry has been cancelled. The entry is kept; cancelling does not delete.
    Cancelled,
}

impl EntryStatus {
    /// All legal status values.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Settled, Self::Cancelled];

    /// Returns the lowercase name used on the wire and in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Settled => "settled",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "settled" => Ok(Self::Settled),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_all_statuses() {
        for status in EntryStatus::ALL {
            assert_eq!(status.as_str().parse::<EntryStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SETTLED".parse::<EntryStatus>(), Ok(EntryStatus::Settled));
        assert_eq!("Pending".parse::<EntryStatus>(), Ok(EntryStatus::Pending));
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!("posted".parse::<EntryStatus>().is_err());
        assert!("".parse::<EntryStatus>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for status in EntryStatus::ALL {
            assert_eq!(status.to_string().parse::<EntryStatus>(), Ok(status));
        }
    }
}
