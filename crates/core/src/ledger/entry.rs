//! Ledger entry domain types.

use chrono::NaiveDate;
use financas_shared::types::{EntryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::EntryStatus;

/// Classification of an entry's amount.
///
/// Amounts are always stored positive; the category determines the sign
/// the amount contributes to the owner's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryCategory {
    /// Money coming in. Counts positively toward the balance.
    Income,
    /// Money going out. Counts negatively toward the balance.
    Expense,
}

impl EntryCategory {
    /// Returns the lowercase name used on the wire and in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for EntryCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(()),
        }
    }
}

/// A persisted ledger entry.
///
/// Every field is required: an `Entry` only exists after the draft has
/// passed validation and the storage layer has assigned an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Storage-assigned identifier.
    pub id: EntryId,
    /// What this entry is for.
    pub description: String,
    /// Accounting month, 1-12.
    pub month: i32,
    /// Accounting year, four digits.
    pub year: i32,
    /// Positive amount; the category carries the sign.
    pub amount: Decimal,
    /// Income or expense.
    pub category: EntryCategory,
    /// Lifecycle status.
    pub status: EntryStatus,
    /// Owning user.
    pub user_id: UserId,
    /// Stamped by the service on every create/update; never caller-supplied.
    pub registered_at: NaiveDate,
}

/// Validated entry fields awaiting first persistence (no identifier yet).
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// What this entry is for.
    pub description: String,
    /// Accounting month, 1-12.
    pub month: i32,
    /// Accounting year, four digits.
    pub year: i32,
    /// Positive amount.
    pub amount: Decimal,
    /// Income or expense.
    pub category: EntryCategory,
    /// Lifecycle status.
    pub status: EntryStatus,
    /// Owning user.
    pub user_id: UserId,
    /// Registration date stamped by the service.
    pub registered_at: NaiveDate,
}

/// Caller-supplied entry fields before validation.
///
/// Every field is optional so the validation engine can report exactly
/// which required field is missing, in a fixed order. The registration
/// date is absent on purpose: it is stamped by the service.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    /// Identifier, present only for entries already persisted.
    pub id: Option<EntryId>,
    /// What this entry is for.
    pub description: Option<String>,
    /// Accounting month.
    pub month: Option<i32>,
    /// Accounting year.
    pub year: Option<i32>,
    /// Amount.
    pub amount: Option<Decimal>,
    /// Income or expense.
    pub category: Option<EntryCategory>,
    /// Lifecycle status.
    pub status: Option<EntryStatus>,
    /// Owning user.
    pub user_id: Option<UserId>,
}

impl From<Entry> for EntryDraft {
    fn from(entry: Entry) -> Self {
        Self {
            id: Some(entry.id),
            description: Some(entry.description),
            month: Some(entry.month),
            year: Some(entry.year),
            amount: Some(entry.amount),
            category: Some(entry.category),
            status: Some(entry.status),
            user_id: Some(entry.user_id),
        }
    }
}
