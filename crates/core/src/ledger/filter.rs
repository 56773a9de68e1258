//! Example-based filtered search over ledger entries.

use financas_shared::types::UserId;

use super::entry::Entry;

/// Sparse search filter.
///
/// Unset fields are wildcards: a default filter matches every entry.
/// The description matches case-insensitively by substring containment;
/// the scalar fields match by exact equality.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Substring to look for in the description, case-insensitive.
    pub description: Option<String>,
    /// Exact accounting month.
    pub month: Option<i32>,
    /// Exact accounting year.
    pub year: Option<i32>,
    /// Owning user.
    pub user_id: Option<UserId>,
}

impl EntryFilter {
    /// In-process evaluation of the filter against a single entry.
    ///
    /// Storage backends that can express the predicate natively translate
    /// the same structure into a query instead; backends that cannot fall
    /// back to this.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(description) = &self.description {
            let haystack = entry.description.to_lowercase();
            if !haystack.contains(&description.to_lowercase()) {
                return false;
            }
        }
        if let Some(month) = self.month {
            if entry.month != month {
                return false;
            }
        }
        if let Some(year) = self.year {
            if entry.year != year {
                return false;
            }
        }
        if let Some(user_id) = self.user_id {
            if entry.user_id != user_id {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::EntryCategory;
    use crate::ledger::status::EntryStatus;
    use chrono::NaiveDate;
    use financas_shared::types::EntryId;
    use rust_decimal_macros::dec;

    fn make_entry(description: &str, month: i32, year: i32, user_id: UserId) -> Entry {
        Entry {
            id: EntryId::new(),
            description: description.to_string(),
            month,
            year,
            amount: dec!(100),
            category: EntryCategory::Expense,
            status: EntryStatus::Pending,
            user_id,
            registered_at: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let entry = make_entry("rent", 1, 2026, UserId::new());
        assert!(EntryFilter::default().matches(&entry));
    }

    #[test]
    fn test_description_is_case_insensitive_substring() {
        let entry = make_entry("Monthly Rent", 1, 2026, UserId::new());
        let filter = EntryFilter {
            description: Some("rent".to_string()),
            ..EntryFilter::default()
        };
        assert!(filter.matches(&entry));

        let filter = EntryFilter {
            description: Some("RENT".to_string()),
            ..EntryFilter::default()
        };
        assert!(filter.matches(&entry));

        let filter = EntryFilter {
            description: Some("groceries".to_string()),
            ..EntryFilter::default()
        };
        assert!(!filter.matches(&entry));
    }

    #[test]
    fn test_scalar_fields_match_by_equality() {
        let user_id = UserId::new();
        let entry = make_entry("rent", 3, 2020, user_id);

        let filter = EntryFilter {
            year: Some(2020),
            ..EntryFilter::default()
        };
        assert!(filter.matches(&entry));

        let filter = EntryFilter {
            year: Some(2019),
            ..EntryFilter::default()
        };
        assert!(!filter.matches(&entry));

        let filter = EntryFilter {
            month: Some(4),
            ..EntryFilter::default()
        };
        assert!(!filter.matches(&entry));

        let filter = EntryFilter {
            user_id: Some(UserId::new()),
            ..EntryFilter::default()
        };
        assert!(!filter.matches(&entry));

        let filter = EntryFilter {
            user_id: Some(user_id),
            ..EntryFilter::default()
        };
        assert!(filter.matches(&entry));
    }

    #[test]
    fn test_all_set_fields_must_match() {
        let user_id = UserId::new();
        let entry = make_entry("internet bill", 7, 2026, user_id);
        let filter = EntryFilter {
            description: Some("bill".to_string()),
            month: Some(7),
            year: Some(2026),
            user_id: Some(user_id),
        };
        assert!(filter.matches(&entry));

        let filter = EntryFilter {
            month: Some(8),
            ..filter
        };
        assert!(!filter.matches(&entry));
    }
}
