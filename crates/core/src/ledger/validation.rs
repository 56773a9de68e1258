//! Business rule validation for ledger entries.

use financas_shared::types::UserId;
use rust_decimal::Decimal;
use thiserror::Error;

use super::entry::{EntryCategory, EntryDraft};

/// Validation errors for entry drafts.
///
/// The `Display` strings are stable: API consumers and tests match on them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Description is missing or blank.
    #[error("invalid description")]
    Description,

    /// Month is missing or outside 1-12.
    #[error("invalid month")]
    Month,

    /// Year is missing or does not render as exactly four digits.
    #[error("invalid year")]
    Year,

    /// Owning user reference is missing.
    #[error("invalid user")]
    User,

    /// Amount is missing, zero, or negative.
    #[error("invalid amount")]
    Amount,

    /// Category is missing.
    #[error("invalid category")]
    Category,
}

/// Entry fields that passed validation.
///
/// Produced by [`validate`] so callers never re-unwrap draft options.
#[derive(Debug, Clone)]
pub struct ValidEntry {
    /// Trimmed, non-empty description.
    pub description: String,
    /// Month in 1-12.
    pub month: i32,
    /// Year rendering as four digits.
    pub year: i32,
    /// Strictly positive amount.
    pub amount: Decimal,
    /// Income or expense.
    pub category: EntryCategory,
    /// Owning user.
    pub user_id: UserId,
}

/// Validates a draft's required fields and constraints.
///
/// Pure and idempotent. Checks run in a fixed order and the first failure
/// wins, so a draft with several invalid fields always reports the same
/// error.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first check that fails.
pub fn validate(draft: &EntryDraft) -> Result<ValidEntry, ValidationError> {
    let description = draft
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or(ValidationError::Description)?;

    let month = draft
        .month
        .filter(|m| (1..=12).contains(m))
        .ok_or(ValidationError::Month)?;

    // Legacy rule: the year must render as exactly four characters. This
    // rejects 999 and 12345 but admits -100..=-999, which also render as
    // four characters.
    let year = draft
        .year
        .filter(|y| y.to_string().len() == 4)
        .ok_or(ValidationError::Year)?;

    let user_id = draft.user_id.ok_or(ValidationError::User)?;

    let amount = draft
        .amount
        .filter(|v| *v > Decimal::ZERO)
        .ok_or(ValidationError::Amount)?;

    let category = draft.category.ok_or(ValidationError::Category)?;

    Ok(ValidEntry {
        description: description.to_string(),
        month,
        year,
        amount,
        category,
        user_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn complete_draft() -> EntryDraft {
        EntryDraft {
            description: Some("salary".to_string()),
            month: Some(6),
            year: Some(2026),
            amount: Some(dec!(3500)),
            category: Some(EntryCategory::Income),
            user_id: Some(UserId::new()),
            ..EntryDraft::default()
        }
    }

    #[test]
    fn test_complete_draft_passes() {
        let valid = validate(&complete_draft()).unwrap();
        assert_eq!(valid.description, "salary");
        assert_eq!(valid.month, 6);
        assert_eq!(valid.year, 2026);
        assert_eq!(valid.amount, dec!(3500));
        assert_eq!(valid.category, EntryCategory::Income);
    }

    #[test]
    fn test_description_is_trimmed() {
        let mut draft = complete_draft();
        draft.description = Some("  groceries  ".to_string());
        assert_eq!(validate(&draft).unwrap().description, "groceries");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let draft = complete_draft();
        let first = validate(&draft).unwrap();
        let second = validate(&draft).unwrap();
        assert_eq!(first.description, second.description);
        assert_eq!(first.amount, second.amount);
    }

    #[rstest]
    #[case::missing(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    fn test_invalid_description(#[case] description: Option<&str>) {
        let mut draft = complete_draft();
        draft.description = description.map(str::to_string);
        let err = validate(&draft).unwrap_err();
        assert_eq!(err, ValidationError::Description);
        assert_eq!(err.to_string(), "invalid description");
    }

    #[rstest]
    #[case::missing(None)]
    #[case::zero(Some(0))]
    #[case::too_large(Some(13))]
    #[case::negative(Some(-1))]
    fn test_invalid_month(#[case] month: Option<i32>) {
        let mut draft = complete_draft();
        draft.month = month;
        let err = validate(&draft).unwrap_err();
        assert_eq!(err, ValidationError::Month);
        assert_eq!(err.to_string(), "invalid month");
    }

    #[rstest]
    #[case::missing(None)]
    #[case::three_digits(Some(999))]
    #[case::five_digits(Some(12345))]
    fn test_invalid_year(#[case] year: Option<i32>) {
        let mut draft = complete_draft();
        draft.year = year;
        let err = validate(&draft).unwrap_err();
        assert_eq!(err, ValidationError::Year);
        assert_eq!(err.to_string(), "invalid year");
    }

    #[test]
    fn test_four_digit_year_passes() {
        let mut draft = complete_draft();
        draft.year = Some(2020);
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_missing_user() {
        let mut draft = complete_draft();
        draft.user_id = None;
        let err = validate(&draft).unwrap_err();
        assert_eq!(err, ValidationError::User);
        assert_eq!(err.to_string(), "invalid user");
    }

    #[rstest]
    #[case::missing(None)]
    #[case::zero(Some(dec!(0)))]
    #[case::negative(Some(dec!(-10)))]
    fn test_invalid_amount(#[case] amount: Option<Decimal>) {
        let mut draft = complete_draft();
        draft.amount = amount;
        let err = validate(&draft).unwrap_err();
        assert_eq!(err, ValidationError::Amount);
        assert_eq!(err.to_string(), "invalid amount");
    }

    #[test]
    fn test_missing_category() {
        let mut draft = complete_draft();
        draft.category = None;
        let err = validate(&draft).unwrap_err();
        assert_eq!(err, ValidationError::Category);
        assert_eq!(err.to_string(), "invalid category");
    }

    #[test]
    fn test_first_failing_check_wins() {
        // Everything invalid at once: the description check fires first.
        let err = validate(&EntryDraft::default()).unwrap_err();
        assert_eq!(err, ValidationError::Description);

        // Description fine, month and amount invalid: month fires.
        let mut draft = complete_draft();
        draft.month = Some(0);
        draft.amount = Some(dec!(-1));
        assert_eq!(validate(&draft).unwrap_err(), ValidationError::Month);

        // Only the later checks invalid: user fires before amount.
        let mut draft = complete_draft();
        draft.user_id = None;
        draft.amount = None;
        draft.category = None;
        assert_eq!(validate(&draft).unwrap_err(), ValidationError::User);
    }
}
