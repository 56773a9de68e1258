//! User balance calculation.

use rust_decimal::Decimal;

/// Combines per-category totals into a net balance.
///
/// The balance is income minus expense over ALL of a user's entries; the
/// lifecycle status is ignored, so pending entries count exactly like
/// settled ones. An absent total (a user with no entries on that side)
/// counts as zero rather than failing.
#[must_use]
pub fn net_balance(income: Option<Decimal>, expense: Option<Decimal>) -> Decimal {
    income.unwrap_or(Decimal::ZERO) - expense.unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_both_sides_present() {
        assert_eq!(net_balance(Some(dec!(150)), Some(dec!(30))), dec!(120));
    }

    #[test]
    fn test_absent_sides_count_as_zero() {
        assert_eq!(net_balance(None, None), Decimal::ZERO);
        assert_eq!(net_balance(Some(dec!(100)), None), dec!(100));
        assert_eq!(net_balance(None, Some(dec!(40))), dec!(-40));
    }

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// An absent side behaves exactly like an explicit zero.
        #[test]
        fn prop_none_equals_zero(total in amount_strategy()) {
            prop_assert_eq!(
                net_balance(Some(total), None),
                net_balance(Some(total), Some(Decimal::ZERO))
            );
            prop_assert_eq!(
                net_balance(None, Some(total)),
                net_balance(Some(Decimal::ZERO), Some(total))
            );
        }

        /// Swapping the sides negates the balance.
        #[test]
        fn prop_antisymmetric(income in amount_strategy(), expense in amount_strategy()) {
            prop_assert_eq!(
                net_balance(Some(income), Some(expense)),
                -net_balance(Some(expense), Some(income))
            );
        }

        /// Totals combine additively: summing before or after is the same.
        #[test]
        fn prop_additive(
            income_a in amount_strategy(),
            income_b in amount_strategy(),
            expense in amount_strategy(),
        ) {
            prop_assert_eq!(
                net_balance(Some(income_a + income_b), Some(expense)),
                net_balance(Some(income_a), Some(expense)) + income_b
            );
        }
    }
}
