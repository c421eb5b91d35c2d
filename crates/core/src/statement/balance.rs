//! Balance accumulation over a user's statement history.
//!
//! The balance is never stored; it is recomputed from the full history on
//! every query.

use rust_decimal::Decimal;

use super::types::Statement;

/// Computes the balance of an ordered statement history.
///
/// Deposits add, withdrawals subtract. An empty history yields zero.
/// Returns `None` if the running total leaves the `Decimal` range.
#[must_use]
pub fn compute_balance(statements: &[Statement]) -> Option<Decimal> {
    statements
        .iter()
        .try_fold(Decimal::ZERO, |acc, statement| {
            acc.checked_add(statement.signed_amount())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::types::OperationType;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use tally_shared::types::UserId;

    fn history(user: UserId, ops: &[(OperationType, Decimal)]) -> Vec<Statement> {
        ops.iter()
            .map(|(kind, amount)| Statement::new(user, *kind, *amount, None))
            .collect()
    }

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(compute_balance(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn test_deposit_then_withdraw() {
        let statements = history(
            UserId::new(),
            &[
                (OperationType::Deposit, dec!(99)),
                (OperationType::Withdraw, dec!(99)),
            ],
        );
        assert_eq!(compute_balance(&statements), Some(Decimal::ZERO));
    }

    #[test]
    fn test_fractional_amounts() {
        let statements = history(
            UserId::new(),
            &[
                (OperationType::Deposit, dec!(10.10)),
                (OperationType::Deposit, dec!(0.05)),
                (OperationType::Withdraw, dec!(3.33)),
            ],
        );
        assert_eq!(compute_balance(&statements), Some(dec!(6.82)));
    }

    #[test]
    fn test_overflow_is_none() {
        let statements = history(
            UserId::new(),
            &[
                (OperationType::Deposit, Decimal::MAX),
                (OperationType::Deposit, Decimal::ONE),
            ],
        );
        assert_eq!(compute_balance(&statements), None);
    }

    /// Strategy for generating non-negative amounts (0.00 to 10,000.00).
    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
    }

    fn op_strategy() -> impl Strategy<Value = (OperationType, Decimal)> {
        (
            prop_oneof![Just(OperationType::Deposit), Just(OperationType::Withdraw)],
            amount_strategy(),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Balance equals total deposits minus total withdrawals.
        #[test]
        fn prop_balance_is_deposits_minus_withdrawals(
            ops in prop::collection::vec(op_strategy(), 0..50),
        ) {
            let statements = history(UserId::new(), &ops);

            let deposits: Decimal = ops
                .iter()
                .filter(|(kind, _)| *kind == OperationType::Deposit)
                .map(|(_, amount)| *amount)
                .sum();
            let withdrawals: Decimal = ops
                .iter()
                .filter(|(kind, _)| *kind == OperationType::Withdraw)
                .map(|(_, amount)| *amount)
                .sum();

            prop_assert_eq!(compute_balance(&statements), Some(deposits - withdrawals));
        }

        /// Balance does not depend on the order of the history.
        #[test]
        fn prop_balance_is_order_independent(
            ops in prop::collection::vec(op_strategy(), 0..30),
        ) {
            let statements = history(UserId::new(), &ops);
            let mut reversed = statements.clone();
            reversed.reverse();

            prop_assert_eq!(compute_balance(&statements), compute_balance(&reversed));
        }
    }
}
