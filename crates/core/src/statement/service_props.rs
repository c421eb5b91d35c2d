//! Property-based tests for StatementService.
//!
//! - Accepted operations determine the final balance
//! - A withdrawal is accepted iff it does not exceed the running balance
//! - Deposits always succeed and raise the balance by exactly their amount

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::UserId;

use super::error::StatementError;
use super::service::StatementService;
use super::types::{CreateStatementInput, OperationType};
use crate::store::{InMemoryStatementStore, InMemoryUserStore, UserStore};
use crate::user::User;

/// Strategy to generate non-negative amounts (0.00 to 1,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn operation() -> impl Strategy<Value = (OperationType, Decimal)> {
    (
        prop_oneof![Just(OperationType::Deposit), Just(OperationType::Withdraw)],
        amount(),
    )
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

async fn service_with_user() -> (StatementService, Arc<InMemoryStatementStore>, UserId) {
    let users = Arc::new(InMemoryUserStore::new());
    let statements = Arc::new(InMemoryStatementStore::new());
    let user = users
        .create(User::new("Prop User", "prop@email.com", "$argon2id$hash"))
        .await
        .unwrap();
    let service = StatementService::new(users, statements.clone());
    (service, statements, user.id)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Replaying a random operation sequence: the service accepts exactly the
    /// withdrawals a running-balance model accepts, and the final balance is
    /// the sum of accepted deposits minus accepted withdrawals.
    #[test]
    fn prop_service_matches_running_balance_model(
        ops in prop::collection::vec(operation(), 1..40),
    ) {
        let rt = runtime();
        rt.block_on(async {
            let (service, statements, user_id) = service_with_user().await;
            let mut model = Decimal::ZERO;
            let mut accepted = Vec::new();

            for (kind, amount) in ops {
                let result = service
                    .create_statement(CreateStatementInput {
                        user_id,
                        kind,
                        amount,
                        description: None,
                    })
                    .await;

                match kind {
                    OperationType::Deposit => {
                        let statement = result.unwrap();
                        model += amount;
                        accepted.push(statement);
                    }
                    OperationType::Withdraw if amount <= model => {
                        let statement = result.unwrap();
                        model -= amount;
                        accepted.push(statement);
                    }
                    OperationType::Withdraw => {
                        let rejected = matches!(
                            result,
                            Err(StatementError::InsufficientFunds { .. })
                        );
                        assert!(rejected);
                    }
                }
            }

            let balance = service.get_balance(user_id).await.unwrap();
            assert_eq!(balance.balance, model);
            assert!(balance.balance >= Decimal::ZERO);
            assert_eq!(balance.statement, accepted);
            assert_eq!(statements.len().await, accepted.len());
        });
    }

    /// A deposit raises the balance by exactly its amount.
    #[test]
    fn prop_deposit_increases_balance_by_amount(
        seed in amount(),
        deposit in amount(),
    ) {
        let rt = runtime();
        rt.block_on(async {
            let (service, _, user_id) = service_with_user().await;
            service
                .create_statement(CreateStatementInput {
                    user_id,
                    kind: OperationType::Deposit,
                    amount: seed,
                    description: None,
                })
                .await
                .unwrap();
            let before = service.get_balance(user_id).await.unwrap().balance;

            service
                .create_statement(CreateStatementInput {
                    user_id,
                    kind: OperationType::Deposit,
                    amount: deposit,
                    description: None,
                })
                .await
                .unwrap();
            let after = service.get_balance(user_id).await.unwrap().balance;

            assert_eq!(after - before, deposit);
        });
    }
}
