//! Balances and settlements for a stored trip.
//!
//! Loads the trip's members and its full expense list on every call and
//! hands them to the settlement engine. Nothing is cached between requests.

use tracing::{debug, info};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::expense::Expense;
use crate::domain::models::trip::Trip;
use crate::domain::settlement::{self, Balances, Settlement, SplitExpense};
use crate::storage::{DbConnection, ExpenseRepository, TripRepository};

/// Service computing who owes whom on a trip
#[derive(Clone)]
pub struct LedgerService {
    trip_repository: TripRepository,
    expense_repository: ExpenseRepository,
}

impl LedgerService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            trip_repository: TripRepository::new(db.clone()),
            expense_repository: ExpenseRepository::new(db),
        }
    }

    /// Net balance of every trip member, rounded to cents
    pub async fn balances(&self, trip_id: i64) -> DomainResult<Balances> {
        let (trip, expenses) = self.load(trip_id).await?;
        let balances = compute_trip_balances(&trip, &expenses)?;

        info!(
            "Computed balances for trip {} from {} expenses",
            trip_id,
            expenses.len()
        );
        Ok(balances)
    }

    /// Transfers that settle the trip, in the order they were matched
    pub async fn settlements(&self, trip_id: i64) -> DomainResult<Vec<Settlement>> {
        let (trip, expenses) = self.load(trip_id).await?;
        let balances = compute_trip_balances(&trip, &expenses)?;
        let settlements = settlement::compute_settlements(&balances);

        info!(
            "Computed {} settlements for trip {}",
            settlements.len(),
            trip_id
        );
        Ok(settlements)
    }

    async fn load(&self, trip_id: i64) -> DomainResult<(Trip, Vec<Expense>)> {
        let trip = self
            .trip_repository
            .get_trip(trip_id)
            .await?
            .ok_or(DomainError::TripNotFound(trip_id))?;
        let expenses = self.expense_repository.list_expenses(trip_id).await?;
        Ok((trip, expenses))
    }
}

fn compute_trip_balances(trip: &Trip, expenses: &[Expense]) -> DomainResult<Balances> {
    let splits: Vec<SplitExpense> = expenses.iter().map(Expense::to_split).collect();
    let balances = settlement::compute_balances(&trip.members, &splits)?;

    debug!(
        "Trip {} balances sum to {:.4}",
        trip.id,
        balances.total()
    );
    Ok(balances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::expense::CreateExpenseCommand;
    use crate::domain::commands::trip::{CreateTripCommand, UpdateTripCommand};
    use crate::domain::{ExpenseService, TripService};

    struct Fixture {
        trips: TripService,
        expenses: ExpenseService,
        ledger: LedgerService,
        trip_id: i64,
    }

    async fn setup_test(members: &[&str]) -> Fixture {
        let db = DbConnection::in_memory().await.expect("Failed to create test database");
        let trips = TripService::new(db.clone());
        let trip = trips
            .create_trip(CreateTripCommand {
                name: "Festival".to_string(),
                currency: None,
                members: members.iter().map(|m| m.to_string()).collect(),
            })
            .await
            .expect("Failed to create trip");

        Fixture {
            trips,
            expenses: ExpenseService::new(db.clone()),
            ledger: LedgerService::new(db),
            trip_id: trip.trip.id,
        }
    }

    impl Fixture {
        async fn spend(&self, amount: f64, paid_by: &str, split: &[&str]) {
            self.expenses
                .create_expense(
                    self.trip_id,
                    CreateExpenseCommand {
                        description: "Expense".to_string(),
                        amount: Some(amount),
                        paid_by: paid_by.to_string(),
                        split_between: split.iter().map(|m| m.to_string()).collect(),
                    },
                )
                .await
                .expect("Failed to add expense");
        }
    }

    #[tokio::test]
    async fn test_trip_without_expenses() {
        let fixture = setup_test(&["A", "B", "C", "D"]).await;

        let balances = fixture.ledger.balances(fixture.trip_id).await.unwrap();
        let settlements = fixture.ledger.settlements(fixture.trip_id).await.unwrap();

        assert_eq!(balances.len(), 4);
        assert!(balances.iter().all(|(_, balance)| balance == 0.0));
        assert!(settlements.is_empty());
    }

    #[tokio::test]
    async fn test_one_payer_for_everyone() {
        let fixture = setup_test(&["A", "B", "C", "D"]).await;
        fixture.spend(100.0, "A", &["A", "B", "C", "D"]).await;

        let balances = fixture.ledger.balances(fixture.trip_id).await.unwrap();
        let settlements = fixture.ledger.settlements(fixture.trip_id).await.unwrap();

        assert_eq!(balances.get("A"), Some(75.0));
        assert_eq!(balances.get("D"), Some(-25.0));
        let pairs: Vec<(&str, &str)> = settlements
            .iter()
            .map(|s| (s.from.as_str(), s.to.as_str()))
            .collect();
        assert_eq!(pairs, vec![("B", "A"), ("C", "A"), ("D", "A")]);
        assert!(settlements.iter().all(|s| s.amount == 25.0));
    }

    #[tokio::test]
    async fn test_balances_follow_member_order() {
        let fixture = setup_test(&["A", "B", "C", "D"]).await;
        fixture.spend(40.0, "A", &["A", "B"]).await;

        // Reordering keeps expenses; the ledger follows the new member order
        fixture
            .trips
            .update_trip(
                fixture.trip_id,
                UpdateTripCommand {
                    members: Some(["D", "C", "B", "A"].iter().map(|m| m.to_string()).collect()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let balances = fixture.ledger.balances(fixture.trip_id).await.unwrap();
        let names: Vec<&str> = balances.iter().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["D", "C", "B", "A"]);
        assert_eq!(balances.get("A"), Some(20.0));
        assert_eq!(balances.get("B"), Some(-20.0));
    }

    #[tokio::test]
    async fn test_non_members_are_left_out() {
        let fixture = setup_test(&["A", "B", "C", "D"]).await;
        fixture.spend(30.0, "Guide", &["A", "B", "C"]).await;
        fixture.spend(20.0, "A", &["A", "Guide"]).await;

        let balances = fixture.ledger.balances(fixture.trip_id).await.unwrap();

        assert!(balances.get("Guide").is_none());
        assert_eq!(balances.get("A"), Some(0.0));
        assert_eq!(balances.get("B"), Some(-10.0));
        assert_eq!(balances.get("C"), Some(-10.0));
        assert_eq!(balances.get("D"), Some(0.0));
    }

    #[tokio::test]
    async fn test_missing_trip() {
        let fixture = setup_test(&["A", "B", "C", "D"]).await;

        assert!(matches!(
            fixture.ledger.balances(fixture.trip_id + 1).await,
            Err(DomainError::TripNotFound(_))
        ));
        assert!(matches!(
            fixture.ledger.settlements(fixture.trip_id + 1).await,
            Err(DomainError::TripNotFound(_))
        ));
    }
}
