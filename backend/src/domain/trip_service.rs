//! Trip management: creating, listing, updating and deleting trips.

use chrono::Utc;
use std::collections::HashSet;
use tracing::{info, warn};

use crate::domain::commands::trip::{CreateTripCommand, UpdateTripCommand};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::expense::Expense;
use crate::domain::models::trip::{NewTrip, Trip, TripSummary};
use crate::storage::{DbConnection, ExpensePolicy, ExpenseRepository, TripRepository, TripUpdate};

/// Service for managing trips
#[derive(Clone)]
pub struct TripService {
    trip_repository: TripRepository,
    expense_repository: ExpenseRepository,
}

impl TripService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            trip_repository: TripRepository::new(db.clone()),
            expense_repository: ExpenseRepository::new(db),
        }
    }

    /// List all trips, most recently updated first
    pub async fn list_trips(&self) -> DomainResult<Vec<TripSummary>> {
        let trips = self.trip_repository.list_trip_summaries().await?;
        info!("Found {} trips", trips.len());
        Ok(trips)
    }

    /// Create a new trip
    pub async fn create_trip(&self, command: CreateTripCommand) -> DomainResult<TripSummary> {
        info!("Creating trip: name={}, members={:?}", command.name, command.members);

        if command.name.trim().is_empty() {
            return Err(DomainError::Validation("Trip name is required".to_string()));
        }
        validate_members(&command.members)?;

        let currency = command
            .currency
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| Trip::DEFAULT_CURRENCY.to_string());

        let trip = self
            .trip_repository
            .store_trip(&NewTrip {
                name: command.name.trim().to_string(),
                currency,
                members: command.members,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created trip '{}' with ID: {}", trip.name, trip.id);

        Ok(TripSummary {
            trip,
            expense_count: 0,
            total_amount: 0.0,
        })
    }

    /// Get a trip with all of its expenses, newest first
    pub async fn get_trip(&self, trip_id: i64) -> DomainResult<(TripSummary, Vec<Expense>)> {
        let summary = self.require_summary(trip_id).await?;
        let expenses = self.expense_repository.list_expenses(trip_id).await?;
        Ok((summary, expenses))
    }

    /// Update a trip's name, currency or members.
    ///
    /// Changing the member set of a trip that has expenses is refused with
    /// [`DomainError::ConfirmationRequired`] unless the command confirms that
    /// the expenses may be cleared.
    pub async fn update_trip(&self, trip_id: i64, command: UpdateTripCommand) -> DomainResult<TripSummary> {
        info!("Updating trip: {}", trip_id);

        let mut trip = self.require_summary(trip_id).await?.trip;

        if let Some(name) = command.name.filter(|n| !n.trim().is_empty()) {
            trip.name = name.trim().to_string();
        }
        if let Some(currency) = command.currency.filter(|c| !c.trim().is_empty()) {
            trip.currency = currency;
        }

        let mut expense_policy = ExpensePolicy::Keep;
        if let Some(members) = command.members.filter(|m| !m.is_empty()) {
            validate_members(&members)?;

            if !trip.has_same_members(&members) {
                expense_policy = if command.confirm_clear_expenses {
                    ExpensePolicy::Clear
                } else {
                    ExpensePolicy::RequireNone
                };
            }
            trip.members = members;
        }

        trip.updated_at = Utc::now();

        match self.trip_repository.update_trip(&trip, expense_policy).await? {
            TripUpdate::Updated { cleared_expenses } => {
                if cleared_expenses > 0 {
                    info!("Cleared {} expenses from trip {}", cleared_expenses, trip_id);
                }
            }
            TripUpdate::HasExpenses(count) => {
                warn!(
                    "Member change on trip {} would discard {} expenses; confirmation required",
                    trip_id, count
                );
                return Err(DomainError::ConfirmationRequired(
                    "Changing members will require clearing expenses".to_string(),
                ));
            }
            TripUpdate::NotFound => return Err(DomainError::TripNotFound(trip_id)),
        }

        self.require_summary(trip_id).await
    }

    /// Delete a trip and its expenses
    pub async fn delete_trip(&self, trip_id: i64) -> DomainResult<()> {
        info!("Deleting trip: {}", trip_id);

        if !self.trip_repository.delete_trip(trip_id).await? {
            warn!("Trip not found: {}", trip_id);
            return Err(DomainError::TripNotFound(trip_id));
        }
        Ok(())
    }

    async fn require_summary(&self, trip_id: i64) -> DomainResult<TripSummary> {
        self.trip_repository
            .get_trip_summary(trip_id)
            .await?
            .ok_or(DomainError::TripNotFound(trip_id))
    }
}

fn validate_members(members: &[String]) -> DomainResult<()> {
    if members.len() < Trip::MIN_MEMBERS {
        return Err(DomainError::Validation(format!(
            "At least {} members required",
            Trip::MIN_MEMBERS
        )));
    }
    if members.iter().any(|m| m.trim().is_empty()) {
        return Err(DomainError::Validation("Member names cannot be empty".to_string()));
    }

    let mut seen = HashSet::with_capacity(members.len());
    if let Some(duplicate) = members.iter().find(|m| !seen.insert(m.as_str())) {
        return Err(DomainError::Validation(format!("Duplicate member name: {}", duplicate)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::expense::CreateExpenseCommand;
    use crate::domain::ExpenseService;

    fn names(members: &[&str]) -> Vec<String> {
        members.iter().map(|m| m.to_string()).collect()
    }

    async fn setup_test() -> (TripService, ExpenseService) {
        let db = DbConnection::in_memory().await.expect("Failed to create test database");
        (TripService::new(db.clone()), ExpenseService::new(db))
    }

    fn create_command(name: &str, members: &[&str]) -> CreateTripCommand {
        CreateTripCommand {
            name: name.to_string(),
            currency: None,
            members: names(members),
        }
    }

    async fn add_expense(expenses: &ExpenseService, trip_id: i64) {
        expenses
            .create_expense(
                trip_id,
                CreateExpenseCommand {
                    description: "Groceries".to_string(),
                    amount: Some(40.0),
                    paid_by: "A".to_string(),
                    split_between: names(&["A", "B", "C", "D"]),
                },
            )
            .await
            .expect("Failed to add expense");
    }

    #[tokio::test]
    async fn test_create_trip_defaults_currency() {
        let (trips, _) = setup_test().await;

        let created = trips
            .create_trip(create_command("  Road trip ", &["A", "B", "C", "D"]))
            .await
            .unwrap();

        assert_eq!(created.trip.name, "Road trip");
        assert_eq!(created.trip.currency, "₹");
        assert_eq!(created.expense_count, 0);
    }

    #[tokio::test]
    async fn test_create_trip_requires_name() {
        let (trips, _) = setup_test().await;

        let result = trips.create_trip(create_command("   ", &["A", "B", "C", "D"])).await;

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg == "Trip name is required"));
    }

    #[tokio::test]
    async fn test_create_trip_requires_four_members() {
        let (trips, _) = setup_test().await;

        let result = trips.create_trip(create_command("Trip", &["A", "B", "C"])).await;

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg == "At least 4 members required"));
    }

    #[tokio::test]
    async fn test_create_trip_rejects_duplicate_members() {
        let (trips, _) = setup_test().await;

        let result = trips.create_trip(create_command("Trip", &["A", "B", "C", "A"])).await;

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("Duplicate")));
    }

    #[tokio::test]
    async fn test_get_missing_trip() {
        let (trips, _) = setup_test().await;
        assert!(matches!(trips.get_trip(99).await, Err(DomainError::TripNotFound(99))));
    }

    #[tokio::test]
    async fn test_update_name_and_currency_only() {
        let (trips, _) = setup_test().await;
        let created = trips.create_trip(create_command("Trip", &["A", "B", "C", "D"])).await.unwrap();

        let updated = trips
            .update_trip(
                created.trip.id,
                UpdateTripCommand {
                    name: Some("Renamed".to_string()),
                    currency: Some("$".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.trip.name, "Renamed");
        assert_eq!(updated.trip.currency, "$");
        assert_eq!(updated.trip.members, names(&["A", "B", "C", "D"]));
        assert!(updated.trip.updated_at >= created.trip.updated_at);
    }

    #[tokio::test]
    async fn test_update_rejects_too_few_members() {
        let (trips, _) = setup_test().await;
        let created = trips.create_trip(create_command("Trip", &["A", "B", "C", "D"])).await.unwrap();

        let result = trips
            .update_trip(
                created.trip.id,
                UpdateTripCommand {
                    members: Some(names(&["A", "B"])),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_member_change_without_expenses_needs_no_confirmation() {
        let (trips, _) = setup_test().await;
        let created = trips.create_trip(create_command("Trip", &["A", "B", "C", "D"])).await.unwrap();

        let updated = trips
            .update_trip(
                created.trip.id,
                UpdateTripCommand {
                    members: Some(names(&["A", "B", "C", "E"])),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.trip.members, names(&["A", "B", "C", "E"]));
    }

    #[tokio::test]
    async fn test_member_change_with_expenses_requires_confirmation() {
        let (trips, expenses) = setup_test().await;
        let created = trips.create_trip(create_command("Trip", &["A", "B", "C", "D"])).await.unwrap();
        add_expense(&expenses, created.trip.id).await;

        let change = UpdateTripCommand {
            members: Some(names(&["A", "B", "C", "D", "E"])),
            ..Default::default()
        };
        let refused = trips.update_trip(created.trip.id, change.clone()).await;
        assert!(matches!(refused, Err(DomainError::ConfirmationRequired(_))));

        // Nothing changed
        let (unchanged, kept) = trips.get_trip(created.trip.id).await.unwrap();
        assert_eq!(unchanged.trip.members.len(), 4);
        assert_eq!(kept.len(), 1);

        let confirmed = trips
            .update_trip(
                created.trip.id,
                UpdateTripCommand {
                    confirm_clear_expenses: true,
                    ..change
                },
            )
            .await
            .unwrap();

        assert_eq!(confirmed.trip.members.len(), 5);
        assert_eq!(confirmed.expense_count, 0);
    }

    #[tokio::test]
    async fn test_reordering_members_keeps_expenses() {
        let (trips, expenses) = setup_test().await;
        let created = trips.create_trip(create_command("Trip", &["A", "B", "C", "D"])).await.unwrap();
        add_expense(&expenses, created.trip.id).await;

        let updated = trips
            .update_trip(
                created.trip.id,
                UpdateTripCommand {
                    members: Some(names(&["D", "C", "B", "A"])),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.trip.members, names(&["D", "C", "B", "A"]));
        assert_eq!(updated.expense_count, 1);
    }

    #[tokio::test]
    async fn test_delete_trip() {
        let (trips, _) = setup_test().await;
        let created = trips.create_trip(create_command("Trip", &["A", "B", "C", "D"])).await.unwrap();

        trips.delete_trip(created.trip.id).await.unwrap();

        assert!(matches!(
            trips.delete_trip(created.trip.id).await,
            Err(DomainError::TripNotFound(_))
        ));
        assert!(trips.list_trips().await.unwrap().is_empty());
    }
}
