//! Recording and removing expenses on a trip.

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::commands::expense::CreateExpenseCommand;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::expense::{Expense, NewExpense};
use crate::storage::{DbConnection, ExpenseRepository, TripRepository};

/// Service for managing the expenses of a trip
#[derive(Clone)]
pub struct ExpenseService {
    trip_repository: TripRepository,
    expense_repository: ExpenseRepository,
}

impl ExpenseService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            trip_repository: TripRepository::new(db.clone()),
            expense_repository: ExpenseRepository::new(db),
        }
    }

    /// List a trip's expenses, newest first
    pub async fn list_expenses(&self, trip_id: i64) -> DomainResult<Vec<Expense>> {
        self.require_trip(trip_id).await?;
        let expenses = self.expense_repository.list_expenses(trip_id).await?;
        info!("Found {} expenses for trip {}", expenses.len(), trip_id);
        Ok(expenses)
    }

    /// Record a new expense.
    ///
    /// Payer and split names are stored as given. Names that are not members
    /// of the trip are ignored when balances are computed.
    pub async fn create_expense(&self, trip_id: i64, command: CreateExpenseCommand) -> DomainResult<Expense> {
        info!("Creating expense on trip {}: {:?}", trip_id, command);

        self.require_trip(trip_id).await?;

        if command.description.trim().is_empty() {
            return Err(DomainError::Validation("Description is required".to_string()));
        }
        let amount = match command.amount {
            Some(amount) if amount.is_finite() && amount > 0.0 => amount,
            _ => return Err(DomainError::Validation("Valid amount is required".to_string())),
        };
        if command.paid_by.trim().is_empty() {
            return Err(DomainError::Validation("Paid by is required".to_string()));
        }
        if command.split_between.is_empty() {
            return Err(DomainError::Validation(
                "At least one person to split with is required".to_string(),
            ));
        }

        let expense = self
            .expense_repository
            .store_expense(&NewExpense {
                trip_id,
                description: command.description,
                amount,
                paid_by: command.paid_by,
                split_between: command.split_between,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created expense {} on trip {}", expense.id, trip_id);
        Ok(expense)
    }

    /// Delete an expense that belongs to the given trip
    pub async fn delete_expense(&self, trip_id: i64, expense_id: i64) -> DomainResult<()> {
        info!("Deleting expense {} from trip {}", expense_id, trip_id);

        if !self.expense_repository.delete_expense(trip_id, expense_id).await? {
            warn!("Expense {} not found on trip {}", expense_id, trip_id);
            return Err(DomainError::ExpenseNotFound { trip_id, expense_id });
        }
        Ok(())
    }

    async fn require_trip(&self, trip_id: i64) -> DomainResult<()> {
        match self.trip_repository.get_trip(trip_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::TripNotFound(trip_id)),
        }
    }
}
