use anyhow::Result;
use chrono::SubsecRound;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{decode_names, encode_names, format_timestamp, parse_timestamp};
use crate::domain::models::expense::{Expense, NewExpense};
use crate::storage::connection::DbConnection;

/// Repository for expense operations
#[derive(Clone)]
pub struct ExpenseRepository {
    db: DbConnection,
}

impl ExpenseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store an expense and return it with its assigned id
    pub async fn store_expense(&self, expense: &NewExpense) -> Result<Expense> {
        let result = sqlx::query(
            r#"
            INSERT INTO expenses (trip_id, description, amount, paid_by, split_between, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(expense.trip_id)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(&expense.paid_by)
        .bind(encode_names(&expense.split_between)?)
        .bind(format_timestamp(&expense.created_at))
        .execute(self.db.pool())
        .await?;

        Ok(Expense {
            id: result.last_insert_rowid(),
            trip_id: expense.trip_id,
            description: expense.description.clone(),
            amount: expense.amount,
            paid_by: expense.paid_by.clone(),
            split_between: expense.split_between.clone(),
            created_at: expense.created_at.trunc_subsecs(3),
        })
    }

    /// List all expenses of a trip, newest first
    pub async fn list_expenses(&self, trip_id: i64) -> Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, trip_id, description, amount, paid_by, split_between, created_at
            FROM expenses
            WHERE trip_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(trip_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(row_to_expense).collect()
    }

    /// Delete an expense from a trip.
    /// Returns true if the expense was found and deleted, false otherwise
    pub async fn delete_expense(&self, trip_id: i64, expense_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ? AND trip_id = ?")
            .bind(expense_id)
            .bind(trip_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_expense(row: &SqliteRow) -> Result<Expense> {
    let split_between: String = row.try_get("split_between")?;
    let created_at: String = row.try_get("created_at")?;

    Ok(Expense {
        id: row.try_get("id")?,
        trip_id: row.try_get("trip_id")?,
        description: row.try_get("description")?,
        amount: row.try_get("amount")?,
        paid_by: row.try_get("paid_by")?,
        split_between: decode_names(&split_between)?,
        created_at: parse_timestamp(&created_at)?,
    })
}
