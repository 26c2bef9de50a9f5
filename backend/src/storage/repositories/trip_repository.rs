use anyhow::Result;
use chrono::SubsecRound;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{decode_names, encode_names, format_timestamp, parse_timestamp};
use crate::domain::models::trip::{NewTrip, Trip, TripSummary};
use crate::storage::connection::DbConnection;

const SUMMARY_SELECT: &str = r#"
    SELECT t.id, t.name, t.currency, t.members, t.created_at, t.updated_at,
           COUNT(e.id) AS expense_count,
           COALESCE(SUM(e.amount), 0.0) AS total_amount
    FROM trips t
    LEFT JOIN expenses e ON e.trip_id = t.id
"#;

/// What happens to a trip's expenses when the trip is updated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpensePolicy {
    Keep,
    /// Delete every expense of the trip
    Clear,
    /// Refuse the update if the trip has any expenses
    RequireNone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripUpdate {
    Updated { cleared_expenses: usize },
    NotFound,
    /// Refused under [`ExpensePolicy::RequireNone`]; nothing was written
    HasExpenses(usize),
}

/// Repository for trip operations
#[derive(Clone)]
pub struct TripRepository {
    db: DbConnection,
}

impl TripRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store a new trip and return it with its assigned id
    pub async fn store_trip(&self, trip: &NewTrip) -> Result<Trip> {
        let created_at = format_timestamp(&trip.created_at);
        let result = sqlx::query(
            r#"
            INSERT INTO trips (name, currency, members, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&trip.name)
        .bind(&trip.currency)
        .bind(encode_names(&trip.members)?)
        .bind(&created_at)
        .bind(&created_at)
        .execute(self.db.pool())
        .await?;

        Ok(Trip {
            id: result.last_insert_rowid(),
            name: trip.name.clone(),
            currency: trip.currency.clone(),
            members: trip.members.clone(),
            created_at: trip.created_at.trunc_subsecs(3),
            updated_at: trip.created_at.trunc_subsecs(3),
        })
    }

    /// Get a trip by ID
    pub async fn get_trip(&self, trip_id: i64) -> Result<Option<Trip>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, currency, members, created_at, updated_at
            FROM trips
            WHERE id = ?
            "#,
        )
        .bind(trip_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(row_to_trip).transpose()
    }

    /// Get a trip together with its expense count and total
    pub async fn get_trip_summary(&self, trip_id: i64) -> Result<Option<TripSummary>> {
        let query = format!("{} WHERE t.id = ? GROUP BY t.id", SUMMARY_SELECT);
        let row = sqlx::query(&query)
            .bind(trip_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(row_to_summary).transpose()
    }

    /// List all trips, most recently updated first
    pub async fn list_trip_summaries(&self) -> Result<Vec<TripSummary>> {
        let query = format!(
            "{} GROUP BY t.id ORDER BY t.updated_at DESC, t.id DESC",
            SUMMARY_SELECT
        );
        let rows = sqlx::query(&query).fetch_all(self.db.pool()).await?;

        rows.iter().map(row_to_summary).collect()
    }

    /// Update an existing trip.
    ///
    /// The expense check or clear named by `expenses` runs in the same
    /// database transaction as the update, so an expense added concurrently
    /// is either seen by the check or makes the transaction fail.
    pub async fn update_trip(&self, trip: &Trip, expenses: ExpensePolicy) -> Result<TripUpdate> {
        let mut tx = self.db.pool().begin().await?;

        let mut cleared_expenses = 0;
        match expenses {
            ExpensePolicy::Keep => {}
            ExpensePolicy::RequireNone => {
                let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM expenses WHERE trip_id = ?")
                    .bind(trip.id)
                    .fetch_one(&mut *tx)
                    .await?;
                if count > 0 {
                    tx.rollback().await?;
                    return Ok(TripUpdate::HasExpenses(count as usize));
                }
            }
            ExpensePolicy::Clear => {
                cleared_expenses = sqlx::query("DELETE FROM expenses WHERE trip_id = ?")
                    .bind(trip.id)
                    .execute(&mut *tx)
                    .await?
                    .rows_affected() as usize;
            }
        }

        let result = sqlx::query(
            r#"
            UPDATE trips
            SET name = ?, currency = ?, members = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&trip.name)
        .bind(&trip.currency)
        .bind(encode_names(&trip.members)?)
        .bind(format_timestamp(&trip.updated_at))
        .bind(trip.id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(TripUpdate::NotFound);
        }

        tx.commit().await?;
        Ok(TripUpdate::Updated { cleared_expenses })
    }

    /// Delete a trip and all of its expenses.
    /// Returns true if the trip existed.
    pub async fn delete_trip(&self, trip_id: i64) -> Result<bool> {
        let mut tx = self.db.pool().begin().await?;

        sqlx::query("DELETE FROM expenses WHERE trip_id = ?")
            .bind(trip_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM trips WHERE id = ?")
            .bind(trip_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_trip(row: &SqliteRow) -> Result<Trip> {
    let members: String = row.try_get("members")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Trip {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        currency: row.try_get("currency")?,
        members: decode_names(&members)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

fn row_to_summary(row: &SqliteRow) -> Result<TripSummary> {
    let expense_count: i64 = row.try_get("expense_count")?;

    Ok(TripSummary {
        trip: row_to_trip(row)?,
        expense_count: expense_count as usize,
        total_amount: row.try_get("total_amount")?,
    })
}
