//! Domain model for an expense recorded on a trip.
use chrono::{DateTime, Utc};

use crate::domain::settlement::SplitExpense;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub trip_id: i64,
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub split_between: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// View of this expense handed to the settlement engine
    pub fn to_split(&self) -> SplitExpense {
        SplitExpense {
            description: self.description.clone(),
            amount: self.amount,
            paid_by: self.paid_by.clone(),
            split_between: self.split_between.clone(),
        }
    }
}

/// Fields needed to insert an expense; the id is assigned by storage
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub trip_id: i64,
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub split_between: Vec<String>,
    pub created_at: DateTime<Utc>,
}
