//! Domain model for a trip.
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i64,
    pub name: String,
    pub currency: String,
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Smallest group a trip can be created for
    pub const MIN_MEMBERS: usize = 4;

    pub const DEFAULT_CURRENCY: &'static str = "₹";

    /// True when `members` names exactly the same people, ignoring order and repeats
    pub fn has_same_members(&self, members: &[String]) -> bool {
        let current: HashSet<&str> = self.members.iter().map(String::as_str).collect();
        let proposed: HashSet<&str> = members.iter().map(String::as_str).collect();
        current == proposed
    }
}

/// Fields needed to insert a trip; the id is assigned by storage
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub name: String,
    pub currency: String,
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Trip plus the aggregates shown in trip listings
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub trip: Trip,
    pub expense_count: usize,
    pub total_amount: f64,
}
