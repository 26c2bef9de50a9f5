use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Trip as returned by the trip list, create and update endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub name: String,
    /// Currency label shown next to amounts (e.g. "₹", "$")
    pub currency: String,
    /// Member names in the order they were entered
    pub members: Vec<String>,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
    pub expense_count: usize,
    /// Sum of all expense amounts recorded on the trip
    pub total_amount: f64,
}

/// Trip together with every expense recorded on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDetail {
    #[serde(flatten)]
    pub trip: Trip,
    pub expenses: Vec<Expense>,
}

/// A single shared expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub trip_id: i64,
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    /// Members the amount is divided between, equally
    pub split_between: Vec<String>,
    pub created_at: String, // RFC 3339 timestamp
    /// `created_at` as epoch milliseconds, for clients that sort numerically
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTripRequest {
    #[serde(default)]
    pub name: String,
    /// Optional currency label - defaults to "₹" if not provided
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Partial trip update. Absent or empty fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateTripRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<String>>,
    /// Must be set to change the member set of a trip that already has expenses.
    /// The trip's expenses are deleted when the change goes through.
    #[serde(default)]
    pub confirm_clear_expenses: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub paid_by: String,
    #[serde(default)]
    pub split_between: Vec<String>,
}

/// Suggested transfer that settles part of the outstanding balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Net position of every member of a trip, keyed by member name.
///
/// Serialized as a JSON object whose keys keep the trip's member order:
/// `{"Alice": 75.0, "Bob": -25.0}`. Positive means the member is owed money.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalancesResponse {
    pub balances: Vec<(String, f64)>,
}

impl BalancesResponse {
    /// Balance for a single member, if the member is part of the trip
    pub fn get(&self, member: &str) -> Option<f64> {
        self.balances
            .iter()
            .find(|(name, _)| name == member)
            .map(|(_, amount)| *amount)
    }
}

impl Serialize for BalancesResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.balances.len()))?;
        for (member, amount) in &self.balances {
            map.serialize_entry(member, amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BalancesResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BalancesVisitor;

        impl<'de> Visitor<'de> for BalancesVisitor {
            type Value = BalancesResponse;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of member name to balance")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut balances = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((member, amount)) = access.next_entry::<String, f64>()? {
                    balances.push((member, amount));
                }
                Ok(BalancesResponse { balances })
            }
        }

        deserializer.deserialize_map(BalancesVisitor)
    }
}

/// Generic acknowledgement body, e.g. `{"message": "Trip deleted"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body returned with every 4xx/5xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returned with 409 when a member change would discard existing expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationRequiredResponse {
    pub warning: String,
    pub needs_confirmation: bool,
}
