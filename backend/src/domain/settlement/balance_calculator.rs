//! Reduces a trip's expenses into a net balance per member.
//!
//! Balances are recomputed from the full expense list on every call. Each
//! expense credits its payer with the full amount and debits every
//! participant with an equal share. Shares are accumulated unrounded and the
//! final figures are rounded to cents once, so fractional cents from uneven
//! splits do not drift per expense.

use std::collections::HashMap;

use super::rounding::round_cents;
use super::SettlementError;

/// An expense as seen by the settlement engine
#[derive(Debug, Clone, PartialEq)]
pub struct SplitExpense {
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    /// Members the amount is divided between, equally
    pub split_between: Vec<String>,
}

impl SplitExpense {
    pub fn new<S: AsRef<str>>(description: &str, amount: f64, paid_by: &str, split_between: &[S]) -> Self {
        Self {
            description: description.to_string(),
            amount,
            paid_by: paid_by.to_string(),
            split_between: split_between.iter().map(|m| m.as_ref().to_string()).collect(),
        }
    }

    /// Amount owed by each participant
    pub fn share(&self) -> Result<f64, SettlementError> {
        if self.split_between.is_empty() {
            return Err(SettlementError::InvalidExpense {
                description: self.description.clone(),
            });
        }
        Ok(self.amount / self.split_between.len() as f64)
    }
}

/// Net balance per member, in the order the members were given.
///
/// Positive means the member is owed money, negative means they owe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Balances {
    entries: Vec<(String, f64)>,
}

impl Balances {
    pub fn get(&self, member: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == member)
            .map(|(_, balance)| *balance)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(name, balance)| (name.as_str(), *balance))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all balances. Stays within a few cents of zero for any expense list.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, balance)| balance).sum()
    }

    pub fn into_entries(self) -> Vec<(String, f64)> {
        self.entries
    }
}

impl FromIterator<(String, f64)> for Balances {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Compute the net balance of every member from the given expenses.
///
/// Every member appears in the result, with `0.0` when untouched by any
/// expense. Payers and participants that are not members are ignored. An
/// expense with nobody to split between fails with
/// [`SettlementError::InvalidExpense`].
pub fn compute_balances<M: AsRef<str>>(
    members: &[M],
    expenses: &[SplitExpense],
) -> Result<Balances, SettlementError> {
    let mut entries: Vec<(String, f64)> = Vec::with_capacity(members.len());
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(members.len());

    for member in members {
        let name = member.as_ref();
        if slots.contains_key(name) {
            continue;
        }
        slots.insert(name, entries.len());
        entries.push((name.to_string(), 0.0));
    }

    for expense in expenses {
        let share = expense.share()?;

        if let Some(&slot) = slots.get(expense.paid_by.as_str()) {
            entries[slot].1 += expense.amount;
        }

        for participant in &expense.split_between {
            if let Some(&slot) = slots.get(participant.as_str()) {
                entries[slot].1 -= share;
            }
        }
    }

    for entry in &mut entries {
        entry.1 = round_cents(entry.1);
    }

    Ok(Balances { entries })
}
