//! Turns net balances into a short list of pairwise transfers.
//!
//! The algorithm is a greedy largest-debtor / largest-creditor match:
//!
//! 1. Members owing more than [`DEAD_ZONE`] become debtors, members owed more
//!    than [`DEAD_ZONE`] become creditors. Everyone else is already settled.
//! 2. Both lists are sorted by amount, largest first. The sort is stable, so
//!    equal amounts keep the members' original order.
//! 3. The current debtor pays the current creditor the smaller of the two
//!    remaining amounts, and whichever side drops below [`DEAD_ZONE`] moves on
//!    to the next entry (both can move in the same step).
//!
//! This does not always find the minimum number of transfers, but its output
//! is fully determined by the balances it is given.

use super::balance_calculator::Balances;
use super::rounding::{is_settled, round_cents, DEAD_ZONE};

/// A transfer from a debtor to a creditor
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub from: String,
    pub to: String,
    /// Always positive, rounded to cents
    pub amount: f64,
}

struct Position<'a> {
    member: &'a str,
    remaining: f64,
}

/// Compute the transfers that settle the given balances.
///
/// Balances are expected to sum to roughly zero. Any imbalance left when one
/// side runs out is not transferred.
pub fn compute_settlements(balances: &Balances) -> Vec<Settlement> {
    let mut debtors: Vec<Position> = Vec::new();
    let mut creditors: Vec<Position> = Vec::new();

    for (member, balance) in balances.iter() {
        if is_settled(balance) {
            continue;
        }
        let position = Position {
            member,
            remaining: balance.abs(),
        };
        if balance < 0.0 {
            debtors.push(position);
        } else {
            creditors.push(position);
        }
    }

    debtors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));
    creditors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));

    let mut settlements = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let amount = debtor.remaining.min(creditor.remaining);

        if amount > DEAD_ZONE {
            settlements.push(Settlement {
                from: debtor.member.to_string(),
                to: creditor.member.to_string(),
                amount: round_cents(amount),
            });
        }

        debtor.remaining -= amount;
        creditor.remaining -= amount;

        if debtor.remaining < DEAD_ZONE {
            i += 1;
        }
        if creditor.remaining < DEAD_ZONE {
            j += 1;
        }
    }

    settlements
}
