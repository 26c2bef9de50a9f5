use shared::{BalancesResponse, Settlement as SharedSettlement};

use crate::domain::settlement::{Balances, Settlement};

pub struct LedgerMapper;

impl LedgerMapper {
    pub fn to_balances_dto(balances: Balances) -> BalancesResponse {
        BalancesResponse {
            balances: balances.into_entries(),
        }
    }

    pub fn to_settlement_dtos(settlements: Vec<Settlement>) -> Vec<SharedSettlement> {
        settlements
            .into_iter()
            .map(|s| SharedSettlement {
                from: s.from,
                to: s.to,
                amount: s.amount,
            })
            .collect()
    }
}
