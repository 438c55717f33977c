//! Gas coin selection.

use souffl3_types::GasObject;

use crate::error::WalletError;

/// Pick the first gas coin whose balance covers `budget`.
pub fn select_gas(gases: &[GasObject], budget: u64) -> Result<&GasObject, WalletError> {
    gases
        .iter()
        .find(|gas| gas.balance >= budget)
        .ok_or_else(|| WalletError::InsufficientGas {
            budget,
            largest: gases.iter().map(|g| g.balance).max().unwrap_or(0),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use souffl3_types::ObjectId;

    fn coin(n: u8, balance: u64) -> GasObject {
        GasObject {
            object_id: ObjectId::new([n; 20]),
            version: 1,
            digest: String::new(),
            balance,
        }
    }

    #[test]
    fn picks_first_sufficient_coin() {
        let gases = [coin(1, 500), coin(2, 20_000), coin(3, 50_000)];
        let picked = select_gas(&gases, 10_000).unwrap();
        assert_eq!(picked.object_id, ObjectId::new([2; 20]));
    }

    #[test]
    fn exact_balance_is_enough() {
        let gases = [coin(1, 10_000)];
        assert!(select_gas(&gases, 10_000).is_ok());
    }

    #[test]
    fn reports_largest_balance_when_short() {
        let gases = [coin(1, 500), coin(2, 900)];
        match select_gas(&gases, 10_000) {
            Err(WalletError::InsufficientGas { budget, largest }) => {
                assert_eq!(budget, 10_000);
                assert_eq!(largest, 900);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn no_coins_at_all() {
        assert!(matches!(
            select_gas(&[], 1),
            Err(WalletError::InsufficientGas { largest: 0, .. })
        ));
    }

    proptest! {
        #[test]
        fn selected_coin_always_covers_budget(
            balances in prop::collection::vec(0u64..100_000, 0..8),
            budget in 0u64..100_000,
        ) {
            let gases: Vec<_> = balances.iter().enumerate().map(|(i, b)| coin(i as u8, *b)).collect();
            match select_gas(&gases, budget) {
                Ok(gas) => prop_assert!(gas.balance >= budget),
                Err(_) => prop_assert!(balances.iter().all(|b| *b < budget)),
            }
        }
    }
}
