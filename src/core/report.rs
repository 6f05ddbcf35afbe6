use crate::core::account::Account;
use crate::core::error::LedgerResult;
use crate::core::ledger::Ledger;
use crate::core::transaction::Balance;

/// Read-only view computing balances from a ledger's transactions.
pub struct BankReport<'a> {
    ledger: &'a Ledger,
}

impl<'a> BankReport<'a> {
    pub fn new(ledger: &'a Ledger) -> BankReport<'a> {
        BankReport { ledger }
    }

    /// Sum of every transaction recorded against the named account.
    pub fn get_balance(&self, name: &str) -> LedgerResult<Balance> {
        let account = self.ledger.get_account(name)?;
        Ok(self.balance_of(account))
    }

    /// Balance of every account, ordered by name.
    pub fn balances(&self) -> Vec<(Account, Balance)> {
        self.ledger.list_accounts().into_iter()
            .map(|account| {
                let balance = self.balance_of(&account);
                (account, balance)
            })
            .collect()
    }

    fn balance_of(&self, account: &Account) -> Balance {
        self.ledger.transactions().iter()
            .filter(|t| t.account() == account)
            .map(|t| Balance::from(t.amount()))
            .sum()
    }
}


#[cfg(test)]
mod tests {
    use crate::core::{Account, BankReport, Ledger};
    use crate::core::error::LedgerError;

    use rstest::{fixture, rstest};

    #[fixture]
    fn ledger() -> Ledger {
        Ledger::new()
    }

    #[rstest]
    #[case(vec![123, 234], 357)]
    #[case(vec![], 0)]
    #[case(vec![-123, -234], -357)]
    #[case(vec![100, -30, 0, -80], -10)]
    #[case(vec![i64::MAX, 1], i64::MAX as i128 + 1)]
    #[case(vec![i64::MIN, i64::MIN, -1], 2 * (i64::MIN as i128) - 1)]
    #[case(vec![i64::MAX, i64::MAX, i64::MIN], i64::MAX as i128 - 1)]
    fn balance_is_sum_of_amounts(mut ledger: Ledger, #[case] amounts: Vec<i64>, #[case] expected: i128) {
        ledger.create_account("Test");
        ledger.create_account("Other");
        ledger.add_funds("Other", 999).unwrap();
        for amount in amounts {
            ledger.add_funds("Test", amount).unwrap();
        }
        let report = BankReport::new(&ledger);

        assert_eq!(report.get_balance("Test"), Ok(expected));
    }

    #[rstest]
    fn balance_of_missing_account(ledger: Ledger) {
        let report = BankReport::new(&ledger);
        let res = report.get_balance("NonExistant");
        assert!(matches!(res, Err(LedgerError::NotFound(..))));
    }

    #[rstest]
    fn create_then_add_funds(mut ledger: Ledger) {
        ledger.create_account("test");
        assert_eq!(BankReport::new(&ledger).get_balance("test"), Ok(0));

        ledger.add_funds("test", 100).unwrap();
        assert_eq!(BankReport::new(&ledger).get_balance("test"), Ok(100));
    }

    #[rstest]
    fn move_between_accounts(mut ledger: Ledger) {
        ledger.create_account("AccountFrom");
        ledger.create_account("AccountTo");
        ledger.move_funds("AccountFrom", "AccountTo", 20).unwrap();
        let report = BankReport::new(&ledger);

        assert_eq!(report.get_balance("AccountFrom"), Ok(-20));
        assert_eq!(report.get_balance("AccountTo"), Ok(20));
    }

    #[rstest]
    fn all_balances_sorted_by_name(mut ledger: Ledger) {
        ledger.create_account("Frodo");
        ledger.create_account("Bilbo");
        ledger.create_account("Gimli");
        ledger.move_funds("Frodo", "Bilbo", 32).unwrap();

        let balances = BankReport::new(&ledger).balances();
        assert_eq!(balances, vec![
            (Account::new("Bilbo"), 32),
            (Account::new("Frodo"), -32),
            (Account::new("Gimli"), 0),
        ]);
    }
}
