use std::collections::BTreeSet;

use chrono::Utc;
use log::debug;

use crate::core::account::Account;
use crate::core::error::{LedgerError, LedgerResult};
use crate::core::transaction::{IntoAmount, Transaction};

/// Owns the accounts and the append-only list of transactions recorded against them.
#[derive(Default)]
pub struct Ledger {
    accounts: BTreeSet<Account>,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger { accounts: BTreeSet::new(), transactions: Vec::new() }
    }

    /// Copy of the ledger's accounts.
    pub fn list_accounts(&self) -> BTreeSet<Account> {
        self.accounts.clone()
    }

    /// Copy of the ledger's transactions, in recording order.
    pub fn list_transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Creating an account that already exists returns the existing one.
    pub fn create_account(&mut self, name: &str) -> Account {
        if let Ok(existing) = self.get_account(name) {
            return existing.to_owned();
        }

        let account = Account::new(name);
        debug!("created account {}", account);
        self.accounts.insert(account.clone());
        account
    }

    pub fn get_account(&self, name: &str) -> LedgerResult<&Account> {
        self.accounts.iter()
            .find(|account| account.name() == name)
            .ok_or_else(|| LedgerError::NotFound(name.to_owned()))
    }

    pub fn add_funds(&mut self, name: &str, amount: impl IntoAmount) -> LedgerResult<()> {
        let amount = amount.into_amount()?;
        let account = self.get_account(name)?.to_owned();

        let transaction = Transaction::new(&account, Utc::now(), amount);
        debug!("recorded {} on {}", amount, account);
        self.transactions.push(transaction);
        Ok(())
    }

    /// Debits `amount` from `name_from` and credits it to `name_to` under one timestamp.
    /// Nothing is recorded unless the amount can be negated and both accounts exist.
    pub fn move_funds(&mut self, name_from: &str, name_to: &str, amount: impl IntoAmount) -> LedgerResult<()> {
        let amount = amount.into_amount()?;
        let debit = amount.checked_neg()
            .ok_or_else(|| LedgerError::InvalidArgument(amount.to_string()))?;
        let account_from = self.get_account(name_from)?.to_owned();
        let account_to = self.get_account(name_to)?.to_owned();

        let now = Utc::now();
        debug!("moving {} from {} to {}", amount, account_from, account_to);
        self.transactions.push(Transaction::new(&account_from, now, debit));
        self.transactions.push(Transaction::new(&account_to, now, amount));
        Ok(())
    }
}
