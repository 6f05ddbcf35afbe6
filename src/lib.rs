mod core;

pub use crate::core::{Account, Amount, Balance, BankReport, IntoAmount, Ledger, LedgerError, LedgerResult, Transaction};
pub use crate::core::{account, error, ledger, report, transaction};
