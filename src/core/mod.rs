pub mod account;
pub mod transaction;
pub mod error;
pub mod ledger;
pub mod report;

pub use account::Account;
pub use transaction::{Amount, Balance, IntoAmount, Transaction};
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use report::BankReport;
