use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// Occurs when looking up an account name
    /// which is not registered on the ledger.
    #[error("no such account: {0}")]
    NotFound(String),
    /// Occurs when a supplied amount is not an integer
    /// number of the smallest currency unit.
    #[error("amount must be an integer, got {0}")]
    InvalidArgument(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
