use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::core::account::Account;
use crate::core::error::{LedgerError, LedgerResult};

/// Signed amount in the smallest currency unit, e.g. pence.
pub type Amount = i64;

/// Sum of amounts. Wide enough that folding any realistic number
/// of transactions cannot overflow.
pub type Balance = i128;

/// Conversion of caller input into an [`Amount`].
///
/// Anything that is not an integer is rejected with
/// [`LedgerError::InvalidArgument`], including text that spells one.
/// Turning form fields or shell words into numbers is up to the caller.
pub trait IntoAmount {
    fn into_amount(self) -> LedgerResult<Amount>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> LedgerResult<Amount> {
        Ok(self)
    }
}

impl IntoAmount for i32 {
    fn into_amount(self) -> LedgerResult<Amount> {
        Ok(self.into())
    }
}

impl IntoAmount for f64 {
    fn into_amount(self) -> LedgerResult<Amount> {
        Err(LedgerError::InvalidArgument(self.to_string()))
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> LedgerResult<Amount> {
        Err(LedgerError::InvalidArgument(format!("{:?}", self)))
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> LedgerResult<Amount> {
        self.as_str().into_amount()
    }
}

impl IntoAmount for &serde_json::Value {
    fn into_amount(self) -> LedgerResult<Amount> {
        match self {
            serde_json::Value::Number(num) => num.as_i64()
                .ok_or_else(|| LedgerError::InvalidArgument(num.to_string())),
            serde_json::Value::String(text) => text.as_str().into_amount(),
            other => Err(LedgerError::InvalidArgument(other.to_string()))
        }
    }
}

impl IntoAmount for serde_json::Value {
    fn into_amount(self) -> LedgerResult<Amount> {
        (&self).into_amount()
    }
}

/// A single signed amount recorded against one account.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Transaction {
    account: Account,
    timestamp: DateTime<Utc>,
    amount: Amount,
}

impl Transaction {
    pub fn new(account: &Account, timestamp: DateTime<Utc>, amount: Amount) -> Transaction {
        Transaction { account: account.to_owned(), timestamp, amount }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.account.name().bold(),
            self.amount)
    }
}


#[cfg(test)]
mod tests {
    use super::{Account, Amount, IntoAmount, Transaction};
    use crate::core::error::LedgerError;

    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(100), 100)]
    #[case(json!(-20), -20)]
    #[case(json!(0), 0)]
    #[case(json!(i64::MIN), i64::MIN)]
    fn integer_values_are_amounts(#[case] value: serde_json::Value, #[case] expected: Amount) {
        assert_eq!(value.into_amount(), Ok(expected));
    }

    #[rstest]
    #[case(json!("string"))]
    #[case(json!("100"))]
    #[case(json!("1.5"))]
    #[case(json!(1.5))]
    #[case(json!(true))]
    #[case(json!(null))]
    #[case(json!([1]))]
    #[case(json!({"amount": 1}))]
    fn other_values_are_rejected(#[case] value: serde_json::Value) {
        assert!(matches!(value.into_amount(), Err(LedgerError::InvalidArgument(..))));
    }

    #[test]
    fn floats_are_never_amounts() {
        assert!(matches!(100.0f64.into_amount(), Err(LedgerError::InvalidArgument(..))));
    }

    #[test]
    fn text_is_never_an_amount() {
        assert!(matches!("100".into_amount(), Err(LedgerError::InvalidArgument(..))));
        assert!(matches!(String::from("-20").into_amount(), Err(LedgerError::InvalidArgument(..))));
    }

    #[test]
    fn can_print() {
        colored::control::set_override(false);
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let transaction = Transaction::new(&Account::new("Bilbo"), timestamp, -32);

        assert_eq!(transaction.to_string(), "2024-03-01 09:30:00 Bilbo: -32");
    }

    #[test]
    fn serializes_account_timestamp_and_amount() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let transaction = Transaction::new(&Account::new("Bilbo"), timestamp, 123);

        let value = serde_json::to_value(&transaction).unwrap();
        assert_eq!(value, json!({
            "account": {"name": "Bilbo"},
            "timestamp": "2024-03-01T09:30:00Z",
            "amount": 123
        }));
    }
}
