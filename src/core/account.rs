use std::fmt;

use serde::Serialize;

/// A named holder of transactions. Accounts are equal when their names are.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize)]
pub struct Account {
    name: String,
}

impl Account {
    pub fn new(name: &str) -> Account {
        Account { name: name.to_owned() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {}", self.name)
    }
}
