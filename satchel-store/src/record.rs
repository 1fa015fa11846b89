//! Wallet records and selectors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single wallet entry in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    /// Registry-assigned id, unique within one store.
    pub id: u32,
    /// User-chosen wallet name, unique within one store.
    pub name: String,
    /// Network the wallet was created on.
    pub network: String,
    /// Owner label, empty when unset.
    #[serde(default)]
    pub owner: String,
    /// Id of the parent wallet for sub-wallets, `None` for top-level wallets.
    #[serde(default)]
    pub parent_id: Option<u32>,
    /// Serialized root extended private key (`xprv` / `tprv`).
    pub root_key: String,
}

/// Selector for a wallet: numeric id or name.
///
/// Produced once at the input boundary. A purely numeric token always
/// selects by id, never by literal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletRef {
    /// Lookup by registry id.
    ById(u32),
    /// Lookup by wallet name.
    ByName(String),
}

impl WalletRef {
    /// Parse a raw selector string.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let numeric = !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit());
        if numeric {
            if let Ok(id) = input.parse::<u32>() {
                return Self::ById(id);
            }
        }
        Self::ByName(input.to_string())
    }
}

impl fmt::Display for WalletRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "{id}"),
            Self::ByName(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_parses_as_id() {
        assert_eq!(WalletRef::parse("7"), WalletRef::ById(7));
        assert_eq!(WalletRef::parse("007"), WalletRef::ById(7));
    }

    #[test]
    fn non_numeric_input_parses_as_name() {
        assert_eq!(
            WalletRef::parse("alice"),
            WalletRef::ByName("alice".to_string())
        );
        assert_eq!(WalletRef::parse("7b"), WalletRef::ByName("7b".to_string()));
        assert_eq!(WalletRef::parse("+7"), WalletRef::ByName("+7".to_string()));
    }

    #[test]
    fn overflowing_digits_fall_back_to_name() {
        let input = "99999999999999999999";
        assert_eq!(WalletRef::parse(input), WalletRef::ByName(input.to_string()));
    }
}
