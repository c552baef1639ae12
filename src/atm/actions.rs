//! Wire-level transaction inputs.
//!
//! Clients send the operation kind as a free-form string and the amount as
//! either a number or a string; both are validated here before any handler
//! touches a balance.

use serde::Deserialize;
use std::fmt::Display;

use crate::model::ActorId;

/// The four supported ATM operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Move funds cash → bank.
    Deposit,
    /// Move funds bank → cash.
    Withdraw,
    /// Move bank funds to another actor's bank.
    TransferBank,
    /// Hand cash to another actor.
    TransferCash,
}

impl TransactionKind {
    /// Parses a wire operation name, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "deposit" => Some(Self::Deposit),
            "withdraw" => Some(Self::Withdraw),
            "transfer" => Some(Self::TransferBank),
            "transfercash" => Some(Self::TransferCash),
            _ => None,
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::TransferBank => "transfer",
            Self::TransferCash => "transferCash",
        };
        f.write_str(name)
    }
}

/// An amount as it arrives off the wire: number or string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// The finite numeric value, if there is one. Non-numeric text, NaN and
    /// infinities all come back as `None`.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A transfer target as it arrives off the wire: numeric id or string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTargetId {
    Number(u64),
    Text(String),
}

impl RawTargetId {
    /// String-normalized form used to match against connected actor ids.
    pub fn as_key(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<ActorId> for RawTargetId {
    fn from(id: ActorId) -> Self {
        Self::Number(u64::from(id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_is_case_insensitive() {
        assert_eq!(TransactionKind::parse("Deposit"), Some(TransactionKind::Deposit));
        assert_eq!(
            TransactionKind::parse("transferCash"),
            Some(TransactionKind::TransferCash)
        );
        assert_eq!(TransactionKind::parse("rob"), None);
    }

    #[test]
    fn amount_parses_numbers_and_numeric_text() {
        assert_eq!(RawAmount::from(50.0).parse(), Some(50.0));
        assert_eq!(RawAmount::from(" 12.5 ").parse(), Some(12.5));
        assert_eq!(RawAmount::from("all of it").parse(), None);
        assert_eq!(RawAmount::from(f64::NAN).parse(), None);
        assert_eq!(RawAmount::from("inf").parse(), None);
    }

    #[test]
    fn amount_deserializes_untagged() {
        assert_eq!(
            serde_json::from_str::<RawAmount>("42").unwrap(),
            RawAmount::Number(42.0)
        );
        assert_eq!(
            serde_json::from_str::<RawAmount>(r#""42""#).unwrap(),
            RawAmount::Text("42".to_string())
        );
    }

    #[test]
    fn target_keys_normalize_to_strings() {
        assert_eq!(RawTargetId::Number(7).as_key(), "7");
        assert_eq!(RawTargetId::Text(" 7 ".to_string()).as_key(), "7");
        assert_eq!(RawTargetId::from(ActorId(3)).as_key(), "3");
    }
}
