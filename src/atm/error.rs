//! Error types for the ATM feature.

use thiserror::Error;

use crate::model::CurrencyField;

/// Why a transaction was rejected.
///
/// These never cross the handler boundary as `Err` - the world actor folds
/// them into the boolean outcome and the client sees a cue plus a balance
/// re-sync. The variants exist so the pipeline and its tests can tell the
/// rejection reasons apart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransactionError {
    /// The raw amount did not parse to a finite number.
    #[error("amount is not a finite number")]
    InvalidAmount,

    /// The amount parsed but is zero or negative.
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// The operation kind matched no known handler.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The operation would drive a balance field negative.
    #[error("insufficient {field} funds: requested {requested}, available {available}")]
    InsufficientFunds {
        field: CurrencyField,
        requested: f64,
        available: f64,
    },

    /// No connected actor matched the supplied target id.
    #[error("transfer target not found: {0}")]
    UnknownTarget(String),

    /// The transfer target is the requesting actor.
    #[error("cannot transfer funds to yourself")]
    SelfTransfer,

    /// An error occurred while communicating with the world actor.
    #[error("world communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for TransactionError {
    fn from(msg: String) -> Self {
        TransactionError::ActorCommunication(msg)
    }
}
