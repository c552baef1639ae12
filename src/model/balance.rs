use serde::{Deserialize, Serialize};

use crate::model::ActorId;

/// Selects which side of an actor's wallet an adjustment touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyField {
    Cash,
    Bank,
}

impl std::fmt::Display for CurrencyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencyField::Cash => f.write_str("cash"),
            CurrencyField::Bank => f.write_str("bank"),
        }
    }
}

/// An actor's currency pair.
///
/// Both fields are non-negative at all times; the store rejects any
/// adjustment that would drive a field below zero before mutating it.
/// This is also the payload pushed back to the client on every re-sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub cash: f64,
    pub bank: f64,
}

impl Balance {
    pub fn new(cash: f64, bank: f64) -> Self {
        Self { cash, bank }
    }

    pub fn get(&self, field: CurrencyField) -> f64 {
        match field {
            CurrencyField::Cash => self.cash,
            CurrencyField::Bank => self.bank,
        }
    }

    pub(crate) fn get_mut(&mut self, field: CurrencyField) -> &mut f64 {
        match field {
            CurrencyField::Cash => &mut self.cash,
            CurrencyField::Bank => &mut self.bank,
        }
    }
}

/// Read/adjust access to actor balances.
///
/// Transaction handlers validate against `get` before issuing `sub`/`add`,
/// so a handler never observes a partial mutation. `sub` refuses (returns
/// `false`, no mutation) when the actor is unknown or the field would go
/// negative; `add` refuses only for unknown actors.
pub trait BalanceStore {
    fn get(&self, id: ActorId) -> Option<Balance>;

    fn add(&mut self, id: ActorId, field: CurrencyField, amount: f64) -> bool;

    fn sub(&mut self, id: ActorId, field: CurrencyField, amount: f64) -> bool;
}
