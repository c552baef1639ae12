//! Session state for connected actors.

use serde::Serialize;
use std::collections::HashMap;

use crate::atm::ActorDirectory;
use crate::model::{ActorId, Balance, BalanceStore, CurrencyField, Vec3, ZoneId};

/// The runtime record for one connected actor.
///
/// Created on connect and destroyed on disconnect; position and zone are
/// updated externally as the actor moves. This is also the snapshot payload
/// returned to callers asking about an actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub id: ActorId,
    pub name: String,
    pub position: Vec3,
    pub zone: ZoneId,
    pub balance: Balance,
}

/// In-memory store of every connected actor, owned exclusively by the world
/// actor's task - requests are processed one at a time, so no lock guards it.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<ActorId, Session>,
}

impl SessionStore {
    pub fn insert(&mut self, session: Session) {
        self.sessions.insert(session.id, session);
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Session> {
        self.sessions.remove(&id)
    }

    pub fn session(&self, id: ActorId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn session_mut(&mut self, id: ActorId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl BalanceStore for SessionStore {
    fn get(&self, id: ActorId) -> Option<Balance> {
        self.sessions.get(&id).map(|session| session.balance)
    }

    fn add(&mut self, id: ActorId, field: CurrencyField, amount: f64) -> bool {
        match self.sessions.get_mut(&id) {
            Some(session) => {
                *session.balance.get_mut(field) += amount;
                true
            }
            None => false,
        }
    }

    fn sub(&mut self, id: ActorId, field: CurrencyField, amount: f64) -> bool {
        let Some(session) = self.sessions.get_mut(&id) else {
            return false;
        };
        let value = session.balance.get_mut(field);
        if *value < amount {
            return false;
        }
        *value -= amount;
        true
    }
}

impl ActorDirectory for SessionStore {
    fn resolve(&self, key: &str) -> Option<ActorId> {
        self.sessions
            .keys()
            .find(|id| id.0.to_string() == key)
            .copied()
    }

    fn display_name(&self, id: ActorId) -> Option<String> {
        self.sessions.get(&id).map(|session| session.name.clone())
    }
}
