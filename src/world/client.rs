//! Async client handle for the world actor.

use tokio::sync::{mpsc, oneshot};

use crate::atm::{RawAmount, RawTargetId};
use crate::model::{ActorId, Balance, Vec3, ZoneId};
use crate::world::error::WorldError;
use crate::world::message::{ConnectParams, WorldRequest};
use crate::world::store::Session;

/// Cloneable handle that forwards requests to the world actor over its mpsc
/// channel and resolves results via oneshot responses. Holds only a sender,
/// so cloning is cheap.
#[derive(Clone)]
pub struct WorldClient {
    sender: mpsc::Sender<WorldRequest>,
}

impl WorldClient {
    pub fn new(sender: mpsc::Sender<WorldRequest>) -> Self {
        Self { sender }
    }

    /// Admits a new actor and returns its allocated id.
    pub async fn connect(
        &self,
        name: impl Into<String>,
        position: Vec3,
        zone: ZoneId,
        balance: Balance,
    ) -> Result<ActorId, WorldError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(WorldRequest::Connect {
                params: ConnectParams {
                    name: name.into(),
                    position,
                    zone,
                    balance,
                },
                respond_to,
            })
            .await
            .map_err(|_| WorldError::ActorClosed)?;
        response.await.map_err(|_| WorldError::ActorDropped)?
    }

    pub async fn disconnect(&self, id: ActorId) -> Result<(), WorldError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(WorldRequest::Disconnect { id, respond_to })
            .await
            .map_err(|_| WorldError::ActorClosed)?;
        response.await.map_err(|_| WorldError::ActorDropped)?
    }

    /// Updates an actor's position and zone membership.
    pub async fn move_to(
        &self,
        id: ActorId,
        position: Vec3,
        zone: ZoneId,
    ) -> Result<(), WorldError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(WorldRequest::Move {
                id,
                position,
                zone,
                respond_to,
            })
            .await
            .map_err(|_| WorldError::ActorClosed)?;
        response.await.map_err(|_| WorldError::ActorDropped)?
    }

    pub async fn snapshot(&self, id: ActorId) -> Result<Option<Session>, WorldError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(WorldRequest::Snapshot { id, respond_to })
            .await
            .map_err(|_| WorldError::ActorClosed)?;
        response.await.map_err(|_| WorldError::ActorDropped)?
    }

    /// Signals intent to interact with the nearest object of `category`.
    /// Resolution and all feedback happen server-side; the returned future
    /// completes when the request has been fully processed.
    pub async fn interact(&self, id: ActorId, category: &str) -> Result<(), WorldError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(WorldRequest::Interact {
                id,
                category: category.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| WorldError::ActorClosed)?;
        response.await.map_err(|_| WorldError::ActorDropped)?
    }

    /// Submits a transaction request. Returns whether the operation applied.
    pub async fn transact(
        &self,
        id: ActorId,
        kind: &str,
        amount: RawAmount,
        target: Option<RawTargetId>,
    ) -> Result<bool, WorldError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(WorldRequest::Transact {
                id,
                kind: kind.to_string(),
                amount,
                target,
                respond_to,
            })
            .await
            .map_err(|_| WorldError::ActorClosed)?;
        response.await.map_err(|_| WorldError::ActorDropped)?
    }
}
