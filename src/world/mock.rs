//! Mock world client for unit-testing code that talks to the world actor.
//!
//! Instead of spinning up a full [`WorldActor`](crate::world::WorldActor),
//! tests get a [`WorldClient`] whose requests land on a channel they
//! control. The test inspects each request and answers through its oneshot
//! responder, simulating the actor's behavior (success, failure, delays)
//! deterministically.

use tokio::sync::{mpsc, oneshot};

use crate::atm::{RawAmount, RawTargetId};
use crate::model::ActorId;
use crate::world::client::WorldClient;
use crate::world::error::WorldError;
use crate::world::message::WorldRequest;

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client(buffer_size: usize) -> (WorldClient, mpsc::Receiver<WorldRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (WorldClient::new(sender), receiver)
}

/// Asserts that the next request is a `Transact` and returns its parts.
pub async fn expect_transact(
    receiver: &mut mpsc::Receiver<WorldRequest>,
) -> Option<(
    ActorId,
    String,
    RawAmount,
    Option<RawTargetId>,
    oneshot::Sender<Result<bool, WorldError>>,
)> {
    match receiver.recv().await {
        Some(WorldRequest::Transact {
            id,
            kind,
            amount,
            target,
            respond_to,
        }) => Some((id, kind, amount, target, respond_to)),
        _ => None,
    }
}

/// Asserts that the next request is an `Interact` and returns its parts.
pub async fn expect_interact(
    receiver: &mut mpsc::Receiver<WorldRequest>,
) -> Option<(ActorId, String, oneshot::Sender<Result<(), WorldError>>)> {
    match receiver.recv().await {
        Some(WorldRequest::Interact {
            id,
            category,
            respond_to,
        }) => Some((id, category, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_client_round_trips_a_transact() {
        let (client, mut receiver) = create_mock_client(10);

        let request = tokio::spawn(async move {
            client
                .transact(ActorId(1), "deposit", RawAmount::Number(50.0), None)
                .await
        });

        let (id, kind, amount, target, responder) = expect_transact(&mut receiver)
            .await
            .expect("Expected Transact request");
        assert_eq!(id, ActorId(1));
        assert_eq!(kind, "deposit");
        assert_eq!(amount, RawAmount::Number(50.0));
        assert!(target.is_none());
        responder.send(Ok(true)).unwrap();

        let result = request.await.unwrap();
        assert!(matches!(result, Ok(true)));
    }
}
