use tracing::{debug, instrument};

use crate::atm::{RawAmount, RawTargetId, TransactionError};
use crate::model::ActorId;
use crate::world::WorldClient;

/// Typed client for ATM transactions.
///
/// Each method submits one transaction request and resolves to whether the
/// operation applied. Validation, mutation and all client feedback happen
/// inside the world actor.
#[derive(Clone)]
pub struct AtmClient {
    inner: WorldClient,
}

impl AtmClient {
    pub fn new(inner: WorldClient) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn deposit(&self, actor: ActorId, amount: f64) -> Result<bool, TransactionError> {
        debug!("Sending deposit");
        self.transact(actor, "deposit", RawAmount::Number(amount), None)
            .await
    }

    #[instrument(skip(self))]
    pub async fn withdraw(&self, actor: ActorId, amount: f64) -> Result<bool, TransactionError> {
        debug!("Sending withdraw");
        self.transact(actor, "withdraw", RawAmount::Number(amount), None)
            .await
    }

    #[instrument(skip(self))]
    pub async fn transfer_bank(
        &self,
        actor: ActorId,
        amount: f64,
        target: ActorId,
    ) -> Result<bool, TransactionError> {
        debug!("Sending bank transfer");
        self.transact(
            actor,
            "transfer",
            RawAmount::Number(amount),
            Some(RawTargetId::from(target)),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn transfer_cash(
        &self,
        actor: ActorId,
        amount: f64,
        target: ActorId,
    ) -> Result<bool, TransactionError> {
        debug!("Sending cash transfer");
        self.transact(
            actor,
            "transferCash",
            RawAmount::Number(amount),
            Some(RawTargetId::from(target)),
        )
        .await
    }

    async fn transact(
        &self,
        actor: ActorId,
        kind: &str,
        amount: RawAmount,
        target: Option<RawTargetId>,
    ) -> Result<bool, TransactionError> {
        self.inner
            .transact(actor, kind, amount, target)
            .await
            .map_err(|e| TransactionError::ActorCommunication(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::mock::{create_mock_client, expect_transact};

    #[tokio::test]
    async fn deposit_sends_the_wire_operation_name() {
        let (world, mut receiver) = create_mock_client(10);
        let client = AtmClient::new(world);

        let request = tokio::spawn(async move { client.deposit(ActorId(4), 25.0).await });

        let (id, kind, amount, target, responder) =
            expect_transact(&mut receiver).await.unwrap();
        assert_eq!(id, ActorId(4));
        assert_eq!(kind, "deposit");
        assert_eq!(amount, RawAmount::Number(25.0));
        assert!(target.is_none());
        responder.send(Ok(true)).unwrap();

        assert!(matches!(request.await.unwrap(), Ok(true)));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_communication_error() {
        let (world, receiver) = create_mock_client(10);
        drop(receiver);
        let client = AtmClient::new(world);

        let result = client.withdraw(ActorId(1), 5.0).await;
        assert!(matches!(
            result,
            Err(TransactionError::ActorCommunication(_))
        ));
    }
}
