//! Request messages between [`WorldClient`](crate::world::WorldClient) and
//! the world actor.

use tokio::sync::oneshot;

use crate::atm::{RawAmount, RawTargetId};
use crate::model::{ActorId, Balance, Vec3, ZoneId};
use crate::world::error::WorldError;
use crate::world::store::Session;

/// One-shot response channel used by the world actor.
pub type Response<T> = oneshot::Sender<Result<T, WorldError>>;

/// Data required to admit a new actor.
#[derive(Debug, Clone)]
pub struct ConnectParams {
    pub name: String,
    pub position: Vec3,
    pub zone: ZoneId,
    pub balance: Balance,
}

/// Requests the world actor processes, strictly one at a time.
///
/// The variants mirror the inbound surface of the subsystem: session
/// lifecycle (`Connect`/`Disconnect`/`Move`), state reads (`Snapshot`), and
/// the two actor-originated request kinds - category interactions and ATM
/// transactions.
#[derive(Debug)]
pub enum WorldRequest {
    Connect {
        params: ConnectParams,
        respond_to: Response<ActorId>,
    },
    Disconnect {
        id: ActorId,
        respond_to: Response<()>,
    },
    /// Position/zone update; zone membership is set here, on movement,
    /// never by the interaction path.
    Move {
        id: ActorId,
        position: Vec3,
        zone: ZoneId,
        respond_to: Response<()>,
    },
    Snapshot {
        id: ActorId,
        respond_to: Response<Option<Session>>,
    },
    Interact {
        id: ActorId,
        category: String,
        respond_to: Response<()>,
    },
    Transact {
        id: ActorId,
        kind: String,
        amount: RawAmount,
        target: Option<RawTargetId>,
        respond_to: Response<bool>,
    },
}
