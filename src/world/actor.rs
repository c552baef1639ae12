//! # World Actor
//!
//! The runtime engine. Owns the session store (every connected actor, their
//! positions, zones and balances) and processes [`WorldRequest`] messages
//! sequentially from an mpsc channel.
//!
//! **Concurrency model**: one request is handled to completion before the
//! next is received. Interaction dispatch and the whole transaction
//! read-validate-mutate sequence run inside this loop, so no two requests
//! ever interleave and balances need no lock. Requests from one client
//! arrive in send order; there is no cross-actor ordering guarantee beyond
//! that, and none is needed.
//!
//! The [`Notifier`] is injected at `run()` time rather than construction
//! time, so transport wiring can happen after the actor/client pair exists.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::atm;
use crate::dispatch::InteractionDispatcher;
use crate::locale::Locale;
use crate::model::{ActorId, WorldMap};
use crate::notify::Notifier;
use crate::world::client::WorldClient;
use crate::world::error::WorldError;
use crate::world::message::WorldRequest;
use crate::world::store::{Session, SessionStore};

pub struct WorldActor {
    receiver: mpsc::Receiver<WorldRequest>,
    sessions: SessionStore,
    zones: WorldMap,
    dispatcher: InteractionDispatcher,
    locale: Locale,
    next_id: u32,
}

impl WorldActor {
    /// Creates the actor and its client handle.
    ///
    /// `capacity` bounds the request channel; senders wait when it is full.
    pub fn new(
        zones: WorldMap,
        dispatcher: InteractionDispatcher,
        locale: Locale,
        capacity: usize,
    ) -> (Self, WorldClient) {
        let (sender, receiver) = mpsc::channel(capacity);
        let actor = Self {
            receiver,
            sessions: SessionStore::default(),
            zones,
            dispatcher,
            locale,
            next_id: 1,
        };
        (actor, WorldClient::new(sender))
    }

    /// Runs the event loop until every client handle is dropped.
    pub async fn run<N: Notifier>(mut self, notifier: N) {
        info!(zones = self.zones.len(), "World actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                WorldRequest::Connect { params, respond_to } => {
                    let id = ActorId::from(self.next_id);
                    self.next_id += 1;
                    debug!(%id, name = %params.name, "Connect");
                    self.sessions.insert(Session {
                        id,
                        name: params.name,
                        position: params.position,
                        zone: params.zone,
                        balance: params.balance,
                    });
                    info!(%id, online = self.sessions.len(), "Actor connected");
                    let _ = respond_to.send(Ok(id));
                }
                WorldRequest::Disconnect { id, respond_to } => {
                    debug!(%id, "Disconnect");
                    match self.sessions.remove(id) {
                        Some(_) => {
                            info!(%id, online = self.sessions.len(), "Actor disconnected");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(%id, "Not found");
                            let _ = respond_to.send(Err(WorldError::NotFound(id.to_string())));
                        }
                    }
                }
                WorldRequest::Move {
                    id,
                    position,
                    zone,
                    respond_to,
                } => {
                    debug!(%id, %zone, "Move");
                    match self.sessions.session_mut(id) {
                        Some(session) => {
                            session.position = position;
                            session.zone = zone;
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(%id, "Not found");
                            let _ = respond_to.send(Err(WorldError::NotFound(id.to_string())));
                        }
                    }
                }
                WorldRequest::Snapshot { id, respond_to } => {
                    let session = self.sessions.session(id).cloned();
                    debug!(%id, found = session.is_some(), "Snapshot");
                    let _ = respond_to.send(Ok(session));
                }
                WorldRequest::Interact {
                    id,
                    category,
                    respond_to,
                } => {
                    debug!(%id, %category, "Interact");
                    match self.sessions.session(id) {
                        Some(session) => {
                            self.dispatcher.handle_interaction(
                                &self.zones,
                                session,
                                &category,
                                &notifier,
                            );
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(%id, "Not found");
                            let _ = respond_to.send(Err(WorldError::NotFound(id.to_string())));
                        }
                    }
                }
                WorldRequest::Transact {
                    id,
                    kind,
                    amount,
                    target,
                    respond_to,
                } => {
                    debug!(%id, %kind, "Transact");
                    if self.sessions.session(id).is_none() {
                        warn!(%id, "Not found");
                        let _ = respond_to.send(Err(WorldError::NotFound(id.to_string())));
                        continue;
                    }
                    let applied = atm::handle_action(
                        &mut self.sessions,
                        &notifier,
                        &self.locale,
                        id,
                        &kind,
                        &amount,
                        target.as_ref(),
                    );
                    let _ = respond_to.send(Ok(applied));
                }
            }
        }

        info!(online = self.sessions.len(), "World actor shutdown");
    }
}
