//! # Outbound Notifications
//!
//! Everything the core says back to clients flows through the [`Notifier`]
//! trait: locale messages, audio cues, balance re-syncs, and client-event
//! delegation. Calls are synchronous and non-blocking from the world actor's
//! point of view - the production implementation just enqueues on an
//! unbounded channel and the transport layer drains it.
//!
//! Two implementations ship with the crate:
//!
//! - [`ChannelNotifier`] - the production path, a cloneable sender of
//!   `(ActorId, Outbound)` pairs.
//! - [`RecordingNotifier`] - an in-memory recorder for tests. Like a mock
//!   client, it lets a test assert exactly which payloads a handler emitted
//!   and in what order, without any transport in the loop.

use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use crate::model::{ActorId, Balance, Vec3};
use crate::registry::EventName;

/// A frontend audio cue identifier (sound name + sound set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudioCue {
    pub name: &'static str,
    pub set: &'static str,
}

impl AudioCue {
    /// Cue played after a transaction applies.
    pub fn success() -> Self {
        Self {
            name: "Hack_Success",
            set: "DLC_HEIST_BIOLAB_PREP_HACKING_SOUNDS",
        }
    }

    /// Cue played after a transaction is rejected.
    pub fn failure() -> Self {
        Self {
            name: "Hack_Failed",
            set: "DLC_HEIST_BIOLAB_PREP_HACKING_SOUNDS",
        }
    }
}

/// One outbound payload addressed to a single actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Outbound {
    /// A locale-resolved text message.
    Message { text: String },
    /// An audible feedback cue.
    Cue { cue: AudioCue },
    /// The authoritative balance state, pushed after every transaction
    /// attempt so the client view is never stale.
    BalanceSync { balance: Balance },
    /// Delegation back to the actor's own execution context, carrying the
    /// resolved object position (e.g. "open the ATM UI here").
    ClientEvent { event: EventName, position: Vec3 },
}

/// Outbound sink for the interaction core.
pub trait Notifier: Send + Sync {
    fn message(&self, to: ActorId, text: String);

    fn cue(&self, to: ActorId, cue: AudioCue);

    fn sync_balance(&self, to: ActorId, balance: Balance);

    fn client_event(&self, to: ActorId, event: EventName, position: Vec3);
}

/// Production notifier: enqueues payloads for the transport layer.
#[derive(Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<(ActorId, Outbound)>,
}

impl ChannelNotifier {
    pub fn new(sender: mpsc::UnboundedSender<(ActorId, Outbound)>) -> Self {
        Self { sender }
    }

    fn push(&self, to: ActorId, payload: Outbound) {
        // A closed receiver means the transport is gone; nothing to do.
        let _ = self.sender.send((to, payload));
    }
}

impl Notifier for ChannelNotifier {
    fn message(&self, to: ActorId, text: String) {
        self.push(to, Outbound::Message { text });
    }

    fn cue(&self, to: ActorId, cue: AudioCue) {
        self.push(to, Outbound::Cue { cue });
    }

    fn sync_balance(&self, to: ActorId, balance: Balance) {
        self.push(to, Outbound::BalanceSync { balance });
    }

    fn client_event(&self, to: ActorId, event: EventName, position: Vec3) {
        self.push(to, Outbound::ClientEvent { event, position });
    }
}

/// Test notifier that records every payload in emission order.
///
/// Cloning shares the underlying buffer, so a test can hand one clone to the
/// system under test and keep another for assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<(ActorId, Outbound)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<(ActorId, Outbound)> {
        std::mem::take(&mut self.sent.lock().unwrap())
    }

    /// Payloads addressed to one actor, in emission order.
    pub fn sent_to(&self, id: ActorId) -> Vec<Outbound> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| *to == id)
            .map(|(_, payload)| payload.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().unwrap().is_empty()
    }

    fn push(&self, to: ActorId, payload: Outbound) {
        self.sent.lock().unwrap().push((to, payload));
    }
}

impl Notifier for RecordingNotifier {
    fn message(&self, to: ActorId, text: String) {
        self.push(to, Outbound::Message { text });
    }

    fn cue(&self, to: ActorId, cue: AudioCue) {
        self.push(to, Outbound::Cue { cue });
    }

    fn sync_balance(&self, to: ActorId, balance: Balance) {
        self.push(to, Outbound::BalanceSync { balance });
    }

    fn client_event(&self, to: ActorId, event: EventName, position: Vec3) {
        self.push(to, Outbound::ClientEvent { event, position });
    }
}
