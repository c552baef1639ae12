//! Transport-level errors for the world actor and its clients.

/// Errors raised on the request path between a client and the world actor.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("World actor closed")]
    ActorClosed,
    #[error("World actor dropped response channel")]
    ActorDropped,
    #[error("Actor not found: {0}")]
    NotFound(String),
}
