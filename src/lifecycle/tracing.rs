//! Observability setup.
//!
//! Initializes structured logging for the whole subsystem. Log levels come
//! from `RUST_LOG`; the compact format keeps lines short while keeping the
//! structured fields (`id`, `category`, `distance`, ...) that the actor loop
//! and the handlers attach.
//!
//! ```bash
//! # Request flow at a glance
//! RUST_LOG=info cargo test
//!
//! # Full payloads and silent dispatch exits
//! RUST_LOG=debug cargo test
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // module paths add little; fields carry the context
        .compact()
        .init();
}
