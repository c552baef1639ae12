//! Runtime configuration.

use serde::Deserialize;

/// Tunables for the interaction core. Loaded from JSON at startup or built
/// with [`Default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Maximum horizontal distance, in world units, at which an interaction
    /// resolves. Beyond it the actor gets a "too far away" rejection.
    pub max_interaction_distance: f64,

    /// Capacity of the world actor's request channel. Senders wait when the
    /// channel is full.
    pub request_capacity: usize,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            max_interaction_distance: 8.0,
            request_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: InteractionConfig =
            serde_json::from_str(r#"{"max_interaction_distance": 5.0}"#).unwrap();
        assert_eq!(config.max_interaction_distance, 5.0);
        assert_eq!(config.request_capacity, 64);
    }
}
