//! Locale-resolved message catalog.
//!
//! Messages are plain templates so a deployment can swap them out via
//! configuration without touching code. Placeholders use `{name}` syntax and
//! are substituted by the accessor methods.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub too_far_away: String,
    pub interaction_not_found: String,
    /// Template for the receiving side of a transfer.
    /// Placeholders: `{amount}`, `{from}`.
    pub funds_received: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            too_far_away: "You are too far away.".to_string(),
            interaction_not_found: "That interaction does not exist.".to_string(),
            funds_received: "You received {amount} from {from}.".to_string(),
        }
    }
}

impl Locale {
    /// Formats the "funds received" message for a transfer target.
    pub fn received_funds(&self, amount: f64, from: &str) -> String {
        self.funds_received
            .replace("{amount}", &format!("${amount}"))
            .replace("{from}", from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn received_funds_substitutes_placeholders() {
        let locale = Locale::default();
        assert_eq!(
            locale.received_funds(75.0, "Alice"),
            "You received $75 from Alice."
        );
    }

    #[test]
    fn templates_load_from_config() {
        let locale: Locale =
            serde_json::from_str(r#"{"funds_received": "{from} sent you {amount}"}"#).unwrap();
        assert_eq!(locale.received_funds(5.5, "Bob"), "Bob sent you $5.5");
        assert_eq!(locale.too_far_away, Locale::default().too_far_away);
    }
}
