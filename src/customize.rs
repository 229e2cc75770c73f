//! The sender's persisted customization: who the page is for, the
//! message, the theme, and which decline-button variant renders.
//!
//! The data normally comes from the valentine API; here it is read from
//! an optional JSON file passed as the first CLI argument. Anything
//! going wrong (missing file, bad JSON) falls back to defaults; the
//! page itself has no failure modes worth surfacing.

use bevy::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config;

/// Which decline-button variant the sender picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// Runs away from the cursor.
    #[default]
    Dodge,
    /// Gets smaller each click.
    Shrink,
    /// A normal, polite button.
    Still,
}

#[derive(Debug, Clone, Deserialize, Resource)]
#[serde(default, rename_all = "camelCase")]
pub struct Customization {
    pub recipient_name: String,
    pub message: String,
    pub sender_name: Option<String>,
    pub behavior: Behavior,
    pub theme: String,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            recipient_name: "you".to_string(),
            message: config::DEFAULT_MESSAGE.to_string(),
            sender_name: None,
            behavior: Behavior::Dodge,
            theme: config::THEMES[0].id.to_string(),
        }
    }
}

impl Customization {
    /// Headline for the asking state.
    pub fn headline(&self) -> String {
        match &self.sender_name {
            Some(sender) => format!("{}, will you be {}'s valentine?", self.recipient_name, sender),
            None => format!("{}, will you be my valentine?", self.recipient_name),
        }
    }
}

/// Load customization from the first CLI argument, if given.
pub fn load() -> Customization {
    let Some(path) = std::env::args().nth(1) else {
        return Customization::default();
    };
    match read(&path) {
        Ok(custom) => {
            info!(path = %path, behavior = ?custom.behavior, theme = %custom.theme, "customization loaded");
            custom
        }
        Err(err) => {
            warn!(path = %path, error = %err, "could not read customization, using defaults");
            Customization::default()
        }
    }
}

fn read(path: &str) -> Result<Customization, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_customization() {
        let json = r#"{
            "recipientName": "Sam",
            "message": "Be mine?",
            "senderName": "Alex",
            "behavior": "shrink",
            "theme": "lavender"
        }"#;
        let c: Customization = serde_json::from_str(json).unwrap();
        assert_eq!(c.recipient_name, "Sam");
        assert_eq!(c.behavior, Behavior::Shrink);
        assert_eq!(c.theme, "lavender");
        assert_eq!(c.headline(), "Sam, will you be Alex's valentine?");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let c: Customization = serde_json::from_str(r#"{"recipientName": "Sam"}"#).unwrap();
        assert_eq!(c.behavior, Behavior::Dodge);
        assert_eq!(c.message, config::DEFAULT_MESSAGE);
        assert!(c.sender_name.is_none());
        assert_eq!(c.headline(), "Sam, will you be my valentine?");
    }

    #[test]
    fn bad_behavior_is_an_error_not_a_panic() {
        let result: Result<Customization, _> =
            serde_json::from_str(r#"{"behavior": "teleport"}"#);
        assert!(result.is_err());
    }
}
