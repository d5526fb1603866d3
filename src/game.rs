//! Routing for inbound game payloads.
//!
//! The connection manager hands every raw text frame here untouched. Most
//! frames are full snapshots; the server ends a round with a one-off
//! `{"gameOver": "<reason>"}` frame instead.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use log::warn;

use crate::snapshot::{self, GameUpdate};

/// What one inbound payload turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A full game snapshot; the host should repaint the frame.
    Snapshot(GameUpdate),
    /// The round ended; the host should draw the game-over overlay.
    GameOver(String),
    /// Neither a snapshot nor a game-over frame. Logged and dropped; the
    /// previous frame stays on screen.
    Unrecognized,
}

/// Decode a raw payload into an [`UpdateOutcome`].
#[must_use]
pub fn classify_message(raw: &str) -> UpdateOutcome {
    if let Ok(update) = snapshot::parse_update(raw) {
        return UpdateOutcome::Snapshot(update);
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw)
        && let Some(reason) = value.get("gameOver").and_then(serde_json::Value::as_str)
    {
        return UpdateOutcome::GameOver(reason.to_owned());
    }

    warn!("unrecognized server payload: {raw}");
    UpdateOutcome::Unrecognized
}

/// Keys that drive the player: left, right, jump.
const CONTROL_KEYS: [&str; 3] = ["ArrowLeft", "ArrowRight", "ArrowUp"];

/// The outbound control frame for a pressed key, or `None` for keys the game
/// ignores.
#[must_use]
pub fn controls_message(key: &str) -> Option<String> {
    if !CONTROL_KEYS.contains(&key) {
        return None;
    }
    Some(serde_json::json!({ "controls": [key] }).to_string())
}
