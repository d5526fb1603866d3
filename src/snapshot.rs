//! Wire DTOs for server-pushed game snapshots.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field so serde
//! does all the decoding work. Coordinates are integers on the wire (the
//! server simulates on an integer grid); they are widened to `f64` only at
//! the canvas boundary. Unknown fields (such as the server-side player age)
//! are ignored rather than rejected.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::{Deserialize, Serialize};

/// One complete server-pushed description of the game at a point in time.
///
/// Each snapshot fully replaces the previous frame; no identity is tracked
/// across snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    /// Seconds elapsed on the server since the game started.
    pub server_age: u64,
    /// Platforms in draw order (first is drawn first).
    pub platforms: Vec<GamePlatform>,
    /// Players in draw order, drawn after all platforms.
    pub players: Vec<PlayerState>,
}

/// A single platform: top-left position plus width. Height is fixed
/// ([`crate::consts::PLATFORM_HEIGHT`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlatform {
    /// Left edge in canvas coordinates.
    pub x: i32,
    /// Top edge in canvas coordinates.
    pub y: i32,
    /// Platform width in pixels.
    pub width: i32,
}

/// A single player: top-left position plus display color. Sprite size is
/// fixed ([`crate::consts::PLAYER_WIDTH`] × [`crate::consts::PLAYER_HEIGHT`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Left edge in canvas coordinates.
    pub x: i32,
    /// Top edge in canvas coordinates.
    pub y: i32,
    /// CSS-compatible fill color assigned by the server.
    pub color: String,
}

/// Decode a raw text frame into a snapshot.
///
/// # Errors
///
/// Returns the underlying serde error if the text is not a valid snapshot.
pub fn parse_update(raw: &str) -> Result<GameUpdate, serde_json::Error> {
    serde_json::from_str(raw)
}
