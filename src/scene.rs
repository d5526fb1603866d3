//! Scene planning: turns a snapshot into the ordered list of rectangles the
//! renderer will fill.
//!
//! Draw order is a fixed contract: all platforms, then all players, so
//! players occlude platforms on overlap. The order within each group is the
//! server's. Deciding the list here keeps the ordering and the bounds guard
//! out of the canvas code, where they could not be tested natively.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use log::warn;

use crate::consts::{GAME_HEIGHT, GAME_WIDTH, PLATFORM_COLOR, PLATFORM_HEIGHT, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::snapshot::GameUpdate;

/// One filled rectangle in the frame plan, borrowing its color from the
/// snapshot where the color is per-entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRect<'a> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'a str,
}

/// Guard against malformed server data: a sprite whose origin lies beyond
/// the canvas bounds is dropped for this frame, not clamped. Negative
/// coordinates are allowed; partially off-canvas sprites clip normally.
fn sprite_in_bounds(x: i32, y: i32) -> bool {
    if x > GAME_WIDTH || y > GAME_HEIGHT {
        warn!("sprite position out of bounds: ({x}, {y})");
        return false;
    }
    true
}

/// The frame plan for one snapshot: platform rectangles followed by player
/// rectangles, with out-of-bounds sprites skipped.
#[must_use]
pub fn frame_rects(update: &GameUpdate) -> Vec<SceneRect<'_>> {
    let mut rects = Vec::with_capacity(update.platforms.len() + update.players.len());

    for platform in &update.platforms {
        if !sprite_in_bounds(platform.x, platform.y) {
            continue;
        }
        rects.push(SceneRect {
            x: f64::from(platform.x),
            y: f64::from(platform.y),
            width: f64::from(platform.width),
            height: f64::from(PLATFORM_HEIGHT),
            color: PLATFORM_COLOR,
        });
    }

    for player in &update.players {
        if !sprite_in_bounds(player.x, player.y) {
            continue;
        }
        rects.push(SceneRect {
            x: f64::from(player.x),
            y: f64::from(player.y),
            width: f64::from(PLAYER_WIDTH),
            height: f64::from(PLAYER_HEIGHT),
            color: &player.color,
        });
    }

    rects
}
