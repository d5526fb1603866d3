//! Shared constants for the game client: canvas geometry, sprite sizes,
//! palette, and fonts.

// ── Canvas geometry ─────────────────────────────────────────────

/// Drawable width of the game canvas in CSS pixels.
pub const GAME_WIDTH: i32 = 800;

/// Drawable height of the game canvas in CSS pixels.
pub const GAME_HEIGHT: i32 = 600;

// ── Sprites ─────────────────────────────────────────────────────

/// Every platform is drawn this tall; only width varies per platform.
pub const PLATFORM_HEIGHT: i32 = 30;

/// Player sprite width.
pub const PLAYER_WIDTH: i32 = 30;

/// Player sprite height.
pub const PLAYER_HEIGHT: i32 = 40;

// ── Palette ─────────────────────────────────────────────────────

/// Fill color for all platforms.
pub const PLATFORM_COLOR: &str = "green";

/// Game-over overlay text color.
pub const RED_HEX: &str = "#ff0000";

/// Build-tag footer text color.
pub const GREY_HEX: &str = "#585858";

// ── Fonts ───────────────────────────────────────────────────────

/// Default label font, also used for the elapsed-time HUD line.
pub const LABEL_FONT: &str = "30px Arial";

/// Connection-status HUD line font.
pub const STATUS_FONT: &str = "25px Arial";

/// Build-tag footer font.
pub const FOOTER_FONT: &str = "20px Arial";

/// Game-over overlay font.
pub const GAME_OVER_FONT: &str = "bold 30px Arial";

// ── Build metadata ──────────────────────────────────────────────

/// Build mode shown in the metadata footer.
#[must_use]
pub fn build_mode() -> &'static str {
    if cfg!(debug_assertions) { "dev" } else { "prod" }
}

/// The footer build tag, e.g. `Mode: dev | v0.1.0`.
#[must_use]
pub fn build_tag() -> String {
    format!("Mode: {} | v{}", build_mode(), env!("CARGO_PKG_VERSION"))
}
