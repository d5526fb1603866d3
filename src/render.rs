//! Rendering: draws frames, HUD text, and widgets to the 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It reads the shared state and the
//! current snapshot and produces pixels; it never mutates application state.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`, and
//! the host ([`crate::app`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    FOOTER_FONT, GAME_HEIGHT, GAME_OVER_FONT, GAME_WIDTH, GREY_HEX, RED_HEX, STATUS_FONT, build_tag,
};
use crate::scene;
use crate::snapshot::GameUpdate;
use crate::state::AppState;
use crate::widgets::{Button, Label, TextAlign};

/// Button chrome colors and font.
const BUTTON_FILL: &str = "#e8e8e8";
const BUTTON_BORDER: &str = "#1f1f1f";
const BUTTON_FONT: &str = "20px Arial";

/// Reset the drawable region to blank. Every frame starts here, or ghosts of
/// the previous frame remain.
pub fn clear_canvas(ctx: &CanvasRenderingContext2d) {
    ctx.clear_rect(0.0, 0.0, f64::from(GAME_WIDTH), f64::from(GAME_HEIGHT));
}

/// Draw one full frame from a snapshot.
///
/// The order is a fixed contract: clear, platforms, players, elapsed-time
/// label, widgets, then metadata. Later layers occlude earlier ones.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn render_game(
    ctx: &CanvasRenderingContext2d,
    state: &AppState,
    update: &GameUpdate,
) -> Result<(), JsValue> {
    clear_canvas(ctx);

    for rect in scene::frame_rects(update) {
        ctx.set_fill_style_str(rect.color);
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    render_label(
        ctx,
        &Label {
            text: format!("Time: {}", update.server_age),
            x: 10,
            y: 20,
            ..Label::default()
        },
    )?;
    render_buttons(ctx, &state.buttons)?;
    render_metadata(ctx, state)?;
    Ok(())
}

/// Draw the game-over overlay at canvas center.
///
/// Independent one-shot: it neither clears nor coordinates with the frame
/// cycle, so composition with a concurrent [`render_game`] is undefined.
///
/// # Errors
///
/// Returns `Err` if the text draw fails.
pub fn render_game_over(ctx: &CanvasRenderingContext2d, reason: &str) -> Result<(), JsValue> {
    ctx.set_fill_style_str(RED_HEX);
    ctx.set_font(GAME_OVER_FONT);
    ctx.set_text_align("center");
    ctx.fill_text(
        &format!("GAME OVER: {reason}"),
        f64::from(GAME_WIDTH) / 2.0,
        f64::from(GAME_HEIGHT) / 2.0,
    )
}

/// Draw the two HUD metadata lines: the build tag bottom-center and the
/// connection status top-center. Needs no snapshot, so status-only changes
/// can repaint just this after a clear.
///
/// # Errors
///
/// Returns `Err` if a text draw fails.
pub fn render_metadata(ctx: &CanvasRenderingContext2d, state: &AppState) -> Result<(), JsValue> {
    render_label(
        ctx,
        &Label {
            text: build_tag(),
            x: GAME_WIDTH / 2,
            y: GAME_HEIGHT - 15,
            font: FOOTER_FONT,
            color: GREY_HEX,
            align: TextAlign::Center,
            ..Label::default()
        },
    )?;
    render_label(
        ctx,
        &Label {
            text: format!("Connection Status: {}", state.status),
            x: GAME_WIDTH / 2,
            y: 20,
            font: STATUS_FONT,
            align: TextAlign::Center,
            ..Label::default()
        },
    )
}

/// Draw one line of HUD text.
///
/// # Errors
///
/// Returns `Err` if the text draw fails.
pub fn render_label(ctx: &CanvasRenderingContext2d, label: &Label) -> Result<(), JsValue> {
    ctx.set_fill_style_str(label.color);
    ctx.set_font(label.font);
    ctx.set_text_align(label.align.as_canvas_keyword());
    ctx.fill_text(&label.text, f64::from(label.x), f64::from(label.y))
}

/// Draw the current widget set: filled rectangles with centered labels.
///
/// # Errors
///
/// Returns `Err` if a label draw fails.
pub fn render_buttons(ctx: &CanvasRenderingContext2d, buttons: &[Button]) -> Result<(), JsValue> {
    for button in buttons {
        let (x, y) = (f64::from(button.x), f64::from(button.y));
        let (w, h) = (f64::from(button.width), f64::from(button.height));

        ctx.set_fill_style_str(BUTTON_FILL);
        ctx.fill_rect(x, y, w, h);
        ctx.set_stroke_style_str(BUTTON_BORDER);
        ctx.stroke_rect(x, y, w, h);

        ctx.save();
        ctx.set_fill_style_str(BUTTON_BORDER);
        ctx.set_font(BUTTON_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let result = ctx.fill_text(button.label, x + w / 2.0, y + h / 2.0);
        ctx.restore();
        result?;
    }
    Ok(())
}
