//! Canvas-drawn UI widgets: buttons and text labels.
//!
//! Buttons do not store click closures. Each carries a [`ButtonAction`]
//! variant that the host dispatches after hit-testing the cursor position,
//! so widget state stays plain data and the click wiring stays in one place.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use crate::consts::{GAME_WIDTH, LABEL_FONT};

/// Default button size in pixels.
const BUTTON_WIDTH: i32 = 140;
const BUTTON_HEIGHT: i32 = 40;

/// Margin between a right-positioned button and the canvas edge.
const BUTTON_MARGIN: i32 = 10;

/// What the host should do when a button is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Open a new server connection.
    Connect,
    /// Close the active server connection.
    Disconnect,
}

/// A clickable rectangle with a centered text label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub action: ButtonAction,
}

impl Button {
    /// A button at the canvas origin; position it before use.
    #[must_use]
    pub fn new(label: &'static str, action: ButtonAction) -> Self {
        Self {
            label,
            x: 0,
            y: 0,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            action,
        }
    }

    /// Snap the button to the canvas's top-right corner.
    #[must_use]
    pub fn position_right(mut self) -> Self {
        self.x = GAME_WIDTH - self.width - BUTTON_MARGIN;
        self.y = BUTTON_MARGIN;
        self
    }

    /// Whether a canvas-space point falls inside the button rectangle.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The action of the first button containing the point, if any.
#[must_use]
pub fn button_at(buttons: &[Button], x: i32, y: i32) -> Option<ButtonAction> {
    buttons.iter().find(|b| b.contains(x, y)).map(|b| b.action)
}

/// Horizontal text alignment for a [`Label`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    /// The Canvas2D `textAlign` keyword.
    #[must_use]
    pub fn as_canvas_keyword(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// Parameters for one line of HUD text.
///
/// Construct with struct-update syntax over [`Label::default`] so call sites
/// only name the fields they care about.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font: &'static str,
    pub color: &'static str,
    pub align: TextAlign,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: String::new(),
            x: 0,
            y: 0,
            font: LABEL_FONT,
            color: "black",
            align: TextAlign::Left,
        }
    }
}
