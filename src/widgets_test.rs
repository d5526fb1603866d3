use super::*;

use crate::consts::GAME_HEIGHT;

// =============================================================
// Button geometry
// =============================================================

#[test]
fn new_button_sits_at_origin_with_default_size() {
    let button = Button::new("Connect", ButtonAction::Connect);
    assert_eq!((button.x, button.y), (0, 0));
    assert_eq!((button.width, button.height), (BUTTON_WIDTH, BUTTON_HEIGHT));
}

#[test]
fn position_right_snaps_to_top_right_margin() {
    let button = Button::new("Disconnect", ButtonAction::Disconnect).position_right();
    assert_eq!(button.x, GAME_WIDTH - button.width - BUTTON_MARGIN);
    assert_eq!(button.y, BUTTON_MARGIN);
}

#[test]
fn position_right_stays_inside_the_canvas() {
    let button = Button::new("Connect", ButtonAction::Connect).position_right();
    assert!(button.x >= 0);
    assert!(button.x + button.width <= GAME_WIDTH);
    assert!(button.y + button.height <= GAME_HEIGHT);
}

// =============================================================
// Hit-testing
// =============================================================

#[test]
fn contains_is_inclusive_at_top_left() {
    let button = Button::new("Connect", ButtonAction::Connect).position_right();
    assert!(button.contains(button.x, button.y));
}

#[test]
fn contains_is_exclusive_at_bottom_right() {
    let button = Button::new("Connect", ButtonAction::Connect).position_right();
    assert!(!button.contains(button.x + button.width, button.y));
    assert!(!button.contains(button.x, button.y + button.height));
}

#[test]
fn button_at_reports_the_hit_action() {
    let buttons = vec![Button::new("Disconnect", ButtonAction::Disconnect).position_right()];
    let hit = button_at(&buttons, buttons[0].x + 1, buttons[0].y + 1);
    assert_eq!(hit, Some(ButtonAction::Disconnect));
}

#[test]
fn button_at_misses_outside_every_button() {
    let buttons = vec![Button::new("Connect", ButtonAction::Connect).position_right()];
    assert_eq!(button_at(&buttons, 0, GAME_HEIGHT - 1), None);
}

#[test]
fn button_at_on_empty_set_is_none() {
    assert_eq!(button_at(&[], 10, 10), None);
}

// =============================================================
// Labels
// =============================================================

#[test]
fn label_default_is_left_aligned_black() {
    let label = Label::default();
    assert_eq!(label.align, TextAlign::Left);
    assert_eq!(label.color, "black");
    assert_eq!(label.font, LABEL_FONT);
}

#[test]
fn text_align_maps_to_canvas_keywords() {
    assert_eq!(TextAlign::Left.as_canvas_keyword(), "left");
    assert_eq!(TextAlign::Center.as_canvas_keyword(), "center");
}
