//! The connection status panel: four addressable page regions that sit
//! outside the canvas and mirror the channel lifecycle for the user.
//!
//! The trait keeps the state machine free of DOM types; the browser-backed
//! implementation lives in [`crate::app`].

/// Sink for connection UI updates: an error box, a "connected" indicator,
/// a message log, and a one-line message-stats readout.
pub trait ConnectionPanel {
    /// Append a notice to the error box.
    fn append_error(&mut self, text: &str);

    /// Empty the error box.
    fn clear_error(&mut self);

    /// Reveal the "connected" indicator.
    fn show_connected(&mut self);

    /// Hide the "connected" indicator.
    fn hide_connected(&mut self);

    /// Add a message to the top of the message log.
    fn prepend_message(&mut self, text: &str);

    /// Empty the message log.
    fn clear_messages(&mut self);

    /// Replace the message-stats line.
    fn set_stats(&mut self, text: &str);
}
