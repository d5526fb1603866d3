//! The bidirectional message channel between client and server.
//!
//! [`Channel`] is the seam between the connection state machine and the
//! transport. Production code backs it with a browser `WebSocket`; tests
//! back it with in-memory doubles.

use wasm_bindgen::JsValue;
use web_sys::WebSocket;

/// Transport-level failure reported by a [`Channel`] operation.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The underlying transport rejected the operation.
    #[error("channel transport error: {0}")]
    Transport(String),
}

impl ChannelError {
    /// Wrap an opaque browser-side error value.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Transport(format!("{value:?}"))
    }
}

/// One live bidirectional text-message transport.
pub trait Channel {
    /// Transmit one text frame to the server.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Transport`] if the transport refuses the send
    /// (e.g. the socket is no longer open).
    fn send(&self, message: &str) -> Result<(), ChannelError>;

    /// Request that the channel close. The lifecycle transition happens
    /// asynchronously via the close event, not in this call.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Transport`] if the close request itself fails.
    fn close(&self) -> Result<(), ChannelError>;
}

impl Channel for WebSocket {
    fn send(&self, message: &str) -> Result<(), ChannelError> {
        self.send_with_str(message)
            .map_err(|e| ChannelError::from_js(&e))
    }

    fn close(&self) -> Result<(), ChannelError> {
        WebSocket::close(self).map_err(|e| ChannelError::from_js(&e))
    }
}
