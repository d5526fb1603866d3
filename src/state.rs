//! Application state shared by the renderer and the connection manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AppState` exists per page session. It is created at startup, its
//! counters are reset on every new connection attempt, and it is never torn
//! down. Everything in here is browser-free so the connection state machine
//! can be exercised in native tests; the canvas context and DOM handles live
//! in [`crate::app`].

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt;

use crate::channel::Channel;
use crate::widgets::Button;

/// Lifecycle state of the server channel, as shown in the HUD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Initial state; no connection has ever been attempted.
    #[default]
    Disconnected,
    /// A channel is being opened; the open event has not fired yet.
    Connecting,
    /// The channel is open and messages flow.
    Open,
    /// The channel closed (cleanly or not). Terminal until manual reconnect.
    Closed,
    /// The channel reported a transport error. Terminal until manual reconnect.
    Error,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Disconnected => "DISCONNECTED",
            Self::Connecting => "CONNECTING",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// The shared application record: connection status, message counters, the
/// active widget set, and the server channel.
///
/// Counters are monotonically non-decreasing within one connection's lifetime
/// and reset to zero exactly when a new connection attempt begins.
#[derive(Default)]
pub struct AppState {
    /// Current channel lifecycle state.
    pub status: ConnectionStatus,
    /// Messages received since the current connection attempt began.
    pub messages_in: u64,
    /// Messages sent since the current connection attempt began.
    pub messages_out: u64,
    /// Interactive widgets drawn over the canvas each frame.
    pub buttons: Vec<Button>,
    /// The active server channel, if any. A stale handle may remain after
    /// close; [`crate::connection::begin_connect`] replaces it.
    pub channel: Option<Box<dyn Channel>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
