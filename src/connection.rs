//! The connection manager: owns one server channel at a time and keeps the
//! shared [`AppState`] in sync with its lifecycle.
//!
//! Socket callbacks are reframed as a closed set of [`SocketEvent`] variants
//! applied by one exhaustive reducer, [`apply_socket_event`]. The reducer
//! mutates state and the status panel, then tells the host what to repaint
//! via [`RenderRequest`]; it never touches the canvas itself.
//!
//! ERROR HANDLING
//! ==============
//! Sending or disconnecting with no active channel is a caller contract
//! violation and returns an error synchronously. Transport errors arrive as
//! [`SocketEvent::Errored`] and funnel through the same cleanup as a normal
//! close. Nothing here retries; reconnecting is a manual user action.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use crate::channel::{Channel, ChannelError};
use crate::panel::ConnectionPanel;
use crate::state::{AppState, ConnectionStatus};
use crate::widgets::{Button, ButtonAction};

/// Contract and transport failures surfaced by connection operations.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// `begin_connect` was called while a channel is already connecting or
    /// open. Enforced internally so a reentrant connect cannot leak a live
    /// channel.
    #[error("connection attempt while channel is already {0}")]
    AlreadyActive(ConnectionStatus),
    /// A message was sent with no active channel.
    #[error("message sent with no active channel: {0}")]
    SendWithoutChannel(String),
    /// Disconnect was requested with no active channel.
    #[error("disconnect requested with no active channel")]
    DisconnectWithoutChannel,
    /// The underlying transport failed.
    #[error(transparent)]
    Transport(#[from] ChannelError),
}

/// The closed set of channel lifecycle events, in the order the transport
/// may emit them. Message events are delivered strictly in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SocketEvent {
    /// The channel finished its handshake.
    Opened,
    /// The channel closed, cleanly or not.
    Closed,
    /// The transport reported an error.
    Errored,
    /// One inbound text frame.
    Message(String),
}

/// What the host must repaint after an event is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderRequest {
    /// Nothing on the canvas changed.
    None,
    /// Clear the canvas and redraw the metadata HUD only.
    Metadata,
    /// Decode the raw payload and redraw the full frame.
    Frame(String),
}

/// Start a new connection attempt.
///
/// Zeroes both message counters, enters `Connecting`, clears any stale
/// widgets, then opens a channel via `open` and stores it as the active one.
///
/// # Errors
///
/// Returns [`ConnectionError::AlreadyActive`] while a channel is connecting
/// or open. If `open` itself fails the state falls to `Error` with a Connect
/// button restored, and the transport error is returned.
pub fn begin_connect(
    state: &mut AppState,
    open: impl FnOnce() -> Result<Box<dyn Channel>, ChannelError>,
) -> Result<(), ConnectionError> {
    if matches!(state.status, ConnectionStatus::Connecting | ConnectionStatus::Open) {
        return Err(ConnectionError::AlreadyActive(state.status));
    }

    state.messages_in = 0;
    state.messages_out = 0;
    state.status = ConnectionStatus::Connecting;
    state.buttons.clear();

    match open() {
        Ok(channel) => {
            state.channel = Some(channel);
            Ok(())
        }
        Err(e) => {
            state.status = ConnectionStatus::Error;
            state.buttons = vec![connect_button()];
            Err(e.into())
        }
    }
}

/// Request that the active channel close. The status transition happens
/// asynchronously via [`SocketEvent::Closed`], not in this call.
///
/// # Errors
///
/// Returns [`ConnectionError::DisconnectWithoutChannel`] if no channel is
/// active, or the transport error if the close request fails.
pub fn disconnect(state: &AppState) -> Result<(), ConnectionError> {
    let channel = state
        .channel
        .as_deref()
        .ok_or(ConnectionError::DisconnectWithoutChannel)?;
    channel.close()?;
    Ok(())
}

/// Transmit one message and refresh the stats readout.
///
/// # Errors
///
/// Returns [`ConnectionError::SendWithoutChannel`] if no channel is active.
/// Callers are expected to check the connection status first; this is a
/// contract violation, not a recoverable runtime condition. A failed send
/// leaves the outbound counter untouched.
pub fn send_to_server(
    state: &mut AppState,
    panel: &mut dyn ConnectionPanel,
    message: &str,
) -> Result<(), ConnectionError> {
    let channel = state
        .channel
        .as_deref()
        .ok_or_else(|| ConnectionError::SendWithoutChannel(message.to_owned()))?;
    channel.send(message)?;
    state.messages_out += 1;
    panel.set_stats(&stats_line(state));
    Ok(())
}

/// Apply one channel event to the shared state and the status panel.
pub fn apply_socket_event(
    state: &mut AppState,
    panel: &mut dyn ConnectionPanel,
    event: SocketEvent,
) -> RenderRequest {
    match event {
        SocketEvent::Opened => {
            state.status = ConnectionStatus::Open;
            panel.clear_error();
            panel.show_connected();
            state.buttons = vec![Button::new("Disconnect", ButtonAction::Disconnect).position_right()];
            RenderRequest::Metadata
        }
        SocketEvent::Closed => {
            close_cleanup(state, panel);
            RenderRequest::Metadata
        }
        SocketEvent::Errored => {
            // An error also closes: run the close path first, then override.
            close_cleanup(state, panel);
            state.status = ConnectionStatus::Error;
            panel.append_error("Connection error");
            RenderRequest::Metadata
        }
        SocketEvent::Message(text) => {
            state.messages_in += 1;
            panel.prepend_message(&pretty_message(&text));
            panel.set_stats(&stats_line(state));
            RenderRequest::Frame(text)
        }
    }
}

fn close_cleanup(state: &mut AppState, panel: &mut dyn ConnectionPanel) {
    state.status = ConnectionStatus::Closed;
    panel.clear_messages();
    panel.hide_connected();
    state.buttons = vec![connect_button()];
}

fn connect_button() -> Button {
    Button::new("Connect", ButtonAction::Connect).position_right()
}

/// The message-stats readout, e.g. `Received: 3 | Sent: 1`.
#[must_use]
pub fn stats_line(state: &AppState) -> String {
    format!(
        "Received: {} | Sent: {}",
        state.messages_in, state.messages_out
    )
}

/// Re-serialize a JSON payload with 2-space indentation for the message log;
/// anything that is not JSON passes through verbatim. Logging is best-effort
/// and must never block message forwarding, so failures fall back to the raw
/// text instead of propagating.
#[must_use]
pub fn pretty_message(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_owned()),
        Err(_) => raw.to_owned(),
    }
}
