//! Server endpoint resolution.
//!
//! The endpoint is normally derived from the page's own origin so the same
//! build works behind any host. A compile-time `PLATHOP_SERVER_URL` override
//! wins when set (local development against a remote server).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Compile-time endpoint override, if the build set one.
const ENDPOINT_OVERRIDE: Option<&str> = option_env!("PLATHOP_SERVER_URL");

/// WebSocket path served by the game server.
const WS_PATH: &str = "/ws";

/// Derive the channel endpoint from a page protocol (e.g. `https:`) and
/// host. Secure pages get `wss`, everything else `ws`.
#[must_use]
pub fn endpoint_from_location(protocol: &str, host: &str) -> String {
    if let Some(url) = ENDPOINT_OVERRIDE {
        return url.to_owned();
    }
    let scheme = if protocol.starts_with("https") { "wss" } else { "ws" };
    format!("{scheme}://{host}{WS_PATH}")
}

/// Resolve the channel endpoint from the browser's current location.
#[must_use]
pub fn server_endpoint() -> String {
    let (protocol, host) = match web_sys::window().map(|w| w.location()) {
        Some(location) => (
            location.protocol().unwrap_or_else(|_| "http:".to_owned()),
            location.host().unwrap_or_else(|_| "localhost:3000".to_owned()),
        ),
        None => ("http:".to_owned(), "localhost:3000".to_owned()),
    };
    endpoint_from_location(&protocol, &host)
}
