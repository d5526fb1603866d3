//! Browser client for PlatHop, a multiplayer platform-survival game.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws
//! every server-pushed game snapshot to a 2D canvas and manages the
//! WebSocket connection lifecycle: connect, disconnect, error handling, and
//! manual reconnect through an on-canvas button. There is no client-side
//! simulation; each snapshot fully replaces the previous frame, and all work
//! is driven by socket and input events on the page's event loop.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Shared application record and connection status |
//! | [`connection`] | Channel lifecycle state machine and message flow |
//! | [`channel`] | Transport seam over the WebSocket |
//! | [`panel`] | Status-panel seam over the page's DOM boxes |
//! | [`snapshot`] | Wire DTOs for server snapshots |
//! | [`scene`] | Snapshot → ordered draw list, with the bounds guard |
//! | [`render`] | Canvas drawing (frames, HUD, widgets, game over) |
//! | [`widgets`] | Button and label primitives |
//! | [`game`] | Inbound payload routing and outbound control frames |
//! | [`config`] | Server endpoint resolution |
//! | [`app`] | Browser host: DOM, WebSocket, and input wiring |
//! | [`consts`] | Canvas geometry, sprite sizes, palette, fonts |

pub mod app;
pub mod channel;
pub mod config;
pub mod connection;
pub mod consts;
pub mod game;
pub mod panel;
pub mod render;
pub mod scene;
pub mod snapshot;
pub mod state;
pub mod widgets;
