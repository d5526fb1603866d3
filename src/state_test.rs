use super::*;

// =============================================================
// AppState defaults
// =============================================================

#[test]
fn app_state_starts_disconnected() {
    let state = AppState::new();
    assert_eq!(state.status, ConnectionStatus::Disconnected);
}

#[test]
fn app_state_starts_with_zero_counters() {
    let state = AppState::new();
    assert_eq!(state.messages_in, 0);
    assert_eq!(state.messages_out, 0);
}

#[test]
fn app_state_starts_with_no_channel_and_no_widgets() {
    let state = AppState::new();
    assert!(state.channel.is_none());
    assert!(state.buttons.is_empty());
}

// =============================================================
// ConnectionStatus
// =============================================================

#[test]
fn connection_status_default_is_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
}

#[test]
fn connection_status_displays_uppercase_labels() {
    assert_eq!(ConnectionStatus::Disconnected.to_string(), "DISCONNECTED");
    assert_eq!(ConnectionStatus::Connecting.to_string(), "CONNECTING");
    assert_eq!(ConnectionStatus::Open.to_string(), "OPEN");
    assert_eq!(ConnectionStatus::Closed.to_string(), "CLOSED");
    assert_eq!(ConnectionStatus::Error.to_string(), "ERROR");
}

#[test]
fn connection_status_variants_are_distinct() {
    let variants = [
        ConnectionStatus::Disconnected,
        ConnectionStatus::Connecting,
        ConnectionStatus::Open,
        ConnectionStatus::Closed,
        ConnectionStatus::Error,
    ];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}
