use super::*;

// These assume no compile-time PLATHOP_SERVER_URL override; the override
// short-circuits derivation entirely.

#[test]
fn secure_pages_get_wss() {
    assert_eq!(
        endpoint_from_location("https:", "play.example.com"),
        "wss://play.example.com/ws"
    );
}

#[test]
fn plain_pages_get_ws() {
    assert_eq!(
        endpoint_from_location("http:", "localhost:3000"),
        "ws://localhost:3000/ws"
    );
}

#[test]
fn the_host_port_is_preserved() {
    assert_eq!(
        endpoint_from_location("http:", "127.0.0.1:8080"),
        "ws://127.0.0.1:8080/ws"
    );
}
