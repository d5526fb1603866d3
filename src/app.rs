//! Browser host: owns the canvas, the DOM status panel, and the event
//! wiring that feeds the connection state machine.
//!
//! Everything DOM- and WebSocket-shaped lives here so the rest of the crate
//! stays testable off-browser. The shared [`App`] record is held in an
//! `Rc<RefCell<_>>` and mutated only from event callbacks; the page's event
//! loop provides the single-threaded execution this relies on.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::{Closure, wasm_bindgen};
use web_sys::{
    CanvasRenderingContext2d, CloseEvent, Document, Element, ErrorEvent, HtmlCanvasElement,
    KeyboardEvent, MessageEvent, MouseEvent, WebSocket,
};

use crate::channel::{Channel, ChannelError};
use crate::config;
use crate::connection::{self, ConnectionError, RenderRequest, SocketEvent};
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::game::{self, UpdateOutcome};
use crate::panel::ConnectionPanel;
use crate::render;
use crate::state::{AppState, ConnectionStatus};
use crate::widgets::{Button, ButtonAction, button_at};

/// Element IDs the host page must provide.
const CANVAS_ID: &str = "game-canvas";
const ERROR_BOX_ID: &str = "error-box";
const CONNECTED_BOX_ID: &str = "connected-box";
const MESSAGES_BOX_ID: &str = "messages-box";
const MESSAGES_STATS_ID: &str = "messages-stats";

/// The full application: drawing context, status panel, and the shared
/// state core.
struct App {
    context: CanvasRenderingContext2d,
    panel: DomPanel,
    state: AppState,
}

/// Page entry point: set up logging, bind the canvas and status boxes, draw
/// the idle screen, and wire input listeners.
///
/// # Errors
///
/// Returns `Err` if a required page element is missing or a canvas call
/// fails during the first paint.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = require_element(&document, CANVAS_ID)?.dyn_into()?;
    #[allow(clippy::cast_sign_loss)]
    {
        canvas.set_width(GAME_WIDTH as u32);
        canvas.set_height(GAME_HEIGHT as u32);
    }
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let panel = DomPanel::bind(&document)?;

    let mut state = AppState::new();
    state.buttons = vec![Button::new("Connect", ButtonAction::Connect).position_right()];

    let app = Rc::new(RefCell::new(App { context, panel, state }));
    {
        let app = app.borrow();
        render::clear_canvas(&app.context);
        render::render_metadata(&app.context, &app.state)?;
        render::render_buttons(&app.context, &app.state.buttons)?;
    }

    wire_canvas_clicks(&app, &canvas)?;
    wire_keyboard(&app, &window)?;
    Ok(())
}

fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing page element #{id}")))
}

// =============================================================
// Connection wiring
// =============================================================

/// Open a new connection, then repaint the metadata HUD with the
/// `CONNECTING` status. Rejected attempts (already connecting/open) are
/// logged and leave the state untouched.
fn connect_to_server(app_rc: &Rc<RefCell<App>>) {
    let socket_rc = Rc::clone(app_rc);
    let mut guard = app_rc.borrow_mut();
    let app = &mut *guard;

    let result = connection::begin_connect(&mut app.state, || {
        let ws = open_socket(&socket_rc)?;
        Ok(Box::new(ws) as Box<dyn Channel>)
    });
    match result {
        Ok(()) => {}
        // A rejected reentrant connect changes nothing; leave the frame alone.
        Err(e @ ConnectionError::AlreadyActive(_)) => {
            warn!("connect rejected: {e}");
            return;
        }
        Err(e) => warn!("connect failed: {e}"),
    }

    render::clear_canvas(&app.context);
    if let Err(e) = render::render_metadata(&app.context, &app.state) {
        warn!("metadata render failed: {e:?}");
    }
}

/// Create the WebSocket and install the four lifecycle callbacks, each
/// forwarding one [`SocketEvent`] into [`dispatch`].
fn open_socket(app: &Rc<RefCell<App>>) -> Result<WebSocket, ChannelError> {
    let ws = WebSocket::new(&config::server_endpoint()).map_err(|e| ChannelError::from_js(&e))?;

    {
        let app = Rc::clone(app);
        let on_open = Closure::<dyn FnMut()>::new(move || dispatch(&app, SocketEvent::Opened));
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();
    }
    {
        let app = Rc::clone(app);
        let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |_event: CloseEvent| {
            dispatch(&app, SocketEvent::Closed);
        });
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();
    }
    {
        let app = Rc::clone(app);
        let on_error = Closure::<dyn FnMut(ErrorEvent)>::new(move |_event: ErrorEvent| {
            dispatch(&app, SocketEvent::Errored);
        });
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }
    {
        let app = Rc::clone(app);
        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                dispatch(&app, SocketEvent::Message(String::from(text)));
            } else {
                warn!("dropping non-text frame from server");
            }
        });
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();
    }

    Ok(ws)
}

/// Apply one socket event and perform whatever repaint it calls for.
fn dispatch(app_rc: &Rc<RefCell<App>>, event: SocketEvent) {
    let mut guard = app_rc.borrow_mut();
    let app = &mut *guard;
    let request = connection::apply_socket_event(&mut app.state, &mut app.panel, event);

    let result = match request {
        RenderRequest::None => Ok(()),
        RenderRequest::Metadata => {
            render::clear_canvas(&app.context);
            render::render_metadata(&app.context, &app.state)
        }
        RenderRequest::Frame(raw) => match game::classify_message(&raw) {
            UpdateOutcome::Snapshot(update) => render::render_game(&app.context, &app.state, &update),
            UpdateOutcome::GameOver(reason) => render::render_game_over(&app.context, &reason),
            UpdateOutcome::Unrecognized => Ok(()),
        },
    };
    if let Err(e) = result {
        warn!("render failed: {e:?}");
    }
}

// =============================================================
// Input wiring
// =============================================================

fn wire_canvas_clicks(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let action = {
            let guard = app.borrow();
            button_at(&guard.state.buttons, event.offset_x(), event.offset_y())
        };
        match action {
            Some(ButtonAction::Connect) => connect_to_server(&app),
            Some(ButtonAction::Disconnect) => {
                if let Err(e) = connection::disconnect(&app.borrow().state) {
                    warn!("disconnect failed: {e}");
                }
            }
            None => {}
        }
    });
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Forward game keys to the server while a connection is open.
fn wire_keyboard(app: &Rc<RefCell<App>>, window: &web_sys::Window) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let Some(message) = game::controls_message(&event.key()) else {
            return;
        };
        let mut guard = app.borrow_mut();
        let app = &mut *guard;
        if app.state.status != ConnectionStatus::Open {
            return;
        }
        if let Err(e) = connection::send_to_server(&mut app.state, &mut app.panel, &message) {
            warn!("control send failed: {e}");
        }
    });
    window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}

// =============================================================
// DOM status panel
// =============================================================

/// [`ConnectionPanel`] backed by the four status boxes on the host page.
/// DOM failures are logged and swallowed; status UI is best-effort.
struct DomPanel {
    document: Document,
    error_box: Element,
    connected_box: Element,
    messages_box: Element,
    messages_stats: Element,
}

impl DomPanel {
    fn bind(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            error_box: require_element(document, ERROR_BOX_ID)?,
            connected_box: require_element(document, CONNECTED_BOX_ID)?,
            messages_box: require_element(document, MESSAGES_BOX_ID)?,
            messages_stats: require_element(document, MESSAGES_STATS_ID)?,
        })
    }

    /// Insert a new text-bearing child at `position` ("afterbegin" or
    /// "beforeend") of `parent`.
    fn insert_text_element(&self, parent: &Element, tag: &str, position: &str, text: &str) {
        let child = match self.document.create_element(tag) {
            Ok(child) => child,
            Err(e) => {
                warn!("status panel element create failed: {e:?}");
                return;
            }
        };
        child.set_text_content(Some(text));
        if let Err(e) = parent.insert_adjacent_element(position, &child) {
            warn!("status panel insert failed: {e:?}");
        }
    }
}

impl ConnectionPanel for DomPanel {
    fn append_error(&mut self, text: &str) {
        self.insert_text_element(&self.error_box, "p", "beforeend", text);
    }

    fn clear_error(&mut self) {
        self.error_box.set_inner_html("");
    }

    fn show_connected(&mut self) {
        if let Err(e) = self.connected_box.remove_attribute("hidden") {
            warn!("status panel show failed: {e:?}");
        }
    }

    fn hide_connected(&mut self) {
        if let Err(e) = self.connected_box.set_attribute("hidden", "hidden") {
            warn!("status panel hide failed: {e:?}");
        }
    }

    fn prepend_message(&mut self, text: &str) {
        self.insert_text_element(&self.messages_box, "pre", "afterbegin", text);
    }

    fn clear_messages(&mut self) {
        self.messages_box.set_inner_html("");
    }

    fn set_stats(&mut self, text: &str) {
        self.messages_stats.set_text_content(Some(text));
    }
}
