use std::cell::RefCell;
use std::rc::Rc;

use match_core::Session;
use web_sys::{CanvasRenderingContext2d, Document, HtmlAudioElement, HtmlCanvasElement, Window};

/// Global application state stored behind an `Rc<RefCell<_>>` so it can be
/// shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    /// Success sound, if the host page provides one.
    pub audio: Option<HtmlAudioElement>,
    pub session: Session,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
