//! The console visibility shortcut.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::terminal::Console;

// Legacy keyCode for the backquote key, for layouts where `key` differs.
const BACKQUOTE_KEY_CODE: u32 = 192;

/// Toggle the console on the backquote key and its layout variants.
pub fn wire_console_toggle(console: Rc<RefCell<Console>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            let key = ev.key();
            if key == "`" || key == "~" || key == "ё" || ev.key_code() == BACKQUOTE_KEY_CODE {
                ev.prevent_default();
                Console::toggle(&console);
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
