//! Pointer and scroll listeners feeding the simulation's shared state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use portfolio_core::PointerState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer(
    window: &web::Window,
    pointer: Rc<RefCell<PointerState>>,
    scroll_y: Rc<Cell<f32>>,
) {
    {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            pointer.borrow_mut().pos = Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move || {
            pointer.borrow_mut().pressed = true;
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move || {
            pointer.borrow_mut().pressed = false;
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let window_for_scroll = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            scroll_y.set(window_for_scroll.scroll_y().unwrap_or(0.0) as f32);
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
