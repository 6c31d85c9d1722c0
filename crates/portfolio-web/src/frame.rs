//! The per-frame simulation loop, driven by `requestAnimationFrame` until
//! the page is torn down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_core::{FieldParams, Palette, ParticleField, PointerState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<ParticleField>>,
    pub params: Rc<RefCell<FieldParams>>,
    pub palette: Rc<RefCell<Palette>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub scroll_y: Rc<Cell<f32>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let params = *self.params.borrow();
        let palette = *self.palette.borrow();
        let pointer = *self.pointer.borrow();
        let scroll_y = self.scroll_y.get();
        let mut field = self.field.borrow_mut();
        field.step(pointer, scroll_y, &params, &palette);
        render::draw(&self.ctx, &self.canvas, &field, &params, scroll_y);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
