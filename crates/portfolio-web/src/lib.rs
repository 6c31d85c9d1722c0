#![cfg(target_arch = "wasm32")]
//! WASM entry point: wires the reveal observer, particle field, project
//! modals, developer console, and scramble effects to the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::anyhow;
use portfolio_core::{FieldParams, Palette, ParticleField, PointerState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod modal;
mod projects_data;
mod render;
mod reveal;
mod sched;
mod scramble;
mod terminal;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let canvas = document
        .get_element_by_id("canvas-container")
        .ok_or_else(|| anyhow!("missing #canvas-container"))?;
    let canvas: web::HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|e| anyhow!("{e:?}"))?;
    let (width, height) = dom::window_inner_size(&window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{e:?}"))?;

    let params = Rc::new(RefCell::new(FieldParams::default()));
    let palette = Rc::new(RefCell::new(Palette::default()));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let scroll_y = Rc::new(Cell::new(window.scroll_y().unwrap_or(0.0) as f32));

    let mut rng = StdRng::from_entropy();
    let mut field = ParticleField::new(width, height);
    field.populate(&params.borrow(), &palette.borrow(), &mut rng);
    let field = Rc::new(RefCell::new(field));

    // Each component wires independently; a missing element disables only
    // that component.
    if let Err(e) = reveal::observe_sections(&document) {
        log::error!("[reveal] {e:?}");
    }
    if let Err(e) = modal::wire(&document, Rc::new(projects_data::table())) {
        log::error!("[modal] {e:?}");
    }
    if let Err(e) = scramble::wire(&document) {
        log::error!("[scramble] {e:?}");
    }
    match terminal::Console::wire(
        &document,
        canvas.clone(),
        params.clone(),
        palette.clone(),
        field.clone(),
    ) {
        Ok(console) => events::wire_console_toggle(console),
        Err(e) => log::error!("[console] {e:?}"),
    }

    events::wire_pointer(&window, pointer.clone(), scroll_y.clone());
    wire_field_resize(
        &window,
        canvas.clone(),
        field.clone(),
        params.clone(),
        palette.clone(),
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx,
        field,
        params,
        palette,
        pointer,
        scroll_y,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Window resizes re-derive the surface size and rebuild the field from
/// scratch; prior particle state is discarded.
fn wire_field_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
    params: Rc<RefCell<FieldParams>>,
    palette: Rc<RefCell<Palette>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let (width, height) = dom::window_inner_size(&window);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            let params = *params.borrow();
            let palette = *palette.borrow();
            let mut rng = StdRng::from_entropy();
            field
                .borrow_mut()
                .resize(width, height, &params, &palette, &mut rng);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
