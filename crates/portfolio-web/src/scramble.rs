//! Hover-triggered text scramble.
//!
//! Each `.scramble-text` element gets its own timeline driven by
//! `requestAnimationFrame`. Re-entering mid-flight cancels the pending frame
//! and restarts from whatever the element currently shows.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use portfolio_core::{ScrambleCell, ScrambleTimeline};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Fx {
    el: web::HtmlElement,
    target: String,
    timeline: Option<ScrambleTimeline>,
    raf_id: Option<i32>,
    rng: StdRng,
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let nodes = document
        .query_selector_all(".scramble-text")
        .map_err(|e| anyhow!("{e:?}"))?;
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let target = el
            .get_attribute("data-text")
            .unwrap_or_else(|| el.inner_text());
        let fx = Rc::new(RefCell::new(Fx {
            el: el.clone(),
            target,
            timeline: None,
            raf_id: None,
            rng: StdRng::from_entropy(),
        }));
        let tick: Tick = Rc::new(RefCell::new(None));
        {
            let fx = fx.clone();
            let tick_inner = tick.clone();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                step(&fx, &tick_inner);
            }) as Box<dyn FnMut()>));
        }
        {
            let closure = Closure::wrap(Box::new(move || {
                restart(&fx, &tick);
            }) as Box<dyn FnMut()>);
            let _ =
                el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
    Ok(())
}

/// Cancel any in-flight cycle and start over from the displayed text.
fn restart(fx: &Rc<RefCell<Fx>>, tick: &Tick) {
    {
        let mut guard = fx.borrow_mut();
        let state = &mut *guard;
        if let Some(id) = state.raf_id.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        let current = state.el.inner_text();
        state.timeline = Some(ScrambleTimeline::new(&current, &state.target, &mut state.rng));
    }
    step(fx, tick);
}

fn step(fx: &Rc<RefCell<Fx>>, tick: &Tick) {
    let done = {
        let mut guard = fx.borrow_mut();
        let state = &mut *guard;
        let Some(timeline) = state.timeline.as_mut() else {
            return;
        };
        let (cells, done) = timeline.advance(&mut state.rng);
        state.el.set_inner_html(&render_cells(&cells));
        if done {
            state.timeline = None;
            state.raf_id = None;
        }
        done
    };
    if done {
        return;
    }
    if let Some(window) = web::window() {
        if let Some(callback) = tick.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                fx.borrow_mut().raf_id = Some(id);
            }
        }
    }
}

fn render_cells(cells: &[ScrambleCell]) -> String {
    let mut out = String::new();
    for cell in cells {
        match cell {
            ScrambleCell::Waiting(Some(c)) | ScrambleCell::Settled(Some(c)) => out.push(*c),
            ScrambleCell::Waiting(None) | ScrambleCell::Settled(None) => {}
            ScrambleCell::Glyph(c) => {
                out.push_str("<span style=\"color: var(--primary)\">");
                out.push(*c);
                out.push_str("</span>");
            }
        }
    }
    out
}
