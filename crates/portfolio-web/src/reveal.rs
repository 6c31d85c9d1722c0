//! Scroll-triggered section reveals.
//!
//! Sections gain the `visible` class once 10% of them intersects the
//! viewport. The transition is one-way: the class is never removed, so
//! scrolling back up leaves sections revealed.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_THRESHOLD: f64 = 0.1;

pub fn observe_sections(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: JsValue| {
            for value in entries.iter() {
                let entry: web::IntersectionObserverEntry = value.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow!("{e:?}"))?;
    callback.forget();

    let sections = document
        .query_selector_all("section")
        .map_err(|e| anyhow!("{e:?}"))?;
    for i in 0..sections.length() {
        if let Some(node) = sections.item(i) {
            if let Ok(el) = node.dyn_into::<web::Element>() {
                observer.observe(&el);
            }
        }
    }
    Ok(())
}
