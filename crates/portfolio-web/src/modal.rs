//! Project modal dialogs.
//!
//! A clicked card's heading text resolves case-insensitively against the
//! project table; a miss is a silent no-op. Matched entries populate the
//! dialog, toggling the image placeholder and each link button on presence.

use std::rc::Rc;

use anyhow::anyhow;
use portfolio_core::{ProjectEntry, ProjectTable};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub fn wire(document: &web::Document, table: Rc<ProjectTable>) -> anyhow::Result<()> {
    let cards = document
        .query_selector_all(".project-card")
        .map_err(|e| anyhow!("{e:?}"))?;
    for i in 0..cards.length() {
        let Some(node) = cards.item(i) else { continue };
        let Ok(card) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let doc = document.clone();
        let table = table.clone();
        let card_for_click = card.clone();
        let closure = Closure::wrap(Box::new(move || {
            let title = card_for_click
                .query_selector(".project-title")
                .ok()
                .flatten()
                .and_then(|el| el.text_content())
                .unwrap_or_default();
            match table.resolve(&title) {
                Some(entry) => open(&doc, entry),
                None => log::debug!("[modal] no project entry for {:?}", title.trim()),
            }
        }) as Box<dyn FnMut()>);
        let _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Ok(Some(close_btn)) = document.query_selector(".close-button") {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || close(&doc)) as Box<dyn FnMut()>);
        let _ = close_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // A click on the backdrop (the modal element itself, not its content)
    // also closes the dialog.
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let Some(target) = ev.target() else { return };
            if let Some(el) = target.dyn_ref::<web::Element>() {
                if el.id() == "project-modal" {
                    close(&doc);
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    Ok(())
}

fn open(document: &web::Document, entry: &ProjectEntry) {
    if let Some(el) = document.get_element_by_id("modal-title") {
        el.set_text_content(Some(&entry.title));
    }
    if let Some(el) = document.get_element_by_id("modal-full-desc") {
        el.set_text_content(Some(&entry.description));
    }

    let image = document
        .get_element_by_id("modal-img")
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
    let fallback = dom::html_element_by_id(document, "img-fallback");
    if let (Some(image), Some(fallback)) = (image, fallback) {
        let container = image.parent_element();
        match &entry.image {
            Some(src) => {
                image.set_src(src);
                if let Some(container) = &container {
                    let _ = container.class_list().add_1("has-image");
                }
                let _ = image.style().set_property("display", "block");
                let _ = fallback.style().set_property("display", "none");
            }
            None => {
                if let Some(container) = &container {
                    let _ = container.class_list().remove_1("has-image");
                }
                let _ = image.style().set_property("display", "none");
                let _ = fallback.style().set_property("display", "block");
            }
        }
    }

    link_button(document, "modal-link-git", entry.source_url.as_deref());
    link_button(document, "modal-link-itch", entry.demo_url.as_deref());
    link_button(document, "modal-link-steam", entry.store_url.as_deref());

    if let Some(modal) = dom::html_element_by_id(document, "project-modal") {
        let _ = modal.style().set_property("display", "block");
    }
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

/// Show the button with its link, or hide it when the entry has none.
fn link_button(document: &web::Document, element_id: &str, url: Option<&str>) {
    let Some(button) = dom::html_element_by_id(document, element_id) else {
        return;
    };
    match url {
        Some(url) => {
            let _ = button.set_attribute("href", url);
            let _ = button.style().set_property("display", "inline-block");
        }
        None => {
            let _ = button.style().set_property("display", "none");
        }
    }
}

fn close(document: &web::Document) {
    if let Some(modal) = dom::html_element_by_id(document, "project-modal") {
        let _ = modal.style().set_property("display", "none");
    }
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", "auto");
    }
}
