//! Theme variables and the unlock/lock cosmetics.

use portfolio_core::DEFAULT_PRIMARY_HEX;
use web_sys as web;

use crate::dom;

// Unlock flashes the inverted page for this long.
pub const FLASH_MS: i32 = 200;
// Lock fades the page out, swaps state, and fades back in.
pub const LOCK_FADE_MS: i32 = 500;

const ALERT_PRIMARY: &str = "#ff0000";
const DEFAULT_GLASS_BORDER: &str = "rgba(255, 96, 0, 0.3)";

/// Set `--primary` and its two derived translucent variants.
pub fn set_primary(document: &web::Document, value: &str) {
    dom::set_css_var(document, "--primary", value);
    dom::set_css_var(
        document,
        "--glass-border",
        &format!("color-mix(in srgb, {value}, transparent 70%)"),
    );
    dom::set_css_var(
        document,
        "--glass-hover",
        &format!("color-mix(in srgb, {value}, transparent 80%)"),
    );
}

pub fn set_alert_primary(document: &web::Document) {
    dom::set_css_var(document, "--primary", ALERT_PRIMARY);
}

pub fn restore_default(document: &web::Document) {
    dom::set_css_var(document, "--primary", DEFAULT_PRIMARY_HEX);
    dom::set_css_var(document, "--glass-border", DEFAULT_GLASS_BORDER);
}

pub fn flash_invert(document: &web::Document) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("filter", "invert(1)");
    }
}

pub fn clear_filter(document: &web::Document) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("filter", "none");
    }
}

pub fn fade_out(document: &web::Document) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("transition", "opacity 0.2s");
        let _ = body.style().set_property("opacity", "0");
    }
}

pub fn fade_in(document: &web::Document) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("opacity", "1");
    }
}

/// Reveal the hidden project card and hand it back so the caller can scroll
/// to it. The `visible` class hooks it into the reveal animation.
pub fn show_secret(document: &web::Document) -> Option<web::HtmlElement> {
    let card = dom::html_element_by_id(document, "secret-project")?;
    let _ = card.style().set_property("display", "flex");
    let _ = card.class_list().add_1("visible");
    Some(card)
}

pub fn hide_secret(document: &web::Document) {
    if let Some(card) = dom::html_element_by_id(document, "secret-project") {
        let _ = card.style().set_property("display", "none");
    }
}
