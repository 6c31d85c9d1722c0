use portfolio_core::Rgb;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Window inner size in CSS pixels; the canvas backing store tracks this.
pub fn window_inner_size(window: &web::Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

pub fn set_css_var(document: &web::Document, name: &str, value: &str) {
    if let Some(root) = document.document_element() {
        if let Some(el) = root.dyn_ref::<web::HtmlElement>() {
            let _ = el.style().set_property(name, value);
        }
    }
}

/// Resolve any CSS color expression to RGB channels. Hex literals are
/// handled directly; everything else goes through a probe element so the
/// browser does the computation.
pub fn computed_color_rgb(document: &web::Document, value: &str) -> Option<Rgb> {
    if let Ok(rgb) = Rgb::parse_hex(value) {
        return Some(rgb);
    }
    let body = document.body()?;
    let probe: web::HtmlElement = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    probe.style().set_property("color", value).ok()?;
    body.append_child(&probe).ok()?;
    let resolved = web::window()
        .and_then(|w| w.get_computed_style(&probe).ok().flatten())
        .and_then(|style| style.get_property_value("color").ok());
    let _ = body.remove_child(&probe);
    parse_rgb_string(&resolved?)
}

/// Parse the browser's computed `rgb(r, g, b)` / `rgba(...)` form.
fn parse_rgb_string(resolved: &str) -> Option<Rgb> {
    let mut channels = resolved
        .split(|c: char| !c.is_ascii_digit() && c != '.')
        .filter(|t| !t.is_empty())
        .filter_map(|t| t.parse::<f32>().ok());
    Some(Rgb::new(channels.next()?, channels.next()?, channels.next()?))
}

pub fn scroll_to_section(document: &web::Document, anchor: &str) {
    if let Some(el) = document.get_element_by_id(anchor) {
        let options = web::ScrollIntoViewOptions::new();
        options.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_into_view_center(el: &web::Element) {
    let options = web::ScrollIntoViewOptions::new();
    options.set_behavior(web::ScrollBehavior::Smooth);
    options.set_block(web::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web::window() {
        let options = web::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
