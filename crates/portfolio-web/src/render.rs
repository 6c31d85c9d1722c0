//! Canvas2D rendering of the particle field: dots first, then proximity
//! links, all shifted for the scroll parallax.

use portfolio_core::constants::{LINK_WIDTH, SCROLL_PARALLAX};
use portfolio_core::{FieldParams, ParticleField};
use web_sys as web;

pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
    params: &FieldParams,
    scroll_y: f32,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.save();
    // Keeps the field visually anchored while the page scrolls
    let _ = ctx.translate(0.0, (-SCROLL_PARALLAX * scroll_y) as f64);

    for p in field.particles() {
        ctx.set_fill_style_str(&p.color.css());
        ctx.begin_path();
        let _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }

    ctx.set_line_width(LINK_WIDTH as f64);
    for link in field.links(params) {
        ctx.begin_path();
        ctx.set_stroke_style_str(&format!(
            "rgba({}, {}, {}, {})",
            link.color.r, link.color.g, link.color.b, link.alpha
        ));
        ctx.move_to(link.a.x as f64, link.a.y as f64);
        ctx.line_to(link.b.x as f64, link.b.y as f64);
        ctx.stroke();
    }

    ctx.restore();
}
