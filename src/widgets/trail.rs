use crate::constants::*;
use crate::{dom, frame};
use plexus_core::constants::TRAIL_RGB;
use plexus_core::widgets::TrailArena;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Trail {
    arena: TrailArena,
    rng: StdRng,
}

fn overlay_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    let style = canvas.style();
    for (key, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("pointer-events", "none"),
        ("z-index", TRAIL_Z_INDEX),
    ] {
        _ = style.set_property(key, value);
    }
    document
        .body()
        .ok_or_else(|| anyhow::anyhow!("missing body"))?
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append trail canvas: {:?}", e))?;
    Ok(canvas)
}

fn fit_to_window(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let (w, h) = dom::inner_size(window);
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
}

/// Full-window overlay of short-lived particles that follow the pointer.
pub fn wire_trail(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let canvas = overlay_canvas(document)?;
    fit_to_window(window, &canvas);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("2d context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("2d context has unexpected type"))?;

    let trail = Rc::new(RefCell::new(Trail {
        arena: TrailArena::default(),
        rng: StdRng::from_entropy(),
    }));

    {
        let trail = trail.clone();
        dom::listen(window, "mousemove", move |ev: web::MouseEvent| {
            let mut t = trail.borrow_mut();
            let Trail { arena, rng } = &mut *t;
            // Full arena: the pointer simply outruns the trail for a moment
            _ = arena.spawn(ev.client_x() as f32, ev.client_y() as f32, rng);
        });
    }
    {
        let win = window.clone();
        let canvas = canvas.clone();
        dom::listen(window, "resize", move |_ev: web::Event| {
            fit_to_window(&win, &canvas);
        });
    }

    let [r, g, b] = TRAIL_RGB;
    frame::run_every_frame(move || {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        trail.borrow_mut().arena.step(|p| {
            ctx.set_fill_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, p.alpha()));
            ctx.begin_path();
            _ = ctx.arc(p.x as f64, p.y as f64, p.size as f64, 0.0, TAU);
            ctx.fill();
        });
    });
    log::info!("[trail] overlay attached");
    Ok(())
}
