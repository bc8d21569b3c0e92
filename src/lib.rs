#![cfg(target_arch = "wasm32")]
use instant::Instant;
use plexus_core::{Backdrop, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod widgets;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plexus-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Log a wiring failure; the remaining widgets are wired regardless.
fn report(what: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] not wired: {:#}", what, e);
    }
}

fn wire_widgets(window: &web::Window, document: &web::Document) {
    report("nav", widgets::nav::wire_nav(window, document));
    report("faq", widgets::faq::wire_faq(document));
    match widgets::carousel::wire_carousel(window, document) {
        Ok(carousel) => events::wire_global_keydown(document, carousel),
        Err(e) => log::error!("[carousel] not wired: {:#}", e),
    }
    report("reveal", widgets::reveal::wire_reveal(window, document));
    report("navbar", widgets::effects::wire_scroll_effects(window, document));
    report("glitch", widgets::effects::wire_glitch(window, document));
    widgets::effects::wire_ripples(window, document);
    widgets::effects::wire_smooth_anchors(document);
    widgets::effects::wire_loaded(window, document);
    report("trail", widgets::trail::wire_trail(window, document));
}

async fn wire_backdrop(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::BG_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::BG_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let (width, height) = dom::inner_size(window);
    let params = SceneParams::default().with_seed(js_sys::Math::random().to_bits());
    let backdrop = Rc::new(RefCell::new(Backdrop::new(&params, width, height)?));

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        backdrop: backdrop.clone(),
    });

    let gpu = frame::init_gpu(&canvas, &backdrop)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable; backdrop disabled"))?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        backdrop,
        canvas,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Widgets first so the page is usable while the GPU adapter resolves
    wire_widgets(&window, &document);
    report("scene", wire_backdrop(&window, &document).await);
    Ok(())
}
