use crate::constants::*;
use crate::dom;
use plexus_core::widgets::{parse_target, Counter};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Mark elements `visible` as they scroll into view; stat numbers count up once.
pub fn wire_reveal(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let window = window.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                _ = target.class_list().add_1(VISIBLE_CLASS);
                if target.class_list().contains(STAT_NUMBER_CLASS) {
                    start_counter(&window, &target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {:?}", e))?;
    callback.forget();

    let targets = dom::query_all(document, REVEAL_TARGETS);
    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}

fn start_counter(window: &web::Window, target: &web::Element) {
    let value = target
        .get_attribute(STAT_TARGET_ATTR)
        .and_then(|v| parse_target(&v));
    let Some(value) = value else {
        log::warn!("[reveal] stat number without a numeric {}", STAT_TARGET_ATTR);
        return;
    };

    let mut counter = Counter::new(value);
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_in_tick = handle.clone();
    let el = target.clone();
    let win = window.clone();
    let id = dom::set_interval(window, COUNTER_TICK_MS, move || {
        el.set_text_content(Some(&counter.tick()));
        if counter.is_done() {
            if let Some(h) = handle_in_tick.take() {
                win.clear_interval_with_handle(h);
            }
        }
    });
    handle.set(id);
}
