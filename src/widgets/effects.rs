use crate::constants::*;
use crate::dom;
use plexus_core::widgets::{glitch_fires, hero_parallax, navbar_scrolled, ripple_origin};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Navbar `scrolled` class and hero parallax, both driven by page scroll.
pub fn wire_scroll_effects(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let navbar = dom::require(document, NAVBAR)?;
    let hero = document
        .query_selector(HERO_CONTENT)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let win = window.clone();
    dom::listen(window, "scroll", move |_ev: web::Event| {
        let scroll = dom::scroll_y(&win);
        dom::set_class(&navbar, SCROLLED_CLASS, navbar_scrolled(scroll));
        if let Some(hero) = &hero {
            let p = hero_parallax(scroll);
            let style = hero.style();
            _ = style.set_property("transform", &format!("translateY({}px)", p.translate_y));
            _ = style.set_property("opacity", &p.opacity.to_string());
        }
    });
    Ok(())
}

pub fn wire_glitch(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let glitch = dom::require(document, GLITCH)?;
    let mut rng = StdRng::from_entropy();
    let win = window.clone();
    dom::set_interval(window, GLITCH_INTERVAL_MS, move || {
        if glitch_fires(&mut rng) {
            _ = glitch.class_list().add_1(GLITCH_ACTIVE_CLASS);
            let el = glitch.clone();
            dom::set_timeout(&win, GLITCH_ACTIVE_MS, move || {
                _ = el.class_list().remove_1(GLITCH_ACTIVE_CLASS);
            });
        }
    })
    .ok_or_else(|| anyhow::anyhow!("glitch interval refused"))?;
    Ok(())
}

/// Transient ripple span on every `.btn` hover.
pub fn wire_ripples(window: &web::Window, document: &web::Document) {
    for btn in dom::query_all(document, BUTTON) {
        let Ok(btn) = btn.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let win = window.clone();
        let doc = document.clone();
        let target = btn.clone();
        dom::listen(&btn, "mouseenter", move |ev: web::MouseEvent| {
            let Ok(ripple) = doc.create_element("span") else {
                return;
            };
            let [x, y] = ripple_origin(
                ev.page_x() as f64,
                ev.page_y() as f64,
                target.offset_left() as f64,
                target.offset_top() as f64,
            );
            if let Some(span) = ripple.dyn_ref::<web::HtmlElement>() {
                let style = span.style();
                _ = style.set_property("left", &format!("{}px", x));
                _ = style.set_property("top", &format!("{}px", y));
            }
            _ = ripple.class_list().add_1(RIPPLE_CLASS);
            _ = target.append_child(&ripple);
            dom::set_timeout(&win, RIPPLE_LIFETIME_MS, move || ripple.remove());
        });
    }
}

/// In-page anchors scroll smoothly to their target instead of jumping.
pub fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_LINKS) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; nothing to scroll to
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

pub fn wire_loaded(window: &web::Window, document: &web::Document) {
    let doc = document.clone();
    dom::listen(window, "load", move |_ev: web::Event| {
        if let Some(body) = doc.body() {
            _ = body.class_list().add_1(LOADED_CLASS);
        }
    });
}
