use crate::widgets::carousel::SharedCarousel;
use plexus_core::widgets::carousel_step_for_key;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, carousel: &SharedCarousel) {
    if let Some(step) = carousel_step_for_key(&ev.key()) {
        carousel.borrow_mut().step(step);
    }
}

pub fn wire_global_keydown(document: &web::Document, carousel: SharedCarousel) {
    crate::dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &carousel);
    });
}
