use crate::dom;
use plexus_core::{Backdrop, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub backdrop: Rc<RefCell<Backdrop>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_scroll(&w);
    wire_resize(&w);
}

fn wire_mousemove(w: &InputWiring) {
    let backdrop = w.backdrop.clone();
    dom::listen(&w.document, "mousemove", move |ev: web::MouseEvent| {
        backdrop.borrow_mut().handle(InputEvent::PointerMoved {
            client_x: ev.client_x() as f32,
            client_y: ev.client_y() as f32,
        });
    });
}

fn wire_scroll(w: &InputWiring) {
    let backdrop = w.backdrop.clone();
    let window = w.window.clone();
    dom::listen(&w.window, "scroll", move |_ev: web::Event| {
        backdrop.borrow_mut().handle(InputEvent::Scrolled {
            offset_y: dom::scroll_y(&window) as f32,
        });
    });
}

fn wire_resize(w: &InputWiring) {
    let backdrop = w.backdrop.clone();
    let window = w.window.clone();
    let canvas = w.canvas.clone();
    dom::listen(&w.window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
        let (width, height) = dom::inner_size(&window);
        backdrop
            .borrow_mut()
            .handle(InputEvent::Resized { width, height });
    });
}
