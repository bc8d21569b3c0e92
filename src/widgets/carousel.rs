use crate::constants::*;
use crate::dom;
use plexus_core::widgets::{Carousel, SlideStep};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub type SharedCarousel = Rc<RefCell<CarouselView>>;

/// Carousel state bound to its track, indicator dots and buttons.
pub struct CarouselView {
    state: Carousel,
    track: web::HtmlElement,
    slides: Vec<web::Element>,
    indicators: Vec<web::Element>,
    prev_btn: web::HtmlElement,
    next_btn: web::HtmlElement,
    autoplay: Option<i32>,
}

impl CarouselView {
    fn apply(&self) {
        let slide_width = self
            .slides
            .first()
            .map(|s| s.client_width() as f64)
            .unwrap_or(0.0);
        _ = self.track.style().set_property(
            "transform",
            &format!("translateX(-{}px)", self.state.track_offset(slide_width)),
        );
        for (i, dot) in self.indicators.iter().enumerate() {
            dom::set_class(dot, ACTIVE_CLASS, self.state.indicator_active(i));
        }
        _ = self
            .prev_btn
            .style()
            .set_property("opacity", &self.state.prev_button_opacity().to_string());
        _ = self
            .next_btn
            .style()
            .set_property("opacity", &self.state.next_button_opacity().to_string());
    }

    pub fn step(&mut self, step: SlideStep) {
        if self.state.step(step) {
            self.apply();
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if self.state.go_to(index) {
            self.apply();
        }
    }

    fn auto_advance(&mut self) {
        if self.state.auto_advance() {
            self.apply();
        }
    }

    fn swipe(&mut self, start_x: f64, end_x: f64) {
        if self.state.swipe(start_x, end_x) {
            log::debug!("[carousel] swipe -> slide {}", self.state.index());
            self.apply();
        }
    }
}

pub fn wire_carousel(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<SharedCarousel> {
    let track = dom::require_html(document, CAROUSEL_TRACK)?;
    let prev_btn = dom::require_html(document, CAROUSEL_PREV)?;
    let next_btn = dom::require_html(document, CAROUSEL_NEXT)?;
    let indicators_container = dom::require(document, CAROUSEL_INDICATORS)?;
    let container = dom::require(document, CAROUSEL_CONTAINER)?;
    let slides = dom::query_all(document, CAROUSEL_SLIDE);

    let mut indicators = Vec::with_capacity(slides.len());
    for i in 0..slides.len() {
        let dot = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("create indicator: {:?}", e))?;
        _ = dot.class_list().add_1(INDICATOR_CLASS);
        dom::set_class(&dot, ACTIVE_CLASS, i == 0);
        _ = indicators_container.append_child(&dot);
        indicators.push(dot);
    }

    let view = Rc::new(RefCell::new(CarouselView {
        state: Carousel::new(slides.len()),
        track: track.clone(),
        slides,
        indicators: indicators.clone(),
        prev_btn: prev_btn.clone(),
        next_btn: next_btn.clone(),
        autoplay: None,
    }));
    log::info!("[carousel] slides={}", view.borrow().state.total());

    for (i, dot) in indicators.iter().enumerate() {
        let view = view.clone();
        dom::listen(dot, "click", move |_ev: web::MouseEvent| {
            view.borrow_mut().go_to(i);
        });
    }
    {
        let view = view.clone();
        dom::listen(&prev_btn, "click", move |_ev: web::MouseEvent| {
            view.borrow_mut().step(SlideStep::Prev);
        });
    }
    {
        let view = view.clone();
        dom::listen(&next_btn, "click", move |_ev: web::MouseEvent| {
            view.borrow_mut().step(SlideStep::Next);
        });
    }

    start_autoplay(window, &view);
    {
        let view = view.clone();
        let window = window.clone();
        dom::listen(&container, "mouseenter", move |_ev: web::MouseEvent| {
            let mut v = view.borrow_mut();
            v.state.set_paused(true);
            if let Some(handle) = v.autoplay.take() {
                window.clear_interval_with_handle(handle);
            }
        });
    }
    {
        let view = view.clone();
        let window = window.clone();
        dom::listen(&container, "mouseleave", move |_ev: web::MouseEvent| {
            view.borrow_mut().state.set_paused(false);
            start_autoplay(&window, &view);
        });
    }

    wire_swipe(&track, &view);
    {
        let view = view.clone();
        dom::listen(window, "resize", move |_ev: web::Event| {
            view.borrow().apply();
        });
    }
    Ok(view)
}

fn start_autoplay(window: &web::Window, view: &SharedCarousel) {
    let ticking = view.clone();
    let handle = dom::set_interval(window, CAROUSEL_AUTOPLAY_MS, move || {
        ticking.borrow_mut().auto_advance();
    });
    let mut v = view.borrow_mut();
    if let Some(old) = std::mem::replace(&mut v.autoplay, handle) {
        window.clear_interval_with_handle(old);
    }
}

fn wire_swipe(track: &web::HtmlElement, view: &SharedCarousel) {
    let start_x = Rc::new(Cell::new(0.0_f64));
    {
        let start_x = start_x.clone();
        dom::listen(track, "touchstart", move |ev: web::TouchEvent| {
            if let Some(t) = ev.touches().get(0) {
                start_x.set(t.client_x() as f64);
            }
        });
    }
    let view = view.clone();
    dom::listen(track, "touchend", move |ev: web::TouchEvent| {
        if let Some(t) = ev.changed_touches().get(0) {
            view.borrow_mut().swipe(start_x.get(), t.client_x() as f64);
        }
    });
}
