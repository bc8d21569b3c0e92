use crate::render;
use instant::Instant;
use plexus_core::Backdrop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub backdrop: Rc<RefCell<Backdrop>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let mut backdrop = self.backdrop.borrow_mut();
        backdrop.frame(elapsed_ms);

        self.gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let uniforms = backdrop.uniforms(self.gpu.surface_px());
        match self.gpu.render(backdrop.lattice(), &uniforms) {
            Ok(()) => {}
            // Reconfigured on the next resize; skip this frame
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::warn!("[gpu] surface outdated; skipping frame");
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    backdrop: &Rc<RefCell<Backdrop>>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    // Counts only: input handlers may borrow the backdrop while we await
    let (points, line_vertices) = {
        let b = backdrop.borrow();
        (
            b.lattice().point_vertices().len(),
            b.lattice().line_vertices().len(),
        )
    };
    match render::GpuState::new(leaked_canvas, points, line_vertices).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    run_every_frame(move || frame_ctx.borrow_mut().frame());
}

/// Call `step` once per display refresh for the lifetime of the page.
pub fn run_every_frame(mut step: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        step();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
