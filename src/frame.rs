use crate::core::MeshScene;
use crate::dom;
use crate::render;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: MeshScene,
    pub gpu: Option<render::GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    /// Latest raw pointer position, written by input listeners.
    pub pointer_target: Rc<RefCell<[f32; 2]>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let [tx, ty] = *self.pointer_target.borrow();
        self.scene.pointer.target = Vec2::new(tx, ty);
        self.scene.step();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let dpr = dom::device_pixel_ratio_capped() as f32;
            if let Err(e) = g.render(&self.scene, dpr) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_nodes: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, max_nodes).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Start (or restart) the self-re-arming animation-frame loop. Each tick
/// checks the pause guard first: when the page is hidden the tick returns
/// without scheduling a successor, and the visibility handler calls this
/// again once the page is visible.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, paused: Rc<RefCell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if *paused.borrow() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
