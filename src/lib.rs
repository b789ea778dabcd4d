#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, FALLBACK_GRADIENT, RESIZE_DEBOUNCE_MS};
use crate::core::{MeshScene, NODE_COUNT};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod lightbox;
mod render;
mod reveal;

/// Keep the canvas backing store in sync with its CSS size, coalescing
/// resize bursts into one recomputation. The node batch is untouched; the
/// GPU surface follows the new size on the next frame.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let pending: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(id) = pending.borrow_mut().take() {
            window.clear_timeout_with_handle(id);
        }
        let canvas_inner = canvas_resize.clone();
        let timeout = Closure::once_into_js(move || {
            dom::sync_canvas_backing_size(&canvas_inner);
        });
        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            timeout.unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            *pending.borrow_mut() = Some(id);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Pause the animation loop while the page is hidden and restart it when the
/// page becomes visible again. The loop itself stops re-arming on pause, so
/// resuming means starting a fresh loop.
fn wire_visibility_pause(ctx: Rc<RefCell<frame::FrameContext>>, paused: Rc<RefCell<bool>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let doc_for_cb = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hidden = doc_for_cb.hidden();
        let was_paused = *paused.borrow();
        *paused.borrow_mut() = hidden;
        if !hidden && was_paused {
            frame::start_loop(ctx.clone(), paused.clone());
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(doc) = dom::window_document() {
                boot(&doc);
            }
        }) as Box<dyn FnMut()>);
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        boot(&document);
    }
    Ok(())
}

fn boot(document: &web::Document) {
    reveal::init(document);
    lightbox::init(document);
    events::keyboard::wire_lightbox_escape(document);

    let document = document.clone();
    spawn_local(async move {
        if let Err(e) = init_background(&document).await {
            log::error!("background init error: {:?}", e);
        }
    });
}

async fn init_background(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::warn!("missing #{CANVAS_ID} canvas; background disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    let pointer_target: Rc<RefCell<[f32; 2]>> = Rc::new(RefCell::new([0.5, 0.5]));
    events::pointer::wire_pointer_tracking(document, pointer_target.clone());

    let mut rng = StdRng::from_entropy();
    let scene = MeshScene::new(NODE_COUNT, &mut rng);

    let gpu = frame::init_gpu(&canvas, scene.nodes.len()).await;
    if gpu.is_none() {
        // The canvas keeps a static two-tone gradient; no animation runs.
        log::warn!("WebGPU unavailable, falling back to CSS gradient");
        _ = canvas.style().set_property("background", FALLBACK_GRADIENT);
        return Ok(());
    }

    let paused = Rc::new(RefCell::new(false));
    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        canvas,
        pointer_target,
    }));
    wire_visibility_pause(ctx.clone(), paused.clone());
    frame::start_loop(ctx, paused);
    Ok(())
}
