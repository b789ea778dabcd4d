use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Pointer and touch listeners are plain last-value-wins producers: they only
// overwrite the shared target position, which the next frame step consumes.

fn write_target(target: &Rc<RefCell<[f32; 2]>>, client_x: f64, client_y: f64) {
    if let Some((vw, vh)) = dom::viewport_size() {
        if vw > 0.0 && vh > 0.0 {
            *target.borrow_mut() = [(client_x / vw) as f32, (client_y / vh) as f32];
        }
    }
}

pub fn wire_pointer_tracking(document: &web::Document, target: Rc<RefCell<[f32; 2]>>) {
    {
        let target = target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            write_target(&target, ev.client_x() as f64, ev.client_y() as f64);
        }) as Box<dyn FnMut(_)>);
        _ = document
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                write_target(&target, touch.client_x() as f64, touch.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}
