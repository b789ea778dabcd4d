use crate::constants::{LIGHTBOX_CONTAINER_ID, LIGHTBOX_ID, WATCH_BUTTON_SELECTOR};
use crate::core::video::to_embed_url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Video lightbox for project demos. Every operation degrades silently when
// the lightbox markup is absent; the rest of the page is unaffected.

fn lightbox_parts(document: &web::Document) -> Option<(web::Element, web::Element)> {
    let lightbox = document.get_element_by_id(LIGHTBOX_ID)?;
    let container = document.get_element_by_id(LIGHTBOX_CONTAINER_ID)?;
    Some((lightbox, container))
}

fn set_body_overflow(document: &web::Document, value: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", value);
    }
}

/// Show the lightbox playing `embed_url` in an injected iframe.
pub fn open(document: &web::Document, embed_url: &str) {
    let Some((lightbox, container)) = lightbox_parts(document) else {
        return;
    };
    container.set_inner_html("");
    if let Ok(iframe) = document.create_element("iframe") {
        _ = iframe.set_attribute("allowfullscreen", "");
        _ = iframe.set_attribute(
            "allow",
            "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
        );
        _ = iframe.set_attribute("src", embed_url);
        _ = container.append_child(&iframe);
    }
    _ = lightbox.class_list().remove_1("hidden");
    _ = lightbox.set_attribute("aria-hidden", "false");
    set_body_overflow(document, "hidden");
}

/// Hide the lightbox and drop the iframe, stopping playback.
pub fn close(document: &web::Document) {
    let Some((lightbox, container)) = lightbox_parts(document) else {
        return;
    };
    container.set_inner_html("");
    _ = lightbox.class_list().add_1("hidden");
    _ = lightbox.set_attribute("aria-hidden", "true");
    set_body_overflow(document, "");
}

/// Wire watch buttons to open the lightbox with a normalized embed URL, and
/// every `[data-close]` element inside the lightbox to close it.
pub fn init(document: &web::Document) {
    if let Ok(buttons) = document.query_selector_all(WATCH_BUTTON_SELECTOR) {
        for i in 0..buttons.length() {
            let Some(node) = buttons.item(i) else {
                continue;
            };
            let Ok(el) = node.dyn_into::<web::Element>() else {
                continue;
            };
            let Some(href) = el.get_attribute("href") else {
                continue;
            };
            let embed_url = to_embed_url(&href);
            let doc = document.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                ev.prevent_default();
                open(&doc, &embed_url);
            }) as Box<dyn FnMut(_)>);
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    if let Some(lightbox) = document.get_element_by_id(LIGHTBOX_ID) {
        if let Ok(close_els) = lightbox.query_selector_all("[data-close]") {
            for i in 0..close_els.length() {
                let Some(node) = close_els.item(i) else {
                    continue;
                };
                let Ok(el) = node.dyn_into::<web::Element>() else {
                    continue;
                };
                let doc = document.clone();
                let closure = Closure::wrap(Box::new(move || {
                    close(&doc);
                }) as Box<dyn FnMut()>);
                _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }
}
