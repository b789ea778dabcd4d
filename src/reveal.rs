use crate::constants::*;
use crate::core::reveal::{grid_stagger_delay_secs, scroll_progress_pct, stagger_delay_secs, RevealPhase};
use crate::core::skills;
use crate::dom;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Wire the whole reveal/progress controller: staggered reveal classes, the
/// shared intersection observer, the skill-bar observer, and the scroll
/// progress indicator.
pub fn init(document: &web::Document) {
    let targets = register_targets(document);
    observe_reveals(&targets);
    init_skill_bars(document);
    init_scroll_progress(document);
}

fn for_each_selected(
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(usize, web::HtmlElement),
) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                f(i as usize, el);
            }
        }
    }
}

fn set_animation_delay(el: &web::HtmlElement, secs: f32) {
    _ = el
        .style()
        .set_property("--animation-delay", &format!("{secs:.2}s"));
}

/// Tag every registered element with the reveal class and a cascade delay
/// proportional to its index within its category. A category with no matches
/// is simply skipped.
fn register_targets(document: &web::Document) -> Vec<web::HtmlElement> {
    let mut targets = Vec::new();
    for selector in REVEAL_SELECTORS {
        for_each_selected(document, selector, |i, el| {
            _ = el.class_list().add_1("scroll-animate");
            set_animation_delay(&el, stagger_delay_secs(i));
            targets.push(el);
        });
    }
    // Grid items and timeline entries get their own cadence.
    for_each_selected(document, PROJECT_GRID_SELECTOR, |i, el| {
        set_animation_delay(&el, grid_stagger_delay_secs(i));
    });
    for_each_selected(document, TIMELINE_SELECTOR, |i, el| {
        set_animation_delay(&el, stagger_delay_secs(i));
    });
    targets
}

/// One shared observer marks elements revealed the first time ~10% becomes
/// visible. The transition is one-way: re-entering the viewport is a no-op.
fn observe_reveals(targets: &[web::HtmlElement]) {
    if targets.is_empty() {
        return;
    }
    for (i, el) in targets.iter().enumerate() {
        _ = el.set_attribute("data-reveal-index", &i.to_string());
    }
    let phases = Rc::new(RefCell::new(vec![RevealPhase::default(); targets.len()]));

    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(i) = target
                    .get_attribute("data-reveal-index")
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    continue;
                };
                let mut phases = phases.borrow_mut();
                if i < phases.len() && phases[i].reveal() {
                    _ = target.class_list().add_1("animate-in");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    if let Ok(observer) =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &opts)
    {
        for el in targets {
            observer.observe(el);
        }
    }
    closure.forget();
}

fn bar_fill_percent(el: &web::Element, fill: &FnvHashMap<&'static str, u32>) -> u32 {
    let classes = el.class_list();
    for i in 0..classes.length() {
        if let Some(name) = classes.item(i) {
            if let Some(pct) = fill.get(name.as_str()) {
                return *pct;
            }
        }
    }
    0
}

fn set_bar_width(el: &web::Element, width: &str) {
    if let Ok(Some(span)) = el.query_selector("span") {
        if let Ok(span) = span.dyn_into::<web::HtmlElement>() {
            _ = span.style().set_property("width", width);
        }
    }
}

/// Second, independent observer: once a skill bar is half visible, its inner
/// fill animates from 0% to the percent mapped from its category class.
fn init_skill_bars(document: &web::Document) {
    let mut bars = Vec::new();
    for_each_selected(document, SKILL_BAR_SELECTOR, |_, el| {
        if let Ok(Some(span)) = el.query_selector("span") {
            if let Ok(span) = span.dyn_into::<web::HtmlElement>() {
                _ = span.style().set_property("width", "0%");
                _ = span.style().set_property("transition", "width 1s ease-out");
            }
        }
        bars.push(el);
    });
    if bars.is_empty() {
        return;
    }

    let fill = skills::fill_targets();
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let pct = bar_fill_percent(&target, &fill);
                set_bar_width(&target, &format!("{pct}%"));
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(SKILL_BAR_THRESHOLD));
    if let Ok(observer) =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &opts)
    {
        for el in &bars {
            observer.observe(el);
        }
    }
    closure.forget();
}

/// Append the progress indicator and keep its width in sync with the scroll
/// position. The listener is passive so it never blocks the scroll gesture.
fn init_scroll_progress(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(bar) = document.create_element("div") else {
        return;
    };
    _ = bar.set_attribute("class", "scroll-progress");
    _ = body.append_child(&bar);
    let bar: web::HtmlElement = match bar.dyn_into() {
        Ok(b) => b,
        Err(_) => return,
    };

    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let scroll_top = w.scroll_y().unwrap_or(0.0);
        let Some(doc_el) = doc.document_element() else {
            return;
        };
        let Some((_, vh)) = dom::viewport_size() else {
            return;
        };
        let pct = scroll_progress_pct(scroll_top, doc_el.scroll_height() as f64, vh);
        _ = bar.style().set_property("width", &format!("{pct:.2}%"));
    }) as Box<dyn FnMut()>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
