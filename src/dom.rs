use crate::constants::MAX_DPR;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Device pixel ratio, capped to bound fill-rate cost.
#[inline]
pub fn device_pixel_ratio_capped() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio().min(MAX_DPR))
        .unwrap_or(1.0)
}

/// Viewport size in CSS pixels, used to normalize pointer coordinates.
#[inline]
pub fn viewport_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Match the canvas backing store to its CSS size times the capped DPR.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = device_pixel_ratio_capped();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}
