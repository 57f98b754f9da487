use crate::frame::FrameDriver;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window `resize` drives the viewport; no debouncing.
pub fn wire_resize(driver: &FrameDriver) {
    let ctx = driver.context().clone();
    let closure = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
