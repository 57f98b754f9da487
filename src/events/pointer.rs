use crate::frame::FrameDriver;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag to orbit, right-drag to pan, wheel to dolly.
///
/// `pointerdown` is taken on the canvas; move/up are taken on the window so
/// a drag that leaves the canvas still ends cleanly.
pub fn wire_pointer(driver: &FrameDriver) {
    wire_pointerdown(driver);
    wire_pointermove(driver);
    wire_pointerup(driver);
    wire_wheel(driver);
    wire_contextmenu(driver);
}

fn wire_pointerdown(driver: &FrameDriver) {
    let ctx = driver.context().clone();
    let canvas = ctx.borrow().canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        let mut c = ctx.borrow_mut();
        match ev.button() {
            0 => c.orbit.begin_drag(x, y),
            2 => c.orbit.begin_pan(x, y),
            _ => return,
        }
        _ = c.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(driver: &FrameDriver) {
    let ctx = driver.context().clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut c = ctx.borrow_mut();
        if !c.orbit.is_dragging() {
            return;
        }
        let height = c.canvas.client_height() as f32;
        c.orbit.drag_to(ev.client_x() as f32, ev.client_y() as f32, height);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let cb = closure.as_ref().unchecked_ref();
        _ = window.add_event_listener_with_callback("pointermove", cb);
    }
    closure.forget();
}

fn wire_pointerup(driver: &FrameDriver) {
    let ctx = driver.context().clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        ctx.borrow_mut().orbit.end_drag();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        for name in ["pointerup", "pointercancel"] {
            _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

fn wire_wheel(driver: &FrameDriver) {
    let ctx = driver.context().clone();
    let canvas = ctx.borrow().canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        ctx.borrow_mut().orbit.zoom(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Right-drag pans, so the canvas must not open the context menu.
fn wire_contextmenu(driver: &FrameDriver) {
    let canvas = driver.context().borrow().canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
