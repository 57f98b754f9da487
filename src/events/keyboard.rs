use crate::constants::{KEY_TOGGLE_GUI, KEY_TOGGLE_PLAY};
use crate::frame::FrameDriver;
use crate::gui;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_keyboard(driver: &FrameDriver) {
    let driver = driver.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        // Leave typing in the panel's inputs alone.
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web::HtmlInputElement>().is_some() {
                return;
            }
        }
        if ev.repeat() {
            return;
        }
        let key = ev.key();
        if key == KEY_TOGGLE_PLAY {
            ev.prevent_default();
            driver.toggle();
        } else if key.eq_ignore_ascii_case(KEY_TOGGLE_GUI) {
            if let Some(document) = crate::dom::window_document() {
                gui::toggle(&document);
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
