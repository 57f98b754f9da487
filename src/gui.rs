use crate::constants::{GUI_PANEL_ID, GUI_PANEL_STYLE, GUI_PROGRESS_ID};
use crate::frame::FrameDriver;
use globe_core::{PROGRESS_MAX, PROGRESS_MIN, PROGRESS_STEP};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", e))
}

/// Build the fixed tuning panel with its `progress` slider.
pub fn build_panel(document: &web::Document, driver: &FrameDriver) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let panel = document.create_element("div").map_err(js_err)?;
    panel.set_id(GUI_PANEL_ID);
    _ = panel.set_attribute("style", GUI_PANEL_STYLE);

    let label = document.create_element("label").map_err(js_err)?;
    _ = label.set_attribute("for", GUI_PROGRESS_ID);
    label.set_text_content(Some("progress "));

    let input = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    input.set_id(GUI_PROGRESS_ID);
    input.set_type("range");
    input.set_min(&PROGRESS_MIN.to_string());
    input.set_max(&PROGRESS_MAX.to_string());
    input.set_step(&PROGRESS_STEP.to_string());
    let initial = driver.context().borrow().settings.progress();
    input.set_value(&initial.to_string());

    let ctx = driver.context().clone();
    let input_cb = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let raw = input_cb.value_as_number() as f32;
        let value = ctx.borrow_mut().settings.set_progress(raw);
        input_cb.set_value(&value.to_string());
        log::info!("[gui] progress={:.2}", value);
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();

    label.append_child(&input).map_err(js_err)?;
    panel.append_child(&label).map_err(js_err)?;
    body.append_child(&panel).map_err(js_err)?;
    log::info!("[gui] panel ready");
    Ok(())
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GUI_PANEL_ID) {
        _ = el.set_attribute("style", GUI_PANEL_STYLE);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GUI_PANEL_ID) {
        _ = el.set_attribute("style", &format!("{};display:none", GUI_PANEL_STYLE));
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(GUI_PANEL_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}
