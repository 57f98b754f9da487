#![cfg(target_arch = "wasm32")]
use globe_core::render::GpuState;
use globe_core::{Endpoint, GlobeParams, OrbitControls, RenderLoop, Scene, Settings, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod gui;
mod texture;

thread_local! {
    static DRIVER: RefCell<Option<frame::FrameDriver>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("[init] {:#}", e);
        }
    });
    Ok(())
}

/// Resume the animation; a no-op while already playing.
#[wasm_bindgen]
pub fn play() {
    DRIVER.with(|d| {
        if let Some(driver) = d.borrow().as_ref() {
            driver.play();
        }
    });
}

/// Pause the animation after the current frame.
#[wasm_bindgen]
pub fn stop() {
    DRIVER.with(|d| {
        if let Some(driver) = d.borrow().as_ref() {
            driver.stop();
        }
    });
}

/// Demo defaults, overridden by `?from=lat,lon&to=lat,lon`.
fn params_from_query() -> GlobeParams {
    let mut params = GlobeParams::default();
    for which in [Endpoint::From, Endpoint::To] {
        if let Some(raw) = dom::query_param(which.key()) {
            match params.set_endpoint(which, &raw) {
                Ok(p) => log::info!(
                    "[init] {}={:.4},{:.4}",
                    which.key(),
                    p.latitude,
                    p.longitude
                ),
                Err(e) => log::warn!("[init] ignoring {}={:?}: {}", which.key(), raw, e),
            }
        }
    }
    params
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let params = params_from_query();
    let mut scene = Scene::assemble(&params);

    let container = dom::container(&document)?;
    let canvas = dom::append_canvas(&document, &container)?;
    let (width, height) = dom::container_pixel_size(&container);
    dom::set_canvas_backing_size(&canvas, width, height);
    let viewport = Viewport::new(width.max(1), height.max(1));
    scene.set_resolution(width.max(1), height.max(1));

    let gpu = GpuState::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        width,
        height,
        &scene,
        params.clear_color,
    )
    .await?;
    log::info!("[init] surface {}x{}", width, height);

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        render_loop: RenderLoop::default(),
        scene,
        viewport,
        orbit: OrbitControls::default(),
        settings: Settings::default(),
        gpu: Some(gpu),
        canvas,
        container,
    }));

    let driver = frame::start_loop(ctx.clone());
    events::wire_resize(&driver);
    events::wire_pointer(&driver);
    events::wire_keyboard(&driver);
    if let Err(e) = gui::build_panel(&document, &driver) {
        log::warn!("[gui] {:#}", e);
    }
    DRIVER.with(|d| *d.borrow_mut() = Some(driver));

    texture::spawn_map_load(ctx, params.texture);
    Ok(())
}
