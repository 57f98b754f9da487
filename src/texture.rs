use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// GET `url` and return the body bytes.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!("request {}: {:?}", url, e))?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch {}: not a Response", url))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }

    let buffer = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("body {}: {:?}", url, e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("body {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Load the world map in the background; the planet keeps its placeholder
/// texture until (and unless) this succeeds.
pub fn spawn_map_load(ctx: Rc<RefCell<FrameContext>>, url: String) {
    spawn_local(async move {
        let bytes = match fetch_bytes(&url).await {
            Ok(b) => b,
            Err(e) => {
                log::warn!("[texture] {:#}", e);
                return;
            }
        };
        log::info!("[texture] fetched {} ({} bytes)", url, bytes.len());
        let mut c = ctx.borrow_mut();
        if let Some(gpu) = &mut c.gpu {
            if let Err(e) = gpu.set_map_bytes(&bytes) {
                log::warn!("[texture] decode {} failed: {}", url, e);
            }
        }
    });
}
