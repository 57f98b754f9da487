use crate::dom;
use globe_core::render::GpuState;
use globe_core::{OrbitControls, RenderLoop, Scene, Settings, Tick, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything a frame or an event listener may touch.
pub struct FrameContext {
    pub render_loop: RenderLoop,
    pub scene: Scene,
    pub viewport: Viewport,
    pub orbit: OrbitControls,
    pub settings: Settings,
    pub gpu: Option<GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub container: web::HtmlElement,
}

impl FrameContext {
    /// Consume the queued frame callback; draws when the loop is playing.
    pub fn frame(&mut self) -> Tick {
        let tick = self.render_loop.tick();
        if let Tick::Render { time } = tick {
            self.scene.set_time(time);
            self.draw();
        }
        tick
    }

    fn draw(&mut self) {
        self.orbit.apply_to(self.viewport.camera_mut());
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        match gpu.render(self.viewport.camera(), &self.scene.arc_material) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[loop] surface lost, reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("[loop] render error: {:?}", e),
        }
    }

    /// Re-read the container size and propagate it to canvas, camera and GPU.
    pub fn resize(&mut self) {
        let (width, height) = dom::container_pixel_size(&self.container);
        if width == 0 || height == 0 {
            return;
        }
        dom::set_canvas_backing_size(&self.canvas, width, height);
        if !self.viewport.resize(width, height) {
            return;
        }
        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(width, height);
            let (tw, th) = gpu.target_size();
            log::debug!("[resize] surface={:?} targets={}x{}", gpu.size(), tw, th);
        }
        self.scene.set_resolution(width, height);
        log::info!(
            "[resize] {}x{} aspect={:.3}",
            width,
            height,
            self.viewport.camera().aspect
        );
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The requestAnimationFrame chain around a shared [`FrameContext`].
#[derive(Clone)]
pub struct FrameDriver {
    ctx: Rc<RefCell<FrameContext>>,
    tick: FrameCallback,
}

impl FrameDriver {
    pub fn context(&self) -> &Rc<RefCell<FrameContext>> {
        &self.ctx
    }

    pub fn play(&self) {
        let queue = self.ctx.borrow_mut().render_loop.play();
        if queue {
            log::info!("[loop] play");
            self.request_frame();
        }
    }

    pub fn stop(&self) {
        let mut ctx = self.ctx.borrow_mut();
        if ctx.render_loop.is_playing() {
            log::info!("[loop] stop at t={:.2}", ctx.render_loop.time());
        }
        ctx.render_loop.stop();
    }

    pub fn toggle(&self) {
        if self.ctx.borrow().render_loop.is_playing() {
            self.stop();
        } else {
            self.play();
        }
    }

    fn request_frame(&self) {
        request_frame(&self.tick);
    }
}

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Build the frame closure and queue the first frame.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> FrameDriver {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let next = ctx_tick.borrow_mut().frame();
        match next {
            Tick::Render { .. } => request_frame(&tick_clone),
            Tick::Halt => log::info!("[loop] halted"),
        }
    }) as Box<dyn FnMut()>));

    let driver = FrameDriver { ctx, tick };
    let queue = driver.ctx.borrow_mut().render_loop.start();
    if queue {
        log::info!("[loop] started");
        driver.request_frame();
    }
    driver
}
