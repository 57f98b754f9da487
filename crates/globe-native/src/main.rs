use globe_core::render::GpuState;
use globe_core::{Endpoint, GlobeParams, OrbitControls, RenderLoop, Scene, Tick, Viewport};
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

const DEFAULT_TEXTURE_PATH: &str = "assets/earth.jpg";

/// `globe-native [FROM [TO [TEXTURE]]]`, endpoints as `lat,lon`.
fn params_from_args(args: impl Iterator<Item = String>) -> GlobeParams {
    let mut params = GlobeParams {
        texture: DEFAULT_TEXTURE_PATH.to_string(),
        ..GlobeParams::default()
    };
    let mut args = args;
    for which in [Endpoint::From, Endpoint::To] {
        let Some(raw) = args.next() else {
            return params;
        };
        if let Err(e) = params.set_endpoint(which, &raw) {
            log::warn!("[init] ignoring {}={:?}: {}", which.key(), raw, e);
        }
    }
    if let Some(path) = args.next() {
        params.texture = path;
    }
    params
}

struct App<'w> {
    window: &'w Window,
    gpu: GpuState<'w>,
    scene: Scene,
    viewport: Viewport,
    orbit: OrbitControls,
    render_loop: RenderLoop,
    cursor: [f32; 2],
}

impl<'w> App<'w> {
    fn resize(&mut self, size: PhysicalSize<u32>) {
        if !self.viewport.resize(size.width, size.height) {
            return;
        }
        self.gpu.resize_if_needed(size.width, size.height);
        self.scene.set_resolution(size.width, size.height);
        let (w, h) = self.gpu.size();
        let (tw, th) = self.gpu.target_size();
        log::info!(
            "[resize] surface={}x{} targets={}x{} aspect={:.3}",
            w,
            h,
            tw,
            th,
            self.viewport.camera().aspect
        );
    }

    fn redraw(&mut self) {
        // Only the queued frame advances time; OS-initiated redraws just repaint.
        if self.render_loop.is_pending() {
            match self.render_loop.tick() {
                Tick::Render { time } => {
                    self.scene.set_time(time);
                    self.draw();
                    self.window.request_redraw();
                }
                Tick::Halt => log::info!("[loop] halted"),
            }
        } else {
            self.draw();
        }
    }

    fn draw(&mut self) {
        self.orbit.apply_to(self.viewport.camera_mut());
        match self
            .gpu
            .render(self.viewport.camera(), &self.scene.arc_material)
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[loop] surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("[loop] render error: {:?}", e),
        }
    }

    fn toggle(&mut self) {
        if self.render_loop.toggle() {
            log::info!("[loop] play");
            self.window.request_redraw();
        } else if !self.render_loop.is_playing() {
            log::info!("[loop] stop at t={:.2}", self.render_loop.time());
        }
    }

    /// Repaint after camera input when no frame chain is running.
    fn touch(&self) {
        if !self.render_loop.is_pending() {
            self.window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let params = params_from_args(std::env::args().skip(1));
    let scene = Scene::assemble(&params);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Globe Arc (native)")
        .with_inner_size(PhysicalSize::new(1280u32, 720u32))
        .build(&event_loop)?;
    let size = window.inner_size();

    let mut gpu = pollster::block_on(GpuState::new(
        &window,
        size.width,
        size.height,
        &scene,
        params.clear_color,
    ))?;
    match std::fs::read(&params.texture) {
        Ok(bytes) => {
            if let Err(e) = gpu.set_map_bytes(&bytes) {
                log::warn!("[texture] decode {} failed: {}", params.texture, e);
            }
        }
        Err(e) => log::warn!("[texture] read {} failed: {}", params.texture, e),
    }
    log::info!("[init] surface {}x{}", size.width, size.height);

    let mut app = App {
        window: &window,
        gpu,
        scene,
        viewport: Viewport::new(size.width.max(1), size.height.max(1)),
        orbit: OrbitControls::default(),
        render_loop: RenderLoop::default(),
        cursor: [0.0, 0.0],
    };
    app.scene.set_resolution(size.width.max(1), size.height.max(1));
    if app.render_loop.start() {
        log::info!("[loop] started");
        window.request_redraw();
    }

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.resize(size),
            WindowEvent::RedrawRequested => app.redraw(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Space),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => app.toggle(),
            WindowEvent::MouseInput { state, button, .. } => {
                let [x, y] = app.cursor;
                match (state, button) {
                    (ElementState::Pressed, MouseButton::Left) => app.orbit.begin_drag(x, y),
                    (ElementState::Pressed, MouseButton::Right) => app.orbit.begin_pan(x, y),
                    (ElementState::Released, MouseButton::Left | MouseButton::Right) => {
                        app.orbit.end_drag()
                    }
                    _ => {}
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = [position.x as f32, position.y as f32];
                if app.orbit.is_dragging() {
                    let height = app.viewport.size().1 as f32;
                    app.orbit.drag_to(app.cursor[0], app.cursor[1], height);
                    app.touch();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scroll-up as positive; the orbit zooms out on positive.
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y,
                    MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
                };
                app.orbit.zoom(dy);
                app.touch();
            }
            _ => {}
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn no_args_keeps_demo_endpoints() {
        let p = params_from_args(args(&[]));
        assert_eq!(p.from, GlobeParams::default().from);
        assert_eq!(p.texture, DEFAULT_TEXTURE_PATH);
    }

    #[test]
    fn positional_endpoints_and_texture() {
        let p = params_from_args(args(&["10,20", "-30, 40.5", "map.png"]));
        assert_eq!(p.from.latitude, 10.0);
        assert_eq!(p.to.longitude, 40.5);
        assert_eq!(p.texture, "map.png");
    }

    #[test]
    fn bad_endpoint_falls_back_to_default() {
        let p = params_from_args(args(&["north", "1,2"]));
        assert_eq!(p.from, GlobeParams::default().from);
        assert_eq!(p.to.latitude, 1.0);
    }
}
