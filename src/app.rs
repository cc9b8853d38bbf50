//! The frame driver: a winit application that runs the menu against a
//! host-supplied renderer.
//!
//! Each redraw is one tick (poll input, fire due mutations, draw, advance
//! the animations) and `about_to_wait` immediately re-arms the next redraw,
//! so the loop runs continuously. The renderer is built lazily once the
//! window exists, since most GPU backends need a surface first.

use crate::config;
use crate::controller::MenuController;
use crate::input;
use crate::loader::TileLoader;
use crate::manifest::MenuManifest;
use crate::math;
use crate::render::{DrawList, Renderer};
use log::{debug, error, info, warn};
use std::error::Error;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

type RendererFactory<R> = Box<dyn FnMut(Arc<Window>) -> Result<R, Box<dyn Error>>>;

pub struct MenuApp<R: Renderer> {
    window: Option<Arc<Window>>,
    renderer: Option<R>,
    make_renderer: RendererFactory<R>,
    controller: MenuController,
    loader: TileLoader,
    draw_list: DrawList,
    last_frame_time: Instant,
    frames_this_second: u32,
    last_fps_log: Instant,
}

impl<R: Renderer> MenuApp<R> {
    /// Build the app around a manifest. Tile composition starts immediately
    /// on the worker thread; bitmaps bind as they arrive, and a tile simply
    /// doesn't draw until its artwork lands.
    pub fn new(
        manifest: &MenuManifest,
        make_renderer: impl FnMut(Arc<Window>) -> Result<R, Box<dyn Error>> + 'static,
    ) -> Self {
        let loader = TileLoader::spawn();
        loader.request_manifest(manifest);
        Self {
            window: None,
            renderer: None,
            make_renderer: Box::new(make_renderer),
            controller: MenuController::new(manifest),
            loader,
            draw_list: DrawList::default(),
            last_frame_time: Instant::now(),
            frames_this_second: 0,
            last_fps_log: Instant::now(),
        }
    }

    pub fn controller(&self) -> &MenuController {
        &self.controller
    }

    pub fn run(mut self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt_ms = ((now - self.last_frame_time).as_secs_f32() * 1000.0)
            .min(config::MAX_DELTA_TIME_MS);
        self.last_frame_time = now;

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        for (slot, image) in self.loader.poll() {
            match renderer.create_texture(&image) {
                Ok(texture) => self.controller.bind_texture(slot, texture),
                Err(e) => warn!("texture upload failed for {slot:?}: {e}"),
            }
        }

        self.controller.frame(dt_ms, &mut self.draw_list);
        if let Err(e) = renderer.draw(&self.draw_list, math::menu_projection()) {
            error!("frame draw failed: {e}");
        }

        self.frames_this_second += 1;
        if now.duration_since(self.last_fps_log).as_secs() >= 1 {
            debug!("{} fps", self.frames_this_second);
            self.frames_this_second = 0;
            self.last_fps_log = now;
        }
    }
}

impl<R: Renderer> ApplicationHandler for MenuApp<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(
                config::WINDOW_WIDTH,
                config::WINDOW_HEIGHT,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        match (self.make_renderer)(window.clone()) {
            Ok(renderer) => {
                info!("renderer ready");
                self.renderer = Some(renderer);
            }
            Err(e) => {
                error!("failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        }
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                input::handle_keyboard_input(&event, &mut self.controller.input);
            }
            WindowEvent::RedrawRequested => self.tick(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
