// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The public-facing Software Development Kit (SDK) for the Ember engine.
//! This crate provides a simple and stable API for game developers: implement
//! [`Application`], hand it to [`Engine::run`], and draw into the framebuffer
//! every frame.

#![warn(missing_docs)]

mod config;
mod context;
mod platform;

pub use config::EngineConfig;
pub use context::EngineContext;

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use ember_core::input::Key;
use ember_core::math::Extent2D;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

/// Commonly used types for game code, importable in one line.
pub mod prelude {
    pub use crate::{Application, Engine, EngineConfig, EngineContext};
    pub use ember_core::input::{Key, MouseButton};
    pub use ember_core::math::{Bounds2, Extent2D, Rgba8, Vec2};
    pub use ember_gfx::{
        DrawOptions, EdgeOffsets, InterpolationMode, MirrorMode, ResizableTexture, Surface,
        Texture,
    };
}

/// Errors that can abort an engine run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The windowing event loop could not be created.
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] winit::error::EventLoopError),
    /// The window could not be created.
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] winit::error::OsError),
    /// The presentation surface could not be created or lost its device.
    #[error("failed to initialize presentation surface: {0}")]
    CreatePresentation(#[source] pixels::Error),
    /// The event loop terminated abnormally.
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] winit::error::EventLoopError),
    /// The game's own init or frame logic failed.
    #[error("application error")]
    Application(#[source] anyhow::Error),
}

/// A game hosted by the engine.
///
/// The engine owns the window and the frame cycle; the game supplies state
/// and per-frame logic through these two callbacks.
pub trait Application: Sized + 'static {
    /// Called once, after the window exists, to create the game state.
    /// Load assets here through the context.
    fn init(ctx: &mut EngineContext) -> anyhow::Result<Self>;

    /// Called every frame between input polling and presentation. Draw into
    /// `ctx.frame()` and read input from `ctx.input()`.
    fn update(&mut self, ctx: &mut EngineContext);
}

/// The internal state of the running engine, managed by the winit event
/// loop. Window and presentation resources appear at `resumed` and the
/// game state right after them.
struct EngineState<A: Application> {
    ctx: EngineContext,
    app: Option<A>,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    window_extent: Extent2D,
    last_frame: Option<Instant>,
    fullscreen: bool,
    failure: Option<EngineError>,
}

impl<A: Application> EngineState<A> {
    fn new(config: EngineConfig) -> Self {
        Self {
            ctx: EngineContext::new(config),
            app: None,
            window: None,
            pixels: None,
            window_extent: Extent2D::new(0, 0),
            last_frame: None,
            fullscreen: false,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: EngineError) {
        log::error!("Engine run aborted: {error}");
        self.failure = Some(error);
        event_loop.exit();
    }

    /// Runs one full frame: timestep, input poll, game update, letterboxed
    /// present, upload, pacing sleep.
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let frame_start = Instant::now();
        let delta_seconds = match self.last_frame.replace(frame_start) {
            Some(previous) => (frame_start - previous).as_secs_f32(),
            None => 0.0,
        };

        self.ctx.begin_frame(delta_seconds);
        self.handle_fullscreen_toggle();

        if let Some(app) = self.app.as_mut() {
            app.update(&mut self.ctx);
        }

        if self.window_extent.area() > 0 {
            self.ctx.end_frame(self.window_extent);
            if let Some(pixels) = self.pixels.as_mut() {
                let frame = pixels.frame_mut();
                let presented = self.ctx.presentation().bytes();
                if frame.len() == presented.len() {
                    frame.copy_from_slice(presented);
                }
                if let Err(e) = pixels.render() {
                    self.fail(event_loop, EngineError::CreatePresentation(e));
                    return;
                }
            }
        }

        if let Some(remaining) = self
            .ctx
            .target_interval()
            .checked_sub(frame_start.elapsed())
        {
            thread::sleep(remaining);
        }
    }

    fn handle_fullscreen_toggle(&mut self) {
        let input = self.ctx.input();
        let alt_held = input.key_held(Key::AltLeft) || input.key_held(Key::AltRight);
        if !(alt_held && input.key_down(Key::Enter)) {
            return;
        }
        if let Some(window) = self.window.as_ref() {
            self.fullscreen = !self.fullscreen;
            let mode = self
                .fullscreen
                .then(|| Fullscreen::Borderless(None));
            log::info!(
                "Toggling fullscreen {}",
                if self.fullscreen { "on" } else { "off" }
            );
            window.set_fullscreen(mode);
        }
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        self.window_extent = Extent2D::new(width, height);
        if width == 0 || height == 0 {
            return;
        }
        if let Some(pixels) = self.pixels.as_mut() {
            if let Err(e) = pixels.resize_surface(width, height) {
                log::error!("Failed to resize presentation surface: {e}");
            }
            if let Err(e) = pixels.resize_buffer(width, height) {
                log::error!("Failed to resize presentation buffer: {e}");
            }
        }
    }
}

impl<A: Application> ApplicationHandler for EngineState<A> {
    /// Called when the event loop is ready to start processing events.
    /// This is the place to initialize everything that needs a window.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Avoid re-initializing if the app is resumed multiple times.
        }

        log::info!("Application resumed. Creating window and presentation surface...");

        let initial = self.ctx.config().initial_window_size();
        let attributes = Window::default_attributes()
            .with_title(self.ctx.config().title.clone())
            .with_inner_size(LogicalSize::new(initial.width as f64, initial.height as f64));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, EngineError::CreateWindow(e)),
        };

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = match Pixels::new(size.width, size.height, surface_texture) {
            Ok(pixels) => pixels,
            Err(e) => return self.fail(event_loop, EngineError::CreatePresentation(e)),
        };

        self.window_extent = Extent2D::new(size.width, size.height);
        self.window = Some(window);
        self.pixels = Some(pixels);

        match A::init(&mut self.ctx) {
            Ok(app) => self.app = Some(app),
            Err(e) => return self.fail(event_loop, EngineError::Application(e)),
        }
        log::info!("Engine initialized, entering the frame loop.");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.handle_resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.run_frame(event_loop);
            }
            other => {
                platform::capture_winit_event(&self.ctx.sender(), &other);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

/// When `EngineState` goes out of scope (after the event loop exits), this
/// runs automatically, ensuring a controlled shutdown.
impl<A: Application> Drop for EngineState<A> {
    fn drop(&mut self) {
        self.pixels.take();
        self.app.take();
        log::info!("Engine shutdown complete.");
    }
}

/// The engine entry point.
pub struct Engine;

impl Engine {
    /// Creates the window and runs the frame loop until the window closes
    /// or the application fails. Blocks the calling thread.
    pub fn run<A: Application>(config: EngineConfig) -> Result<(), EngineError> {
        log::info!(
            "Starting '{}' at {}x{}",
            config.title,
            config.resolution.width,
            config.resolution.height
        );

        let event_loop = EventLoop::new().map_err(EngineError::CreateEventLoop)?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = EngineState::<A>::new(config);
        event_loop
            .run_app(&mut state)
            .map_err(EngineError::EventLoopRun)?;

        match state.failure.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
