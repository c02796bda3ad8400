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

//! The per-frame engine services handed to game code.

use std::time::Duration;

use ember_assets::AssetError;
use ember_core::event::{EventQueue, EventSender};
use ember_core::input::InputState;
use ember_core::math::{Extent2D, Rgba8, Viewport};
use ember_gfx::{blit_letterboxed, EdgeOffsets, ResizableTexture, Surface, Texture};

use crate::config::EngineConfig;

/// Everything a game touches during init and update: the framebuffer, the
/// input snapshot, asset loading, and frame timing.
///
/// One context exists per engine run, owned by the main loop. Game code
/// receives it as `&mut` for the duration of each callback and never holds
/// on to it.
pub struct EngineContext {
    config: EngineConfig,
    frame: Surface,
    presentation: Surface,
    queue: EventQueue,
    input: InputState,
    viewport: Viewport,
    delta_seconds: f32,
}

impl EngineContext {
    /// Creates the context for a run, with the framebuffer at the
    /// configured resolution and an empty presentation surface.
    pub fn new(config: EngineConfig) -> Self {
        let frame = Surface::new(config.resolution);
        let presentation = Surface::new(config.initial_window_size());
        Self {
            config,
            frame,
            presentation,
            queue: EventQueue::new(),
            input: InputState::new(),
            viewport: Viewport::default(),
            delta_seconds: 0.0,
        }
    }

    /// Returns the startup configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a producer handle for feeding raw input events.
    pub fn sender(&self) -> EventSender {
        self.queue.sender()
    }

    /// Returns the logical framebuffer for drawing.
    pub fn frame(&mut self) -> &mut Surface {
        &mut self.frame
    }

    /// Returns the input snapshot for the current frame.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Returns the wall-clock seconds elapsed between the start of the
    /// previous frame and the start of this one. Zero on the first frame.
    pub fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }

    /// Returns the logical framebuffer resolution.
    pub fn resolution(&self) -> Extent2D {
        self.config.resolution
    }

    /// Returns the minimum frame duration the loop paces itself to.
    pub fn target_interval(&self) -> Duration {
        self.config.target_frame_interval
    }

    /// Loads a texture from the configured asset root.
    pub fn load_texture(&self, path: &str) -> Result<Texture, AssetError> {
        ember_assets::load_texture(&self.config.asset_root, path)
    }

    /// Loads a nine-slice texture from the configured asset root.
    pub fn load_resizable_texture(
        &self,
        path: &str,
        offsets: EdgeOffsets,
    ) -> Result<ResizableTexture, AssetError> {
        ember_assets::load_resizable_texture(&self.config.asset_root, path, offsets)
    }

    /// Starts a frame: records the timestep, rebuilds the input snapshot
    /// from the queued events, and clears the framebuffer to opaque black.
    pub fn begin_frame(&mut self, delta_seconds: f32) {
        self.delta_seconds = delta_seconds;
        self.input.poll(&self.queue, &self.viewport);
        self.frame.clear(Rgba8::BLACK);
    }

    /// Finishes a frame: refits the viewport to the current window size and
    /// presents the framebuffer, letterboxed, into the presentation
    /// surface.
    pub fn end_frame(&mut self, window: Extent2D) {
        if self.presentation.extent() != window {
            self.presentation.resize(window);
        }
        self.viewport = Viewport::fit(window, self.frame.extent());
        blit_letterboxed(&self.frame, &mut self.presentation, &self.viewport);
    }

    /// Returns the presented image for upload to the window.
    pub fn presentation(&self) -> &Surface {
        &self.presentation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::event::InputEvent;
    use ember_core::input::Key;
    use ember_core::math::Vec2;

    fn test_config() -> EngineConfig {
        EngineConfig {
            resolution: Extent2D::new(64, 64),
            window_scale: 2,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn begin_frame_clears_framebuffer_to_black() {
        let mut ctx = EngineContext::new(test_config());
        ctx.frame().set_pixel(10, 10, Rgba8::RED);
        ctx.begin_frame(0.016);
        assert_eq!(ctx.frame.pixel(10, 10), Some(Rgba8::BLACK));
        assert_eq!(ctx.delta_seconds(), 0.016);
    }

    #[test]
    fn end_frame_resizes_presentation_to_window() {
        let mut ctx = EngineContext::new(test_config());
        ctx.begin_frame(0.016);
        ctx.end_frame(Extent2D::new(300, 200));
        assert_eq!(ctx.presentation().extent(), Extent2D::new(300, 200));
    }

    // Sixty headless frames of a movement loop: a held key must advance a
    // position by speed multiplied by the accumulated frame time.
    #[test]
    fn held_key_drives_frame_rate_independent_movement() {
        let mut ctx = EngineContext::new(test_config());
        let sender = ctx.sender();
        let window = ctx.config().initial_window_size();

        sender.capture(InputEvent::KeyDown { key: Key::Right });

        let speed = 50.0;
        let dt = 1.0 / 60.0;
        let mut x = 0.0f32;
        for _ in 0..60 {
            ctx.begin_frame(dt);
            if ctx.input().key_held(Key::Right) {
                x += speed * ctx.delta_seconds();
            }
            ctx.end_frame(window);
        }

        assert!((x - speed).abs() < 1e-3, "moved {x} in one second");
    }

    #[test]
    fn key_down_edge_fires_on_exactly_one_frame() {
        let mut ctx = EngineContext::new(test_config());
        let sender = ctx.sender();
        let window = ctx.config().initial_window_size();

        sender.capture(InputEvent::KeyDown { key: Key::Space });
        ctx.begin_frame(0.016);
        assert!(ctx.input().key_down(Key::Space));
        ctx.end_frame(window);

        ctx.begin_frame(0.016);
        assert!(!ctx.input().key_down(Key::Space));
        assert!(ctx.input().key_held(Key::Space));
    }

    #[test]
    fn cursor_events_remap_through_last_presented_viewport() {
        let mut ctx = EngineContext::new(test_config());
        let sender = ctx.sender();

        // Present once into a 2x window so the viewport is established.
        ctx.begin_frame(0.016);
        ctx.end_frame(Extent2D::new(128, 128));

        sender.capture(InputEvent::MouseMoved { x: 64.0, y: 64.0 });
        ctx.begin_frame(0.016);
        assert_eq!(ctx.input().cursor_position(), Vec2::new(32.0, 32.0));
    }
}
