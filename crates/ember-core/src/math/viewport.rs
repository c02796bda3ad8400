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

//! Defines the letterboxed viewport mapping between the logical framebuffer
//! and the presentation surface.

use super::{dimension::Extent2D, remap_clamped, vector::Vec2};

/// The placement of the scaled framebuffer inside the presentation surface.
///
/// Computed once per frame from the current window size: a uniform
/// contain-fit scale (the framebuffer is never cropped; the surplus window
/// area letterboxes or pillarboxes), plus the centered pixel offset. The
/// same mapping is used in both directions: to place the presented image and
/// to bring window-space cursor coordinates back into framebuffer space.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// The logical framebuffer extent being presented.
    pub buffer: Extent2D,
    /// The uniform scale applied to the framebuffer.
    pub scale: f32,
    /// The top-left corner of the scaled framebuffer inside the window.
    pub offset: Vec2,
    /// The size of the scaled framebuffer inside the window.
    pub scaled_size: Vec2,
}

impl Viewport {
    /// Computes the contain-fit viewport for presenting `buffer` inside
    /// `window`.
    ///
    /// When the window is relatively wider than the buffer the height is the
    /// limiting axis (pillarboxing); otherwise the width is (letterboxing).
    /// A zero-sized buffer or window yields a zero-scale viewport.
    pub fn fit(window: Extent2D, buffer: Extent2D) -> Self {
        if window.area() == 0 || buffer.area() == 0 {
            return Self {
                buffer,
                ..Self::default()
            };
        }
        let scale = if window.aspect_ratio() > buffer.aspect_ratio() {
            window.height as f32 / buffer.height as f32
        } else {
            window.width as f32 / buffer.width as f32
        };
        let scaled_size = buffer.as_vec2() * scale;
        let offset = (window.as_vec2() - scaled_size) * 0.5;
        Self {
            buffer,
            scale,
            offset,
            scaled_size,
        }
    }

    /// Remaps a point from window (presentation-surface) pixel space into
    /// framebuffer pixel space, clamping points outside the presented area
    /// to the nearest framebuffer edge.
    pub fn window_to_buffer(&self, point: Vec2) -> Vec2 {
        Vec2 {
            x: remap_clamped(
                point.x,
                self.offset.x,
                self.offset.x + self.scaled_size.x,
                0.0,
                self.buffer.width as f32,
            ),
            y: remap_clamped(
                point.y,
                self.offset.y,
                self.offset.y + self.scaled_size.y,
                0.0,
                self.buffer.height as f32,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_fit_integer_upscale_no_bars() {
        let vp = Viewport::fit(Extent2D::new(512, 512), Extent2D::new(128, 128));
        assert!(approx_eq(vp.scale, 4.0));
        assert_eq!(vp.offset, Vec2::ZERO);
        assert_eq!(vp.scaled_size, Vec2::new(512.0, 512.0));
    }

    #[test]
    fn test_fit_wide_window_pillarboxes() {
        let vp = Viewport::fit(Extent2D::new(800, 400), Extent2D::new(100, 100));
        assert!(approx_eq(vp.scale, 4.0));
        assert_eq!(vp.offset, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_fit_tall_window_letterboxes() {
        let vp = Viewport::fit(Extent2D::new(400, 800), Extent2D::new(100, 100));
        assert!(approx_eq(vp.scale, 4.0));
        assert_eq!(vp.offset, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn test_fit_zero_window_is_inert() {
        let vp = Viewport::fit(Extent2D::new(0, 0), Extent2D::new(128, 128));
        assert_eq!(vp.scale, 0.0);
        assert_eq!(vp.window_to_buffer(Vec2::new(50.0, 50.0)), Vec2::ZERO);
    }

    #[test]
    fn test_window_to_buffer_center_maps_to_center() {
        let vp = Viewport::fit(Extent2D::new(800, 400), Extent2D::new(100, 100));
        let p = vp.window_to_buffer(Vec2::new(400.0, 200.0));
        assert!(approx_eq(p.x, 50.0));
        assert!(approx_eq(p.y, 50.0));
    }

    #[test]
    fn test_window_to_buffer_clamps_into_bars() {
        let vp = Viewport::fit(Extent2D::new(800, 400), Extent2D::new(100, 100));
        // Inside the left pillarbox bar: clamps to x = 0.
        let left = vp.window_to_buffer(Vec2::new(10.0, 200.0));
        assert!(approx_eq(left.x, 0.0));
        // Beyond the right edge of the presented area: clamps to x = 100.
        let right = vp.window_to_buffer(Vec2::new(799.0, 200.0));
        assert!(approx_eq(right.x, 100.0));
    }
}
