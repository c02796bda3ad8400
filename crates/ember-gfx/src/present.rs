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

//! Presents the logical framebuffer into a window-sized surface.

use ember_core::math::{Rgba8, Viewport};

use crate::surface::Surface;

/// Copies `frame` into `target` at the placement described by `viewport`,
/// scaling with nearest-neighbor sampling. The area outside the placement
/// is filled with opaque black, producing letterbox or pillarbox bars.
///
/// The frame is treated as opaque here; alpha was already resolved while
/// compositing into it.
pub fn blit_letterboxed(frame: &Surface, target: &mut Surface, viewport: &Viewport) {
    target.clear(Rgba8::BLACK);
    if viewport.scale <= 0.0 {
        return;
    }

    let x0 = viewport.offset.x.round() as i32;
    let y0 = viewport.offset.y.round() as i32;
    let x1 = (viewport.offset.x + viewport.scaled_size.x).round() as i32;
    let y1 = (viewport.offset.y + viewport.scaled_size.y).round() as i32;
    let inv_scale = 1.0 / viewport.scale;
    let max_sx = frame.width() as i32 - 1;
    let max_sy = frame.height() as i32 - 1;

    for y in y0.max(0)..y1.min(target.height() as i32) {
        let sy = (((y as f32 + 0.5) - viewport.offset.y) * inv_scale) as i32;
        let sy = sy.clamp(0, max_sy);
        for x in x0.max(0)..x1.min(target.width() as i32) {
            let sx = (((x as f32 + 0.5) - viewport.offset.x) * inv_scale) as i32;
            let sx = sx.clamp(0, max_sx);
            if let Some(color) = frame.pixel(sx, sy) {
                target.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::math::Extent2D;

    fn checker_frame() -> Surface {
        let mut frame = Surface::new(Extent2D::new(2, 2));
        frame.set_pixel(0, 0, Rgba8::RED);
        frame.set_pixel(1, 0, Rgba8::GREEN);
        frame.set_pixel(0, 1, Rgba8::BLUE);
        frame.set_pixel(1, 1, Rgba8::WHITE);
        frame
    }

    #[test]
    fn integer_upscale_duplicates_pixels_exactly() {
        let frame = checker_frame();
        let mut target = Surface::new(Extent2D::new(4, 4));
        let viewport = Viewport::fit(target.extent(), frame.extent());
        blit_letterboxed(&frame, &mut target, &viewport);

        for (sx, sy, expected) in [
            (0, 0, Rgba8::RED),
            (1, 0, Rgba8::GREEN),
            (0, 1, Rgba8::BLUE),
            (1, 1, Rgba8::WHITE),
        ] {
            for dy in 0..2 {
                for dx in 0..2 {
                    assert_eq!(
                        target.pixel(sx * 2 + dx, sy * 2 + dy),
                        Some(expected),
                        "at ({}, {})",
                        sx * 2 + dx,
                        sy * 2 + dy
                    );
                }
            }
        }
    }

    #[test]
    fn wide_target_gets_black_pillarbox_bars() {
        let frame = checker_frame();
        let mut target = Surface::new(Extent2D::new(8, 4));
        let viewport = Viewport::fit(target.extent(), frame.extent());
        blit_letterboxed(&frame, &mut target, &viewport);

        // 2x2 frame scaled 2x sits centered: columns 0..2 and 6..8 are bars.
        for y in 0..4 {
            for x in [0, 1, 6, 7] {
                assert_eq!(target.pixel(x, y), Some(Rgba8::BLACK));
            }
        }
        assert_eq!(target.pixel(2, 0), Some(Rgba8::RED));
        assert_eq!(target.pixel(5, 3), Some(Rgba8::WHITE));
    }

    #[test]
    fn previous_target_contents_are_overwritten() {
        let frame = checker_frame();
        let mut target = Surface::new(Extent2D::new(8, 4));
        target.clear(Rgba8::MAGENTA);
        let viewport = Viewport::fit(target.extent(), frame.extent());
        blit_letterboxed(&frame, &mut target, &viewport);
        assert_eq!(target.pixel(0, 0), Some(Rgba8::BLACK));
    }

    #[test]
    fn zero_scale_viewport_just_clears() {
        let frame = checker_frame();
        let mut target = Surface::new(Extent2D::new(4, 4));
        let viewport = Viewport::fit(Extent2D::new(0, 0), frame.extent());
        blit_letterboxed(&frame, &mut target, &viewport);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(target.pixel(x, y), Some(Rgba8::BLACK));
            }
        }
    }
}
