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

//! Solid-color shape primitives drawn directly into a surface.

use ember_core::math::{Bounds2, Rgba8, Vec2};

use crate::surface::Surface;

impl Surface {
    /// Draws a 1px line from `start` to `end` with Bresenham stepping.
    pub fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgba8) {
        let mut x0 = start.x as i32;
        let mut y0 = start.y as i32;
        let x1 = end.x as i32;
        let y1 = end.y as i32;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            self.blend_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x0 += step_x;
            }
            if doubled <= dx {
                error += dx;
                y0 += step_y;
            }
        }
    }

    /// Draws a rectangle, either as a 1px outline or filled.
    pub fn draw_rect(&mut self, bounds: Bounds2, color: Rgba8, filled: bool) {
        let x0 = bounds.origin.x as i32;
        let y0 = bounds.origin.y as i32;
        let w = bounds.size.x as i32;
        let h = bounds.size.y as i32;
        if w <= 0 || h <= 0 {
            return;
        }

        if filled {
            for y in y0..y0 + h {
                for x in x0..x0 + w {
                    self.blend_pixel(x, y, color);
                }
            }
        } else {
            for x in x0..x0 + w {
                self.blend_pixel(x, y0, color);
                self.blend_pixel(x, y0 + h - 1, color);
            }
            for y in y0 + 1..y0 + h - 1 {
                self.blend_pixel(x0, y, color);
                self.blend_pixel(x0 + w - 1, y, color);
            }
        }
    }

    /// Draws a circle, either as a 1px outline (midpoint algorithm) or
    /// filled by scanline.
    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba8, filled: bool) {
        let cx = center.x as i32;
        let cy = center.y as i32;
        let r = radius as i32;
        if r < 0 {
            return;
        }

        if filled {
            let r_sq = (radius * radius).max(0.0);
            for dy in -r..=r {
                for dx in -r..=r {
                    if (dx * dx + dy * dy) as f32 <= r_sq {
                        self.blend_pixel(cx + dx, cy + dy, color);
                    }
                }
            }
            return;
        }

        let mut x = r;
        let mut y = 0;
        let mut error = 1 - r;
        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                self.blend_pixel(px, py, color);
            }
            y += 1;
            if error < 0 {
                error += 2 * y + 1;
            } else {
                x -= 1;
                error += 2 * (y - x) + 1;
            }
        }
    }
}
