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

//! Provides the CPU-side pixel surface that all drawing operates on.

use ember_core::math::{Extent2D, Rgba8};

/// An owned RGBA8 pixel buffer with fixed dimensions.
///
/// Both the logical framebuffer and the window-sized presentation surface
/// are `Surface` values. A surface is single-writer: it belongs to the main
/// loop and drawing into it from another thread is not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    extent: Extent2D,
    pixels: Vec<u8>,
}

impl Surface {
    /// Creates a surface of the given extent, filled with transparent black.
    pub fn new(extent: Extent2D) -> Self {
        Self {
            extent,
            pixels: vec![0; extent.area() as usize * 4],
        }
    }

    /// Returns the surface dimensions.
    #[inline]
    pub fn extent(&self) -> Extent2D {
        self.extent
    }

    /// Returns the surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    /// Returns the surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    /// Reallocates the surface for a new extent. Existing contents are
    /// discarded; the new surface is transparent black.
    pub fn resize(&mut self, extent: Extent2D) {
        log::debug!(
            "Resizing surface from {}x{} to {}x{}",
            self.extent.width,
            self.extent.height,
            extent.width,
            extent.height
        );
        self.extent = extent;
        self.pixels.clear();
        self.pixels.resize(extent.area() as usize * 4, 0);
    }

    /// Fills the entire surface with one color.
    pub fn clear(&mut self, color: Rgba8) {
        bytemuck::cast_slice_mut::<u8, Rgba8>(&mut self.pixels).fill(color);
    }

    /// Returns the color at `(x, y)`, or `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        let index = self.index_of(x, y)?;
        Some(bytemuck::cast_slice::<u8, Rgba8>(&self.pixels)[index])
    }

    /// Writes the color at `(x, y)` directly, replacing the existing pixel.
    /// Coordinates outside the surface are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some(index) = self.index_of(x, y) {
            bytemuck::cast_slice_mut::<u8, Rgba8>(&mut self.pixels)[index] = color;
        }
    }

    /// Composites `color` over the pixel at `(x, y)` with source-over
    /// blending. Coordinates outside the surface are ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some(index) = self.index_of(x, y) {
            let pixels = bytemuck::cast_slice_mut::<u8, Rgba8>(&mut self.pixels);
            pixels[index] = color.over(pixels[index]);
        }
    }

    /// Returns the raw pixel bytes in `[r, g, b, a]` row-major order.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the raw pixel bytes mutably.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.extent.width || y as u32 >= self.extent.height {
            return None;
        }
        Some(y as usize * self.extent.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_transparent() {
        let surface = Surface::new(Extent2D::new(4, 3));
        assert_eq!(surface.bytes().len(), 4 * 3 * 4);
        assert_eq!(surface.pixel(0, 0), Some(Rgba8::TRANSPARENT));
        assert_eq!(surface.pixel(3, 2), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut surface = Surface::new(Extent2D::new(2, 2));
        surface.clear(Rgba8::MAGENTA);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(surface.pixel(x, y), Some(Rgba8::MAGENTA));
            }
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut surface = Surface::new(Extent2D::new(3, 3));
        surface.set_pixel(1, 2, Rgba8::GREEN);
        assert_eq!(surface.pixel(1, 2), Some(Rgba8::GREEN));
        assert_eq!(surface.pixel(2, 1), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn out_of_bounds_access_is_inert() {
        let mut surface = Surface::new(Extent2D::new(2, 2));
        surface.set_pixel(-1, 0, Rgba8::RED);
        surface.set_pixel(2, 0, Rgba8::RED);
        surface.blend_pixel(0, -1, Rgba8::RED);
        assert_eq!(surface.pixel(-1, 0), None);
        assert_eq!(surface.pixel(2, 0), None);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(surface.pixel(x, y), Some(Rgba8::TRANSPARENT));
            }
        }
    }

    #[test]
    fn blend_composites_over_existing_pixel() {
        let mut surface = Surface::new(Extent2D::new(1, 1));
        surface.set_pixel(0, 0, Rgba8::BLACK);
        surface.blend_pixel(0, 0, Rgba8::new(255, 0, 0, 128));
        let out = surface.pixel(0, 0).unwrap();
        assert!(out.r > 120 && out.r < 136);
        assert_eq!(out.g, 0);
    }

    #[test]
    fn resize_discards_contents() {
        let mut surface = Surface::new(Extent2D::new(2, 2));
        surface.clear(Rgba8::WHITE);
        surface.resize(Extent2D::new(4, 1));
        assert_eq!(surface.extent(), Extent2D::new(4, 1));
        assert_eq!(surface.pixel(3, 0), Some(Rgba8::TRANSPARENT));
    }
}
