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

//! Provides the immutable texture types and the per-call draw parameters.

use ember_core::math::{Bounds2, Extent2D, Rgba8, Vec2};
use thiserror::Error;

/// Errors produced while constructing a texture.
///
/// These are fatal at load time: assets are fixed, so a failure indicates a
/// packaging defect rather than a transient condition.
#[derive(Debug, Error)]
pub enum TextureError {
    /// The pixel buffer length does not match the declared dimensions.
    #[error("pixel buffer holds {actual} bytes but a {width}x{height} RGBA8 texture needs {expected}")]
    PixelBufferMismatch {
        /// The declared width in pixels.
        width: u32,
        /// The declared height in pixels.
        height: u32,
        /// The expected byte length (`width * height * 4`).
        expected: usize,
        /// The actual byte length supplied.
        actual: usize,
    },
    /// The nine-slice offsets invert or fall outside the image.
    #[error(
        "invalid nine-slice offsets for a {width}x{height} texture: \
         left={left}, right={right}, top={top}, bottom={bottom} (absolute)"
    )]
    InvalidSliceOffsets {
        /// The texture width in pixels.
        width: u32,
        /// The texture height in pixels.
        height: u32,
        /// The absolute left grid line.
        left: i64,
        /// The absolute right grid line.
        right: i64,
        /// The absolute top grid line.
        top: i64,
        /// The absolute bottom grid line.
        bottom: i64,
    },
}

/// An immutable decoded image with cached integer dimensions.
///
/// Textures are loaded once and shared by reference among draw calls; no
/// draw operation ever mutates one.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    extent: Extent2D,
    pixels: Vec<u8>,
}

impl Texture {
    /// Creates a texture from raw RGBA8 pixel bytes in row-major order.
    pub fn from_rgba8(pixels: Vec<u8>, extent: Extent2D) -> Result<Self, TextureError> {
        let expected = extent.area() as usize * 4;
        if pixels.len() != expected {
            return Err(TextureError::PixelBufferMismatch {
                width: extent.width,
                height: extent.height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { extent, pixels })
    }

    /// Returns the texture dimensions.
    #[inline]
    pub fn extent(&self) -> Extent2D {
        self.extent
    }

    /// Returns the texture width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.extent.width
    }

    /// Returns the texture height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.extent.height
    }

    /// Returns the texture dimensions as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.extent.as_vec2()
    }

    /// Returns the texel at `(x, y)`, clamping coordinates to the texture
    /// edges so samples on the rim never read outside the buffer.
    #[inline]
    pub fn texel(&self, x: i32, y: i32) -> Rgba8 {
        let x = x.clamp(0, self.extent.width as i32 - 1) as usize;
        let y = y.clamp(0, self.extent.height as i32 - 1) as usize;
        let index = y * self.extent.width as usize + x;
        bytemuck::cast_slice::<u8, Rgba8>(&self.pixels)[index]
    }
}

/// Nine-slice resize offsets measured inward from each image edge, as
/// supplied by the caller at load time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOffsets {
    /// Distance of the left grid line from the left edge.
    pub left: u32,
    /// Distance of the right grid line from the right edge.
    pub right: u32,
    /// Distance of the top grid line from the top edge.
    pub top: u32,
    /// Distance of the bottom grid line from the bottom edge.
    pub bottom: u32,
}

impl EdgeOffsets {
    /// Creates edge offsets with the given inward distances.
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates uniform offsets with the same inward distance on every edge.
    pub const fn uniform(distance: u32) -> Self {
        Self::new(distance, distance, distance, distance)
    }
}

/// A texture plus the four absolute grid lines of its nine-slice partition.
///
/// The edge-relative offsets supplied at load time are converted into
/// absolute pixel coordinates once, here, so every draw call works with the
/// invariant `0 <= left <= right < width` (and likewise vertically).
#[derive(Debug, Clone, PartialEq)]
pub struct ResizableTexture {
    texture: Texture,
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
}

impl ResizableTexture {
    /// Builds a resizable texture from edge-relative offsets, converting
    /// them to absolute grid-line coordinates and validating the result.
    pub fn from_edge_offsets(
        texture: Texture,
        offsets: EdgeOffsets,
    ) -> Result<Self, TextureError> {
        let width = texture.width();
        let height = texture.height();
        let left = offsets.left as i64;
        let top = offsets.top as i64;
        let right = width as i64 - offsets.right as i64 - 1;
        let bottom = height as i64 - offsets.bottom as i64 - 1;

        let horizontal_valid = left <= right && right < width as i64;
        let vertical_valid = top <= bottom && bottom < height as i64;
        if !horizontal_valid || !vertical_valid {
            return Err(TextureError::InvalidSliceOffsets {
                width,
                height,
                left,
                right,
                top,
                bottom,
            });
        }

        Ok(Self {
            texture,
            left: left as u32,
            right: right as u32,
            top: top as u32,
            bottom: bottom as u32,
        })
    }

    /// Returns the underlying texture.
    #[inline]
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Returns the absolute left grid line.
    #[inline]
    pub fn left(&self) -> u32 {
        self.left
    }

    /// Returns the absolute right grid line.
    #[inline]
    pub fn right(&self) -> u32 {
        self.right
    }

    /// Returns the absolute top grid line.
    #[inline]
    pub fn top(&self) -> u32 {
        self.top
    }

    /// Returns the absolute bottom grid line.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.bottom
    }
}

/// How a texture is mirrored around the center of its destination
/// rectangle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MirrorMode {
    /// Draw the texture unmirrored.
    #[default]
    None,
    /// Flip the texture left-to-right.
    Horizontal,
    /// Flip the texture top-to-bottom.
    Vertical,
    /// Flip along both axes, equivalent to a 180 degree rotation.
    Both,
}

impl MirrorMode {
    /// Returns which axes are flipped as `(horizontal, vertical)`.
    #[inline]
    pub fn flips(self) -> (bool, bool) {
        match self {
            MirrorMode::None => (false, false),
            MirrorMode::Horizontal => (true, false),
            MirrorMode::Vertical => (false, true),
            MirrorMode::Both => (true, true),
        }
    }
}

/// The resampling filter used for one draw call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Nearest-neighbor sampling: sharp, pixelated scaling.
    Nearest,
    /// Bilinear sampling: smooth but blurry scaling.
    #[default]
    Linear,
}

/// Optional parameters for [`Surface::draw_texture`](crate::Surface::draw_texture).
///
/// Every field has a documented default, so callers build options with
/// struct-update syntax over [`DrawOptions::default()`] instead of passing
/// sentinel values.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DrawOptions {
    /// Overrides the destination size. Defaults to the source rectangle
    /// size, permitting non-uniform stretch when set.
    pub size: Option<Vec2>,
    /// Clockwise rotation in degrees. Defaults to no rotation.
    pub rotation_degrees: f32,
    /// The rotation pivot, measured from the destination position.
    /// Defaults to the destination rectangle's center.
    pub pivot: Option<Vec2>,
    /// Axis mirroring, always applied around the destination rectangle's
    /// center regardless of the pivot. Defaults to no mirroring.
    pub mirror: MirrorMode,
    /// The source rectangle within the texture. Defaults to the full
    /// texture. Rectangles outside the texture bounds are a caller error
    /// and are only checked by a debug assertion.
    pub source: Option<Bounds2>,
    /// The resampling filter for this call only. Defaults to linear.
    pub interpolation: InterpolationMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> Texture {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let color = if (x + y) % 2 == 0 {
                    Rgba8::WHITE
                } else {
                    Rgba8::BLACK
                };
                pixels.extend_from_slice(&color.to_bytes());
            }
        }
        Texture::from_rgba8(pixels, Extent2D::new(width, height)).unwrap()
    }

    #[test]
    fn from_rgba8_rejects_wrong_buffer_length() {
        let result = Texture::from_rgba8(vec![0; 7], Extent2D::new(2, 2));
        assert!(matches!(
            result,
            Err(TextureError::PixelBufferMismatch { expected: 16, actual: 7, .. })
        ));
    }

    #[test]
    fn texel_clamps_to_edges() {
        let texture = checker(2, 2);
        assert_eq!(texture.texel(0, 0), Rgba8::WHITE);
        assert_eq!(texture.texel(-5, 0), texture.texel(0, 0));
        assert_eq!(texture.texel(10, 10), texture.texel(1, 1));
    }

    #[test]
    fn edge_offsets_convert_to_absolute_grid_lines() {
        let rt = ResizableTexture::from_edge_offsets(checker(10, 8), EdgeOffsets::new(2, 3, 1, 2))
            .unwrap();
        assert_eq!(rt.left(), 2);
        assert_eq!(rt.right(), 10 - 3 - 1);
        assert_eq!(rt.top(), 1);
        assert_eq!(rt.bottom(), 8 - 2 - 1);
    }

    #[test]
    fn zero_offsets_are_a_valid_degenerate_grid() {
        let rt =
            ResizableTexture::from_edge_offsets(checker(4, 4), EdgeOffsets::uniform(0)).unwrap();
        assert_eq!(rt.left(), 0);
        assert_eq!(rt.right(), 3);
    }

    #[test]
    fn inverted_offsets_are_rejected() {
        // left (6) crosses right (10 - 6 - 1 = 3).
        let result =
            ResizableTexture::from_edge_offsets(checker(10, 10), EdgeOffsets::new(6, 6, 0, 0));
        assert!(matches!(result, Err(TextureError::InvalidSliceOffsets { .. })));
    }

    #[test]
    fn offsets_exceeding_image_bounds_are_rejected() {
        let result =
            ResizableTexture::from_edge_offsets(checker(4, 4), EdgeOffsets::new(0, 9, 0, 0));
        assert!(matches!(result, Err(TextureError::InvalidSliceOffsets { .. })));
    }

    #[test]
    fn mirror_mode_flip_axes() {
        assert_eq!(MirrorMode::None.flips(), (false, false));
        assert_eq!(MirrorMode::Horizontal.flips(), (true, false));
        assert_eq!(MirrorMode::Vertical.flips(), (false, true));
        assert_eq!(MirrorMode::Both.flips(), (true, true));
    }

    #[test]
    fn draw_options_defaults() {
        let options = DrawOptions::default();
        assert_eq!(options.size, None);
        assert_eq!(options.rotation_degrees, 0.0);
        assert_eq!(options.pivot, None);
        assert_eq!(options.mirror, MirrorMode::None);
        assert_eq!(options.source, None);
        assert_eq!(options.interpolation, InterpolationMode::Linear);
    }
}
