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

//! Implements the texture compositing pipeline: affine blits with
//! pivot-centered rotation, center-relative mirroring, nearest/bilinear
//! resampling, and the nine-slice stretch.

use ember_core::math::{Affine2, Bounds2, Rgba8, Vec2};

use crate::surface::Surface;
use crate::texture::{DrawOptions, InterpolationMode, MirrorMode, ResizableTexture, Texture};

/// Composes the blit transform for one draw call, mapping destination-local
/// coordinates into world (framebuffer) coordinates.
///
/// The composition order is fixed: translate to the world position, rotate
/// clockwise about the pivot, then apply the mirror flips about the
/// destination rectangle's *center*. Rotation and mirroring are therefore
/// independent: a custom pivot moves the rotation axis but never the mirror
/// axis. The result is a pure value applied only for the duration of one
/// blit; no transform state persists on the target surface.
pub fn compose_draw_transform(
    position: Vec2,
    dest_size: Vec2,
    rotation_degrees: f32,
    pivot: Vec2,
    mirror: MirrorMode,
) -> Affine2 {
    let mut transform = Affine2::from_translation(position);

    if rotation_degrees != 0.0 {
        transform = transform
            * Affine2::from_translation(pivot)
            * Affine2::from_rotation_degrees(rotation_degrees)
            * Affine2::from_translation(-pivot);
    }

    let (flip_x, flip_y) = mirror.flips();
    if flip_x || flip_y {
        let center = dest_size * 0.5;
        let scale = Vec2::new(
            if flip_x { -1.0 } else { 1.0 },
            if flip_y { -1.0 } else { 1.0 },
        );
        transform = transform
            * Affine2::from_translation(center)
            * Affine2::from_scale(scale)
            * Affine2::from_translation(-center);
    }

    transform
}

impl Surface {
    /// Draws `texture` into the surface with the full affine pipeline.
    ///
    /// The destination rectangle starts at `position` and spans the source
    /// rectangle's size unless [`DrawOptions::size`] overrides it. The blit
    /// inverse-maps every framebuffer pixel inside the transformed
    /// rectangle's bounding box back into source space, resamples with the
    /// per-call interpolation mode, and composites source-over.
    pub fn draw_texture(&mut self, texture: &Texture, position: Vec2, options: &DrawOptions) {
        let source = options
            .source
            .unwrap_or_else(|| Bounds2::new(Vec2::ZERO, texture.size()));
        debug_assert!(
            source.min().x >= 0.0
                && source.min().y >= 0.0
                && source.max().x <= texture.width() as f32
                && source.max().y <= texture.height() as f32,
            "source rectangle {source:?} exceeds texture bounds"
        );

        let dest_size = options.size.unwrap_or(source.size);
        if dest_size.x <= 0.0 || dest_size.y <= 0.0 || source.size.x <= 0.0 || source.size.y <= 0.0
        {
            return;
        }
        let pivot = options.pivot.unwrap_or(dest_size * 0.5);

        let transform = compose_draw_transform(
            position,
            dest_size,
            options.rotation_degrees,
            pivot,
            options.mirror,
        );
        let Some(inverse) = transform.inverse() else {
            return;
        };

        // Raster bounds: the transformed corners of the destination
        // rectangle, clamped to the surface.
        let corners = [
            transform.transform_point(Vec2::ZERO),
            transform.transform_point(Vec2::new(dest_size.x, 0.0)),
            transform.transform_point(Vec2::new(0.0, dest_size.y)),
            transform.transform_point(dest_size),
        ];
        let min_x = corners.iter().map(|c| c.x).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|c| c.x).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|c| c.y).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|c| c.y).fold(f32::NEG_INFINITY, f32::max);
        let x0 = (min_x.floor() as i32).max(0);
        let y0 = (min_y.floor() as i32).max(0);
        let x1 = (max_x.ceil() as i32).min(self.width() as i32);
        let y1 = (max_y.ceil() as i32).min(self.height() as i32);

        let scale_u = source.size.x / dest_size.x;
        let scale_v = source.size.y / dest_size.y;

        for y in y0..y1 {
            for x in x0..x1 {
                let pixel_center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let local = inverse.transform_point(pixel_center);
                if local.x < 0.0 || local.x >= dest_size.x || local.y < 0.0 || local.y >= dest_size.y
                {
                    continue;
                }
                let u = source.origin.x + local.x * scale_u;
                let v = source.origin.y + local.y * scale_v;
                let color = match options.interpolation {
                    InterpolationMode::Nearest => sample_nearest(texture, u, v),
                    InterpolationMode::Linear => sample_bilinear(texture, &source, u, v),
                };
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// Draws a nine-slice texture stretched to `bounds`.
    ///
    /// The source image is partitioned by its absolute grid lines into four
    /// fixed-size corners, four single-axis edges, and a center stretched on
    /// both axes. The requested size is clamped so the corners never shrink
    /// below their source size nor overlap; segments with zero source area
    /// (degenerate offsets) produce no draw call. All segments resample
    /// bilinearly, independent of any caller-selected mode.
    pub fn draw_resizable(&mut self, texture: &ResizableTexture, bounds: Bounds2) {
        let bx0 = texture.left() as f32;
        let bx1 = texture.right() as f32;
        let by0 = texture.top() as f32;
        let by1 = texture.bottom() as f32;
        let tw = texture.texture().width() as f32;
        let th = texture.texture().height() as f32;
        let px = bounds.origin.x;
        let py = bounds.origin.y;

        // Keep the center segment from going negative in either dimension.
        let sx = bounds.size.x.max(tw - bx1 + bx0);
        let sy = bounds.size.y.max(th - by1 + by0);

        let right_w = tw - bx1;
        let bottom_h = th - by1;
        let center_w = sx - bx0 - right_w;
        let center_h = sy - by0 - bottom_h;

        let segments = [
            // Corners at native size.
            (0.0, 0.0, bx0, by0, px, py, bx0, by0),
            (bx1, 0.0, right_w, by0, px + sx - right_w, py, right_w, by0),
            (0.0, by1, bx0, bottom_h, px, py + sy - bottom_h, bx0, bottom_h),
            (
                bx1,
                by1,
                right_w,
                bottom_h,
                px + sx - right_w,
                py + sy - bottom_h,
                right_w,
                bottom_h,
            ),
            // Edges stretched along one axis.
            (bx0, 0.0, bx1 - bx0, by0, px + bx0, py, center_w, by0),
            (0.0, by0, bx0, by1 - by0, px, py + by0, bx0, center_h),
            (
                bx1,
                by0,
                right_w,
                by1 - by0,
                px + sx - right_w,
                py + by0,
                right_w,
                center_h,
            ),
            (
                bx0,
                by1,
                bx1 - bx0,
                bottom_h,
                px + bx0,
                py + sy - bottom_h,
                center_w,
                bottom_h,
            ),
            // Center stretched along both axes.
            (
                bx0,
                by0,
                bx1 - bx0,
                by1 - by0,
                px + bx0,
                py + by0,
                center_w,
                center_h,
            ),
        ];

        for (src_x, src_y, src_w, src_h, dst_x, dst_y, dst_w, dst_h) in segments {
            if src_w <= 0.0 || src_h <= 0.0 {
                continue;
            }
            self.draw_texture(
                texture.texture(),
                Vec2::new(dst_x, dst_y),
                &DrawOptions {
                    size: Some(Vec2::new(dst_w, dst_h)),
                    source: Some(Bounds2::from_xywh(src_x, src_y, src_w, src_h)),
                    interpolation: InterpolationMode::Linear,
                    ..DrawOptions::default()
                },
            );
        }
    }
}

#[inline]
fn sample_nearest(texture: &Texture, u: f32, v: f32) -> Rgba8 {
    texture.texel(u.floor() as i32, v.floor() as i32)
}

/// Bilinear sample clamped to the source rectangle so filtering never bleeds
/// into neighboring sprite-sheet frames or nine-slice segments.
#[inline]
fn sample_bilinear(texture: &Texture, source: &Bounds2, u: f32, v: f32) -> Rgba8 {
    let lo_x = source.min().x.floor() as i32;
    let hi_x = (source.max().x.ceil() as i32 - 1).max(lo_x);
    let lo_y = source.min().y.floor() as i32;
    let hi_y = (source.max().y.ceil() as i32 - 1).max(lo_y);

    let gx = u - 0.5;
    let gy = v - 0.5;
    let x0 = gx.floor();
    let y0 = gy.floor();
    let tx = gx - x0;
    let ty = gy - y0;

    let x0 = (x0 as i32).clamp(lo_x, hi_x);
    let x1 = (x0 + 1).clamp(lo_x, hi_x);
    let y0 = (y0 as i32).clamp(lo_y, hi_y);
    let y1 = (y0 + 1).clamp(lo_y, hi_y);

    Rgba8::bilerp(
        texture.texel(x0, y0),
        texture.texel(x1, y0),
        texture.texel(x0, y1),
        texture.texel(x1, y1),
        tx,
        ty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{EdgeOffsets, TextureError};
    use ember_core::math::Extent2D;

    /// Builds a texture whose texel at (x, y) encodes its own coordinates,
    /// making blit placement checks unambiguous.
    fn coordinate_texture(width: u32, height: u32) -> Texture {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8 * 10 + 1, y as u8 * 10 + 1, 0, 255]);
            }
        }
        Texture::from_rgba8(pixels, Extent2D::new(width, height)).unwrap()
    }

    fn surface_to_texture(surface: &Surface) -> Result<Texture, TextureError> {
        Texture::from_rgba8(surface.bytes().to_vec(), surface.extent())
    }

    fn nearest() -> DrawOptions {
        DrawOptions {
            interpolation: InterpolationMode::Nearest,
            ..DrawOptions::default()
        }
    }

    #[test]
    fn plain_draw_reproduces_texture_at_position() {
        let texture = coordinate_texture(3, 2);
        let mut surface = Surface::new(Extent2D::new(8, 8));
        surface.draw_texture(&texture, Vec2::new(2.0, 3.0), &nearest());

        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(
                    surface.pixel(2 + x, 3 + y).unwrap(),
                    texture.texel(x, y),
                    "texel ({x}, {y}) misplaced"
                );
            }
        }
        // Nothing outside the destination rectangle is touched.
        assert_eq!(surface.pixel(1, 3), Some(Rgba8::TRANSPARENT));
        assert_eq!(surface.pixel(5, 3), Some(Rgba8::TRANSPARENT));
        assert_eq!(surface.pixel(2, 5), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn bilinear_identity_blit_is_pixel_exact() {
        let texture = coordinate_texture(4, 4);
        let mut surface = Surface::new(Extent2D::new(4, 4));
        surface.draw_texture(&texture, Vec2::ZERO, &DrawOptions::default());
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(surface.pixel(x, y).unwrap(), texture.texel(x, y));
            }
        }
    }

    #[test]
    fn size_override_stretches_nearest() {
        let texture = coordinate_texture(2, 1);
        let mut surface = Surface::new(Extent2D::new(4, 1));
        surface.draw_texture(
            &texture,
            Vec2::ZERO,
            &DrawOptions {
                size: Some(Vec2::new(4.0, 1.0)),
                ..nearest()
            },
        );
        assert_eq!(surface.pixel(0, 0).unwrap(), texture.texel(0, 0));
        assert_eq!(surface.pixel(1, 0).unwrap(), texture.texel(0, 0));
        assert_eq!(surface.pixel(2, 0).unwrap(), texture.texel(1, 0));
        assert_eq!(surface.pixel(3, 0).unwrap(), texture.texel(1, 0));
    }

    #[test]
    fn source_rect_selects_a_sprite_frame() {
        let texture = coordinate_texture(4, 2);
        let mut surface = Surface::new(Extent2D::new(2, 2));
        surface.draw_texture(
            &texture,
            Vec2::ZERO,
            &DrawOptions {
                source: Some(Bounds2::from_xywh(2.0, 0.0, 2.0, 2.0)),
                ..nearest()
            },
        );
        assert_eq!(surface.pixel(0, 0).unwrap(), texture.texel(2, 0));
        assert_eq!(surface.pixel(1, 1).unwrap(), texture.texel(3, 1));
    }

    #[test]
    fn horizontal_mirror_flips_columns() {
        let texture = coordinate_texture(3, 1);
        let mut surface = Surface::new(Extent2D::new(3, 1));
        surface.draw_texture(
            &texture,
            Vec2::ZERO,
            &DrawOptions {
                mirror: MirrorMode::Horizontal,
                ..nearest()
            },
        );
        assert_eq!(surface.pixel(0, 0).unwrap(), texture.texel(2, 0));
        assert_eq!(surface.pixel(1, 0).unwrap(), texture.texel(1, 0));
        assert_eq!(surface.pixel(2, 0).unwrap(), texture.texel(0, 0));
    }

    #[test]
    fn mirroring_twice_matches_no_mirroring() {
        let texture = coordinate_texture(4, 3);
        let options = DrawOptions {
            mirror: MirrorMode::Horizontal,
            ..nearest()
        };

        let mut once = Surface::new(Extent2D::new(4, 3));
        once.draw_texture(&texture, Vec2::ZERO, &options);
        let mirrored = surface_to_texture(&once).unwrap();

        let mut twice = Surface::new(Extent2D::new(4, 3));
        twice.draw_texture(&mirrored, Vec2::ZERO, &options);

        let mut plain = Surface::new(Extent2D::new(4, 3));
        plain.draw_texture(&texture, Vec2::ZERO, &nearest());

        assert_eq!(twice.bytes(), plain.bytes());
    }

    #[test]
    fn rotation_quarter_turn_about_center() {
        let texture = coordinate_texture(2, 2);
        let mut surface = Surface::new(Extent2D::new(2, 2));
        surface.draw_texture(
            &texture,
            Vec2::ZERO,
            &DrawOptions {
                rotation_degrees: 90.0,
                ..nearest()
            },
        );
        // Clockwise in y-down space: the left column becomes the top row.
        assert_eq!(surface.pixel(0, 0).unwrap(), texture.texel(0, 1));
        assert_eq!(surface.pixel(1, 0).unwrap(), texture.texel(0, 0));
        assert_eq!(surface.pixel(0, 1).unwrap(), texture.texel(1, 1));
        assert_eq!(surface.pixel(1, 1).unwrap(), texture.texel(1, 0));
    }

    #[test]
    fn custom_pivot_moves_rotation_axis() {
        // Rotating 180 degrees about the top-left corner reflects the
        // destination rectangle through the draw position.
        let texture = coordinate_texture(2, 2);
        let mut surface = Surface::new(Extent2D::new(6, 6));
        surface.draw_texture(
            &texture,
            Vec2::new(2.0, 2.0),
            &DrawOptions {
                rotation_degrees: 180.0,
                pivot: Some(Vec2::ZERO),
                ..nearest()
            },
        );
        // The blit now covers [0, 2) x [0, 2), rotated.
        assert_eq!(surface.pixel(1, 1).unwrap(), texture.texel(0, 0));
        assert_eq!(surface.pixel(0, 0).unwrap(), texture.texel(1, 1));
        assert_eq!(surface.pixel(2, 2), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn mirror_stays_centered_with_custom_pivot() {
        // A custom rotation pivot with zero rotation must not displace the
        // mirror, which always flips about the destination center.
        let texture = coordinate_texture(3, 1);
        let options = DrawOptions {
            mirror: MirrorMode::Horizontal,
            pivot: Some(Vec2::new(17.0, -4.0)),
            ..nearest()
        };
        let mut with_pivot = Surface::new(Extent2D::new(3, 1));
        with_pivot.draw_texture(&texture, Vec2::ZERO, &options);
        let mut without_pivot = Surface::new(Extent2D::new(3, 1));
        without_pivot.draw_texture(
            &texture,
            Vec2::ZERO,
            &DrawOptions {
                pivot: None,
                ..options
            },
        );
        assert_eq!(with_pivot.bytes(), without_pivot.bytes());
    }

    #[test]
    fn transform_composition_is_rotation_then_mirror_independent() {
        let transform = compose_draw_transform(
            Vec2::new(10.0, 0.0),
            Vec2::new(4.0, 4.0),
            0.0,
            Vec2::ZERO,
            MirrorMode::Horizontal,
        );
        // Local (0, 0) flips about the center x = 2 to local (4, 0), then
        // translates to world (14, 0).
        let p = transform.transform_point(Vec2::ZERO);
        assert!((p.x - 14.0).abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
    }

    fn bordered_resizable(width: u32, height: u32, inset: u32) -> ResizableTexture {
        // Red 1px border, white interior.
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                let color = if border { Rgba8::RED } else { Rgba8::WHITE };
                pixels.extend_from_slice(&color.to_bytes());
            }
        }
        let texture = Texture::from_rgba8(pixels, Extent2D::new(width, height)).unwrap();
        ResizableTexture::from_edge_offsets(texture, EdgeOffsets::uniform(inset)).unwrap()
    }

    #[test]
    fn nine_slice_native_size_is_pixel_exact() {
        let rt = bordered_resizable(6, 6, 2);
        let mut sliced = Surface::new(Extent2D::new(6, 6));
        sliced.draw_resizable(&rt, Bounds2::from_xywh(0.0, 0.0, 6.0, 6.0));

        let mut plain = Surface::new(Extent2D::new(6, 6));
        plain.draw_texture(rt.texture(), Vec2::ZERO, &DrawOptions::default());

        assert_eq!(sliced.bytes(), plain.bytes());
    }

    #[test]
    fn nine_slice_stretch_preserves_border() {
        let rt = bordered_resizable(6, 6, 2);
        let mut surface = Surface::new(Extent2D::new(12, 9));
        surface.draw_resizable(&rt, Bounds2::from_xywh(0.0, 0.0, 12.0, 9.0));

        // Border ring stays 1px red; interior stays white.
        assert_eq!(surface.pixel(0, 0), Some(Rgba8::RED));
        assert_eq!(surface.pixel(11, 0), Some(Rgba8::RED));
        assert_eq!(surface.pixel(0, 8), Some(Rgba8::RED));
        assert_eq!(surface.pixel(11, 8), Some(Rgba8::RED));
        assert_eq!(surface.pixel(6, 0), Some(Rgba8::RED));
        assert_eq!(surface.pixel(0, 4), Some(Rgba8::RED));
        assert_eq!(surface.pixel(6, 4), Some(Rgba8::WHITE));
        assert_eq!(surface.pixel(2, 2), Some(Rgba8::WHITE));
    }

    #[test]
    fn nine_slice_undersized_request_clamps() {
        let rt = bordered_resizable(6, 6, 2);
        // Minimum effective size is 6 - 3 + 2 = 5 per axis; requesting 2x2
        // must clamp instead of producing an inverted center blit.
        let mut surface = Surface::new(Extent2D::new(8, 8));
        surface.draw_resizable(&rt, Bounds2::from_xywh(0.0, 0.0, 2.0, 2.0));
        assert_eq!(surface.pixel(0, 0), Some(Rgba8::RED));
        assert_eq!(surface.pixel(4, 4), Some(Rgba8::RED));
        assert_eq!(surface.pixel(5, 5), Some(Rgba8::TRANSPARENT));
    }

    #[test]
    fn nine_slice_zero_offset_skips_degenerate_segments() {
        let rt = bordered_resizable(4, 4, 0);
        let mut surface = Surface::new(Extent2D::new(8, 8));
        // Offsets of zero collapse the left/top corner and edge segments;
        // this must draw without panicking.
        surface.draw_resizable(&rt, Bounds2::from_xywh(0.0, 0.0, 8.0, 8.0));
        assert!(surface.pixel(0, 0).is_some());
    }

    #[test]
    fn zero_sized_draws_are_skipped() {
        let texture = coordinate_texture(2, 2);
        let mut surface = Surface::new(Extent2D::new(4, 4));
        surface.draw_texture(
            &texture,
            Vec2::ZERO,
            &DrawOptions {
                size: Some(Vec2::ZERO),
                ..nearest()
            },
        );
        assert_eq!(surface.pixel(0, 0), Some(Rgba8::TRANSPARENT));
    }
}
