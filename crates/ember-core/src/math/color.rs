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

//! Defines the `Rgba8` color type and associated operations.

/// A color with 8-bit RGBA components, matching the framebuffer's in-memory
/// pixel layout (`[r, g, b, a]` byte order).
///
/// `#[repr(C)]` ensures the struct can be reinterpreted as raw pixel bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    /// The red component.
    pub r: u8,
    /// The green component.
    pub g: u8,
    /// The blue component.
    pub b: u8,
    /// The alpha (opacity) component.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque red (`[255, 0, 0, 255]`).
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green (`[0, 255, 0, 255]`).
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue (`[0, 0, 255, 255]`).
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque yellow (`[255, 255, 0, 255]`).
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Opaque cyan (`[0, 255, 255, 255]`).
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Opaque magenta (`[255, 0, 255, 255]`).
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Opaque white (`[255, 255, 255, 255]`).
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black (`[0, 0, 0, 255]`).
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black (`[0, 0, 0, 0]`).
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a new `Rgba8` with explicit RGBA values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Rgba8` (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates an `Rgba8` from a `[r, g, b, a]` byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns the color as a `[r, g, b, a]` byte array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Composites `self` over `dst` with standard source-over alpha blending
    /// (non-premultiplied source).
    #[inline]
    pub fn over(self, dst: Self) -> Self {
        let sa = self.a as u32;
        if sa == 255 {
            return self;
        }
        if sa == 0 {
            return dst;
        }
        let inv = 255 - sa;
        let blend = |s: u8, d: u8| ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8;
        Self {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a: (sa + (dst.a as u32 * inv + 127) / 255).min(255) as u8,
        }
    }

    /// Performs a component-wise linear interpolation between two colors.
    /// The interpolation factor `t` is clamped to the `[0.0, 1.0]` range.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |s: u8, e: u8| (s as f32 + (e as f32 - s as f32) * t).round() as u8;
        Self {
            r: mix(start.r, end.r),
            g: mix(start.g, end.g),
            b: mix(start.b, end.b),
            a: mix(start.a, end.a),
        }
    }

    /// Bilinearly interpolates between the four corners of a texel quad.
    /// `tx` and `ty` are the fractional positions within the quad.
    #[inline]
    pub fn bilerp(c00: Self, c10: Self, c01: Self, c11: Self, tx: f32, ty: f32) -> Self {
        Self::lerp(Self::lerp(c00, c10, tx), Self::lerp(c01, c11, tx), ty)
    }
}

impl Default for Rgba8 {
    /// Returns fully transparent black.
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_round_trip() {
        let c = Rgba8::new(12, 34, 56, 78);
        assert_eq!(Rgba8::from_bytes(c.to_bytes()), c);
    }

    #[test]
    fn test_over_opaque_source_replaces() {
        assert_eq!(Rgba8::RED.over(Rgba8::BLUE), Rgba8::RED);
    }

    #[test]
    fn test_over_transparent_source_keeps_destination() {
        assert_eq!(Rgba8::TRANSPARENT.over(Rgba8::GREEN), Rgba8::GREEN);
    }

    #[test]
    fn test_over_half_alpha_mixes() {
        let src = Rgba8::new(255, 0, 0, 128);
        let out = src.over(Rgba8::BLACK);
        assert!(out.r >= 127 && out.r <= 129);
        assert_eq!(out.g, 0);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(Rgba8::lerp(Rgba8::BLACK, Rgba8::WHITE, 0.0), Rgba8::BLACK);
        assert_eq!(Rgba8::lerp(Rgba8::BLACK, Rgba8::WHITE, 1.0), Rgba8::WHITE);
        let mid = Rgba8::lerp(Rgba8::BLACK, Rgba8::WHITE, 0.5);
        assert!(mid.r >= 127 && mid.r <= 128);
    }

    #[test]
    fn test_bilerp_corner_selection() {
        let (a, b, c, d) = (Rgba8::RED, Rgba8::GREEN, Rgba8::BLUE, Rgba8::WHITE);
        assert_eq!(Rgba8::bilerp(a, b, c, d, 0.0, 0.0), a);
        assert_eq!(Rgba8::bilerp(a, b, c, d, 1.0, 0.0), b);
        assert_eq!(Rgba8::bilerp(a, b, c, d, 0.0, 1.0), c);
        assert_eq!(Rgba8::bilerp(a, b, c, d, 1.0, 1.0), d);
    }
}
