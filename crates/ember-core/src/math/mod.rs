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

//! Provides the foundational mathematics primitives for the 2D pipeline.
//!
//! This module contains the vector, bounds, affine transform, viewport, and
//! color types that the compositor and input layers are built on.
//!
//! All angular functions in this module operate in **degrees** at the public
//! surface (the convention of the drawing API), converting to radians
//! internally via [`DEG_TO_RAD`].

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod affine;
pub mod bounds;
pub mod color;
pub mod dimension;
pub mod vector;
pub mod viewport;

// --- Re-export Principal Types ---

pub use self::affine::Affine2;
pub use self::bounds::Bounds2;
pub use self::color::Rgba8;
pub use self::dimension::Extent2D;
pub use self::vector::Vec2;
pub use self::viewport::Viewport;

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use ember_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use ember_core::math::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Clamps a value to a specified minimum and maximum range.
///
/// # Examples
///
/// ```
/// use ember_core::math::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Remaps `value` from the range `[from_min, from_max]` to `[to_min, to_max]`,
/// clamping the interpolation factor so inputs outside the source range pin to
/// the nearest end of the target range instead of extrapolating.
///
/// A degenerate source range (`from_min == from_max`) maps everything to
/// `to_min`.
///
/// # Examples
///
/// ```
/// use ember_core::math::remap_clamped;
/// assert_eq!(remap_clamped(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(remap_clamped(-3.0, 0.0, 10.0, 0.0, 100.0), 0.0);
/// assert_eq!(remap_clamped(42.0, 0.0, 10.0, 0.0, 100.0), 100.0);
/// ```
#[inline]
pub fn remap_clamped(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    let span = from_max - from_min;
    if span.abs() <= f32::EPSILON {
        return to_min;
    }
    let t = clamp((value - from_min) / span, 0.0, 1.0);
    to_min + (to_max - to_min) * t
}

/// Compares two floating-point numbers for approximate equality using a
/// custom epsilon.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Compares two floating-point numbers for approximate equality using the
/// default [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
