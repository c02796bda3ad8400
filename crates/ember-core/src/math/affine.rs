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

//! Defines the `Affine2` type for 2D affine transformations.

use super::{vector::Vec2, DEG_TO_RAD};
use std::ops::Mul;

/// A 2D affine transformation: a 2x2 linear part plus a translation.
///
/// `Affine2` values are pure: composing and applying them never touches any
/// shared state, so a transform can be built per draw call and discarded.
/// Column-vector convention; `a * b` applies `b` first, then `a`.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Affine2 {
    /// Row 0, column 0 of the linear part.
    pub m00: f32,
    /// Row 0, column 1 of the linear part.
    pub m01: f32,
    /// Row 1, column 0 of the linear part.
    pub m10: f32,
    /// Row 1, column 1 of the linear part.
    pub m11: f32,
    /// The x component of the translation.
    pub tx: f32,
    /// The y component of the translation.
    pub ty: f32,
}

impl Affine2 {
    /// The identity transformation (no translation, rotation, or scaling).
    pub const IDENTITY: Self = Self {
        m00: 1.0,
        m01: 0.0,
        m10: 0.0,
        m11: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Creates an affine transformation representing a pure translation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ember_core::math::{Affine2, Vec2};
    /// let t = Affine2::from_translation(Vec2::new(3.0, 4.0));
    /// assert_eq!(t.transform_point(Vec2::ZERO), Vec2::new(3.0, 4.0));
    /// ```
    #[inline]
    pub const fn from_translation(translation: Vec2) -> Self {
        Self {
            tx: translation.x,
            ty: translation.y,
            ..Self::IDENTITY
        }
    }

    /// Creates an affine transformation representing a pure non-uniform scale
    /// about the origin.
    #[inline]
    pub const fn from_scale(scale: Vec2) -> Self {
        Self {
            m00: scale.x,
            m11: scale.y,
            ..Self::IDENTITY
        }
    }

    /// Creates an affine transformation representing a clockwise rotation by
    /// `degrees` about the origin (screen-space convention, y down).
    #[inline]
    pub fn from_rotation_degrees(degrees: f32) -> Self {
        let (sin, cos) = (degrees * DEG_TO_RAD).sin_cos();
        Self {
            m00: cos,
            m01: -sin,
            m10: sin,
            m11: cos,
            ..Self::IDENTITY
        }
    }

    /// Applies the transformation to a point.
    #[inline]
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        Vec2 {
            x: self.m00 * point.x + self.m01 * point.y + self.tx,
            y: self.m10 * point.x + self.m11 * point.y + self.ty,
        }
    }

    /// Returns the determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Returns the inverse transformation, or `None` if the linear part is
    /// singular (determinant near zero).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= f32::EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let m00 = self.m11 * inv_det;
        let m01 = -self.m01 * inv_det;
        let m10 = -self.m10 * inv_det;
        let m11 = self.m00 * inv_det;
        Some(Self {
            m00,
            m01,
            m10,
            m11,
            tx: -(m00 * self.tx + m01 * self.ty),
            ty: -(m10 * self.tx + m11 * self.ty),
        })
    }
}

impl Default for Affine2 {
    /// Returns the identity transformation.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine2 {
    type Output = Self;
    /// Composes two transformations: the result applies `rhs` first, then
    /// `self`.
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            m00: self.m00 * rhs.m00 + self.m01 * rhs.m10,
            m01: self.m00 * rhs.m01 + self.m01 * rhs.m11,
            m10: self.m10 * rhs.m00 + self.m11 * rhs.m10,
            m11: self.m10 * rhs.m01 + self.m11 * rhs.m11,
            tx: self.m00 * rhs.tx + self.m01 * rhs.ty + self.tx,
            ty: self.m10 * rhs.tx + self.m11 * rhs.ty + self.ty,
        }
    }
}
