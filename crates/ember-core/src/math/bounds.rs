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

//! Provides the axis-aligned rectangle type used for draw regions and
//! overlap queries.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::vector::Vec2;

/// An axis-aligned rectangle defined by an origin and a size.
///
/// Size components are conventionally non-negative; the type does not
/// enforce this, and queries on a negative-size rectangle are meaningless.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Bounds2 {
    /// The minimum corner of the rectangle.
    pub origin: Vec2,
    /// The extent of the rectangle along each axis.
    pub size: Vec2,
}

impl Bounds2 {
    /// A rectangle with zero origin and zero size.
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Creates a new `Bounds2` from an origin and a size.
    #[inline]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Creates a new `Bounds2` from scalar origin and size components.
    #[inline]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Returns the minimum corner (the origin).
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Returns the maximum corner (origin + size).
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Returns the center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Checks if the rectangle contains the given point.
    /// Points on any of the four edges are considered contained.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Checks if this rectangle overlaps another.
    /// Rectangles that only touch along an edge or corner count as
    /// overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_min = self.min();
        let a_max = self.max();
        let b_min = other.min();
        let b_max = other.max();
        a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
    }
}
