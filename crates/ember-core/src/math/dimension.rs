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

//! Defines integer pixel dimensions for surfaces and textures.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::vector::Vec2;

/// The size of a 2D pixel region (a surface, texture, or window).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub struct Extent2D {
    /// The width of the region in pixels.
    pub width: u32,
    /// The height of the region in pixels.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new `Extent2D` with the specified dimensions.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the total number of pixels covered by the extent.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns the width / height aspect ratio, or `0.0` for a zero height.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Converts the extent to a floating-point vector.
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
