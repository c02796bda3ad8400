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

//! # Ember Gfx
//!
//! The CPU rendering crate: pixel surfaces, texture types, and the
//! compositing pipeline (affine blits with pivot rotation and center
//! mirroring, nine-slice stretching, shape primitives, and the letterboxed
//! presentation blit).
//!
//! All drawing happens on the main thread against a [`Surface`] owned by the
//! caller; no drawing operation holds persistent transform or interpolation
//! state between calls.

#![warn(missing_docs)]

mod compositor;
mod present;
mod primitives;
mod surface;
mod texture;

pub use self::compositor::compose_draw_transform;
pub use self::present::blit_letterboxed;
pub use self::surface::Surface;
pub use self::texture::{
    DrawOptions, EdgeOffsets, InterpolationMode, MirrorMode, ResizableTexture, Texture,
    TextureError,
};
