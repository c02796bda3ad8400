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

//! Engine startup configuration.

use std::path::PathBuf;
use std::time::Duration;

use ember_core::math::Extent2D;

/// Fixed parameters chosen by the game before the engine starts.
///
/// The framebuffer resolution never changes at runtime; only the window
/// around it does.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The window title.
    pub title: String,
    /// The logical framebuffer resolution all drawing targets.
    pub resolution: Extent2D,
    /// The initial window size as a multiple of the framebuffer resolution.
    pub window_scale: u32,
    /// The minimum wall-clock duration of one frame. The loop sleeps off
    /// whatever this leaves after update and present.
    pub target_frame_interval: Duration,
    /// The directory asset paths are resolved against.
    pub asset_root: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Ember".to_string(),
            resolution: Extent2D::new(128, 128),
            window_scale: 4,
            target_frame_interval: Duration::from_millis(17),
            asset_root: PathBuf::from("assets"),
        }
    }
}

impl EngineConfig {
    /// Returns the initial window size, the framebuffer resolution scaled
    /// by the configured factor.
    pub fn initial_window_size(&self) -> Extent2D {
        Extent2D::new(
            self.resolution.width * self.window_scale.max(1),
            self.resolution.height * self.window_scale.max(1),
        )
    }
}
