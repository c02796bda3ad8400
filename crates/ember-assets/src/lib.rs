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

//! # Ember Assets
//!
//! Loads image files from disk and decodes them into [`Texture`] values for
//! the compositor. Paths are resolved against a caller-supplied asset root
//! so games refer to assets by short relative names.

#![warn(missing_docs)]

use std::path::{Path, PathBuf};

use ember_core::math::Extent2D;
use ember_gfx::{EdgeOffsets, ResizableTexture, Texture, TextureError};
use thiserror::Error;

/// Errors produced while loading an asset from disk.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read or decoded as an image.
    #[error("failed to load image '{path}'")]
    ImageLoad {
        /// The resolved path that failed to load.
        path: PathBuf,
        /// The underlying decoder or I/O error.
        #[source]
        source: image::ImageError,
    },
    /// The decoded image could not be turned into a texture.
    #[error("invalid texture data in '{path}'")]
    InvalidTexture {
        /// The resolved path of the offending image.
        path: PathBuf,
        /// The underlying validation error.
        #[source]
        source: TextureError,
    },
}

/// Loads an image file relative to `root` and decodes it into a texture.
///
/// Any format supported by the `image` crate works; pixels are converted to
/// RGBA8 regardless of the on-disk format.
pub fn load_texture(root: &Path, path: impl AsRef<Path>) -> Result<Texture, AssetError> {
    let resolved = root.join(path.as_ref());
    let decoded = image::open(&resolved)
        .map_err(|source| AssetError::ImageLoad {
            path: resolved.clone(),
            source,
        })?
        .into_rgba8();
    let extent = Extent2D::new(decoded.width(), decoded.height());
    log::debug!(
        "Loaded texture '{}' ({}x{})",
        resolved.display(),
        extent.width,
        extent.height
    );
    Texture::from_rgba8(decoded.into_raw(), extent).map_err(|source| AssetError::InvalidTexture {
        path: resolved,
        source,
    })
}

/// Loads an image file and attaches nine-slice edge offsets to it.
pub fn load_resizable_texture(
    root: &Path,
    path: impl AsRef<Path>,
    offsets: EdgeOffsets,
) -> Result<ResizableTexture, AssetError> {
    let resolved = root.join(path.as_ref());
    let texture = load_texture(root, path)?;
    ResizableTexture::from_edge_offsets(texture, offsets).map_err(|source| {
        AssetError::InvalidTexture {
            path: resolved,
            source,
        }
    })
}
