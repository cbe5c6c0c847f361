//! Resolution of item source references to textures.
//!
//! Sources are file names looked up under an asset directory. Each is decoded
//! at most once; failures are remembered so a missing file is reported a
//! single time and the item keeps its placeholder.

use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("IO error reading {path:?}: {source}")]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The file was read but is not a supported image.
    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        /// File that was requested
        path: PathBuf,
        /// Underlying decoder failure
        #[source]
        source: image::ImageError,
    },
}

/// Decodes encoded image bytes (JPEG or PNG) into an egui image.
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage, image::ImageError> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}

/// Reads and decodes the image at `path`.
pub fn load_image(path: &Path) -> Result<egui::ColorImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Lazily loaded textures keyed by source reference.
pub struct AssetCache {
    dir: PathBuf,
    textures: HashMap<String, egui::TextureHandle>,
    failed: HashSet<String>,
}

impl AssetCache {
    /// Creates a cache resolving sources against `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            textures: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Directory sources are resolved against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the texture for `source` and its pixel size, loading it on first use.
    ///
    /// `None` means the asset is unavailable and a placeholder should be drawn.
    pub fn texture(
        &mut self,
        ctx: &egui::Context,
        source: &str,
    ) -> Option<(egui::TextureId, egui::Vec2)> {
        if let Some(handle) = self.textures.get(source) {
            return Some((handle.id(), handle.size_vec2()));
        }
        if self.failed.contains(source) {
            return None;
        }
        match load_image(&self.dir.join(source)) {
            Ok(image) => {
                log::info!("Loaded asset {source} ({}x{})", image.size[0], image.size[1]);
                let handle = ctx.load_texture(source, image, egui::TextureOptions::LINEAR);
                let texture = (handle.id(), handle.size_vec2());
                self.textures.insert(source.to_string(), handle);
                Some(texture)
            }
            Err(err) => {
                log::warn!("{err}");
                self.failed.insert(source.to_string());
                None
            }
        }
    }

    /// Returns true if loading `source` has already failed.
    pub fn has_failed(&self, source: &str) -> bool {
        self.failed.contains(source)
    }
}
