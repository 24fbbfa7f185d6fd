//=========================================================================
// Asset Loader
//=========================================================================
//
// Collects image requests during preload and decodes them in one batch.
//
// A failed asset never aborts the batch: it is logged, reported, and left
// out of the cache. Whatever later asks for that key gets a
// `GameError::MissingTexture`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::{Cache, Texture};

//=== AssetError ==========================================================

/// Failure to load a single queued asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset {key:?} not found at {}", .path.display())]
    NotFound { key: String, path: PathBuf },

    #[error("asset {key:?} at {} could not be decoded: {source}", .path.display())]
    Decode {
        key: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    /// Key the failed asset was queued under.
    pub fn key(&self) -> &str {
        match self {
            Self::NotFound { key, .. } | Self::Decode { key, .. } => key,
        }
    }
}

//=== LoadReport ==========================================================

/// Outcome of a [`Loader::load_all`] batch.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<AssetError>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

//=== Loader ==============================================================

#[derive(Debug, Clone)]
struct PendingImage {
    key: String,
    path: PathBuf,
}

/// Queue of images to decode into the [`Cache`].
///
/// Relative paths are resolved against the loader's root directory.
#[derive(Debug)]
pub struct Loader {
    root: PathBuf,
    queue: Vec<PendingImage>,
}

impl Loader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            queue: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Queues an image under `key`. Nothing is read until [`Loader::load_all`].
    pub fn image(&mut self, key: impl Into<String>, path: impl AsRef<Path>) {
        let key = key.into();
        let path = self.root.join(path);
        debug!("Queued image {:?} from {}", key, path.display());
        self.queue.push(PendingImage { key, path });
    }

    /// Number of queued, not yet loaded assets.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drops every queued request.
    pub fn reset(&mut self) {
        self.queue.clear();
    }

    /// Decodes all queued images into `cache`, emptying the queue.
    pub fn load_all(&mut self, cache: &mut Cache) -> LoadReport {
        let mut report = LoadReport::default();

        for PendingImage { key, path } in self.queue.drain(..) {
            match decode(&key, &path) {
                Ok(texture) => {
                    info!(
                        "Loaded image {:?} ({}x{}) from {}",
                        key,
                        texture.width,
                        texture.height,
                        path.display()
                    );
                    cache.insert(key.clone(), texture);
                    report.loaded.push(key);
                }
                Err(e) => {
                    warn!("{}", e);
                    report.failed.push(e);
                }
            }
        }

        report
    }
}

fn decode(key: &str, path: &Path) -> Result<Texture, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound {
            key: key.to_string(),
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path)
        .map_err(|source| AssetError::Decode {
            key: key.to_string(),
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    Ok(Texture {
        width: image.width(),
        height: image.height(),
        pixels: image.into_raw(),
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
