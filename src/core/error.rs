//=========================================================================
// Game Errors
//=========================================================================

use thiserror::Error;

/// Errors raised by state callbacks and world operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A sprite referenced an image key that is not in the cache.
    ///
    /// Happens when the key was never queued during preload, or when its
    /// load failed.
    #[error("no texture cached under key {key:?}")]
    MissingTexture { key: String },
}
