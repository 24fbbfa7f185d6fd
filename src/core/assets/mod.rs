//=========================================================================
// Asset System
//=========================================================================
//
// Keyed image loading for state preload.
//
// Architecture:
//   State::preload() → Loader::image(key, path)   (queue only)
//                          ↓
//   StateManager ──→ Loader::load_all(&mut Cache) (decode, RGBA8)
//                          ↓
//   State::create() → GameContext::add_sprite(.., key) → Cache::texture(key)
//
// The cache persists across state switches; the loader queue does not.
//
//=========================================================================

//=== Module Declarations =================================================

mod cache;
mod loader;

//=== Public API ==========================================================

pub use cache::{Cache, Texture};
pub use loader::{AssetError, LoadReport, Loader};
