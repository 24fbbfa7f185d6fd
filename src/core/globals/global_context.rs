//=========================================================================
// Game Context
//=========================================================================
//
// Shared data container for states.
//
// Contains everything a state reads or writes during its lifecycle:
// - stage: background color
// - load / cache: asset queue and decoded textures
// - world: sprites and their bodies
// - time: fixed-step clock
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::assets::{Cache, Loader};
use crate::core::stage::Stage;
use crate::core::time::Time;
use crate::core::world::{SpriteId, World};
use crate::core::GameError;

//=== GameContext =========================================================

/// Shared context handed to every [`crate::core::state::State`] callback.
pub struct GameContext {
    pub stage: Stage,

    /// Asset queue. Fill it during `preload`.
    pub load: Loader,

    /// Decoded textures. Survives state switches.
    pub cache: Cache,

    pub world: World,

    pub time: Time,

    /// State switch requested from inside a callback.
    ///
    /// Handed to the state manager at the end of the tick.
    pub(crate) requested_state: Option<String>,
}

impl GameContext {
    /// Creates a context sized and paced from `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            stage: Stage::new(),
            load: Loader::new(config.asset_root.clone()),
            cache: Cache::new(),
            world: World::new(config.width, config.height),
            time: Time::fixed(config.tps),
            requested_state: None,
        }
    }

    /// Places a sprite showing the cached texture `key` with its top-left
    /// corner at `(x, y)`.
    ///
    /// The sprite takes the texture's size. Fails if `key` was never
    /// loaded.
    pub fn add_sprite(&mut self, x: f32, y: f32, key: &str) -> Result<SpriteId, GameError> {
        let texture = self.cache.texture(key).ok_or_else(|| GameError::MissingTexture {
            key: key.to_string(),
        })?;

        let size = Vec2::new(texture.width as f32, texture.height as f32);
        Ok(self.world.add_sprite(key, Vec2::new(x, y), size))
    }

    /// Asks the engine to switch to another state after this tick.
    pub fn start_state(&mut self, key: impl Into<String>) {
        let key = key.into();
        debug!("State {:?} requested from game code", key);
        self.requested_state = Some(key);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
