//=========================================================================
// Main State
//=========================================================================
//
// The only game mode: a horse placed near the top-left corner that falls
// under constant gravity. There is no per-frame gameplay yet.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::state::State;
use crate::core::world::SpriteId;
use crate::core::{GameContext, GameError};

//=== Constants ===========================================================

/// Key the main state is registered and started under.
pub const MAIN_STATE: &str = "main";

const BACKGROUND_COLOR: &str = "#71c5cf";

const HORSE_KEY: &str = "horse";
const HORSE_PATH: &str = "assets/horse.png";
const HORSE_X: f32 = 20.0;
const HORSE_Y: f32 = 20.0;
const HORSE_GRAVITY: f32 = 1000.0;

//=== MainState ===========================================================

pub struct MainState {
    /// Whether the horse's body keeps inside the world.
    collide_world_bounds: bool,
    horse: Option<SpriteId>,
}

impl MainState {
    pub fn new(collide_world_bounds: bool) -> Self {
        Self {
            collide_world_bounds,
            horse: None,
        }
    }

    /// Handle of the horse sprite once `create` has run.
    pub fn horse(&self) -> Option<SpriteId> {
        self.horse
    }
}

impl Default for MainState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl State for MainState {
    fn preload(&mut self, ctx: &mut GameContext) {
        if let Err(e) = ctx.stage.set_background_color(BACKGROUND_COLOR) {
            warn!("{}", e);
        }
        ctx.load.image(HORSE_KEY, HORSE_PATH);
    }

    fn create(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        let horse = ctx.add_sprite(HORSE_X, HORSE_Y, HORSE_KEY)?;

        if let Some(sprite) = ctx.world.sprite_mut(horse) {
            sprite.body.gravity.y = HORSE_GRAVITY;
            sprite.body.collide_world_bounds = self.collide_world_bounds;
        }

        if self.collide_world_bounds {
            info!("Horse collides with world bounds");
        } else {
            warn!(
                "Horse does not collide with world bounds and will fall out of view; \
                 set main.collide_world_bounds = true to keep it on screen"
            );
        }

        self.horse = Some(horse);
        Ok(())
    }

    fn update(&mut self, _ctx: &mut GameContext) {}

    fn shutdown(&mut self, _ctx: &mut GameContext) {
        self.horse = None;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
