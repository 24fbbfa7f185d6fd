//=========================================================================
// State System
//=========================================================================
//
// Named game modes with a three-stage lifecycle.
//
// Architecture:
//   StateManager
//     ├─ states: HashMap<String, Box<dyn State>>
//     ├─ current: Option<String>
//     └─ pending: Option<String>
//
// Flow (at a tick boundary, when a start is pending):
//   shutdown(old) → clear world → preload() → Loader::load_all() → create()
//
// Flow (every tick while running):
//   World::step() → update()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GameContext;
use crate::core::GameError;

//=== Module Declarations =================================================

mod state_manager;

//=== Public API ==========================================================

pub use state_manager::{StateManager, StateStatus};

//=== State Trait =========================================================

/// A named game mode driven by the engine loop.
///
/// # Minimal Implementation
///
/// Only `update()` is required. The other hooks default to doing nothing:
///
/// ```rust
/// # use horsefall::prelude::*;
/// struct Idle;
///
/// impl State for Idle {
///     fn update(&mut self, _ctx: &mut GameContext) {}
/// }
/// ```
pub trait State: Send {
    /// Queues assets on `ctx.load` and sets stage properties.
    ///
    /// Queued assets are decoded after this returns and before `create`.
    fn preload(&mut self, _ctx: &mut GameContext) {}

    /// Builds the initial world once preload has finished loading.
    ///
    /// Returning an error marks the state as failed: it stays current but
    /// `update` is never called.
    fn create(&mut self, _ctx: &mut GameContext) -> Result<(), GameError> {
        Ok(())
    }

    /// Called every tick after the physics step.
    fn update(&mut self, ctx: &mut GameContext);

    /// Called when another state replaces this one, before the world is
    /// cleared.
    fn shutdown(&mut self, _ctx: &mut GameContext) {}
}
