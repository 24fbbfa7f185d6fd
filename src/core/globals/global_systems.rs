//=========================================================================
// Game Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Systems operate on GameContext data once per tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GameContext;
use crate::core::state::StateManager;

//=== GameSystems =========================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `states`: keyed state registry and lifecycle driver
pub struct GameSystems {
    /// Register states with `add` and activate one with `start`.
    pub states: StateManager,
}

impl GameSystems {
    /// Creates a systems container with no registered states.
    ///
    /// Users reach this through [`crate::Engine::init`].
    pub(crate) fn new() -> Self {
        Self {
            states: StateManager::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick of game logic.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **State switch**: a pending start runs preload, loading and create
    /// 2. **Physics**: integrate every body (only while a state is running)
    /// 3. **State update**: the current state's `update`
    /// 4. **Requests**: hand any `ctx.start_state` request to the manager
    pub(crate) fn update(&mut self, ctx: &mut GameContext) {
        // 1. Apply pending state switch
        self.states.process_pending(ctx);

        // 2-3. Simulate and update the running state
        if self.states.is_running() {
            ctx.world.step(ctx.time.delta());
            self.states.update(ctx);
        }

        // 4. Queue switches requested by game code for the next tick
        if let Some(key) = ctx.requested_state.take() {
            self.states.start(key);
        }
    }
}
