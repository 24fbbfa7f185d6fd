//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GameSystems: StateManager (owned by the logic thread)
//   GameContext: Stage + Loader + Cache + World + Time (passed to states)
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use global_context::GameContext;
pub use global_systems::GameSystems;
