//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use horsefall::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::platform::PlatformError;

// Configuration
pub use crate::config::{GameConfig, Renderer};

// Game systems and context
pub use crate::core::{GameContext, GameError, GameSystems};

// State system
pub use crate::core::state::{State, StateManager, StateStatus};

// World and stage
pub use crate::core::stage::Color;
pub use crate::core::world::{Body, Sprite, SpriteId};

// Game states
pub use crate::game::{MainState, MAIN_STATE};
