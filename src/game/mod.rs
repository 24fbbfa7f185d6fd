//=========================================================================
// Game States
//=========================================================================
//
// The states this game registers with the engine.
//
//=========================================================================

mod main_state;

pub use main_state::{MainState, MAIN_STATE};
