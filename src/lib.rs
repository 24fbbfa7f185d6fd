//=========================================================================
// Horsefall Library Root
//
// A single-sprite gravity game on a small fixed-tick engine host.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the state lifecycle API (`State`, `GameContext`) and the
//   game's own states
// - Keep the window backend (`platform`) private
//
// Typical usage:
// ```no_run
// use horsefall::prelude::*;
//
// fn main() -> Result<(), PlatformError> {
//     EngineBuilder::new()
//         .build()
//         .init(|systems| {
//             systems.states.add(MAIN_STATE, MainState::default());
//             systems.states.start(MAIN_STATE);
//         })
//         .run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that runs on the logic thread: states, assets,
// world, stage and time. `game` holds the states this game registers.
//
pub mod config;
pub mod core;
pub mod game;
pub mod logging;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` wraps winit and is not part of the public API surface.
//
mod engine;
mod platform;

#[cfg(test)]
mod test_support;

//--- Public Exports ------------------------------------------------------

pub use crate::core::Game;
pub use engine::{Engine, EngineBuilder};
pub use platform::PlatformError;
