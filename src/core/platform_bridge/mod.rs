//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the logic thread.
//
// This module defines the contract between the platform and the core
// loop, so the window backend can change without touching game logic.
//
// Components:
// - `interface`: events crossing the thread boundary (the contract)
// - `event_collector`: core-side bounded draining of those events
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
