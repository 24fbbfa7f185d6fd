//=========================================================================
// Engine
//
// Main entry point and coordinator for the game host.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──init()──>  Engine ──run()──> [Runtime]
//         │                          │                                      │
//         ├─ with_config()           └─ GameSystems (states.add/start)      ├─ spawns logic thread
//         ├─ with_tps()                                                     ├─ runs platform
//         └─ with_channel_capacity()                                        └─ blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::{GameConfig, MAX_TPS, MIN_TPS};
use crate::core::platform_bridge::PlatformEvent;
use crate::core::{CoreSystemsOrchestrator, Game, GameSystems};
use crate::platform::{Platform, PlatformError, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Config**: [`GameConfig::default`] (400x490, `"game_div"`, auto renderer)
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
///
/// # Examples
///
/// ```no_run
/// use horsefall::prelude::*;
///
/// struct Main;
///
/// impl State for Main {
///     fn update(&mut self, _ctx: &mut GameContext) {}
/// }
///
/// EngineBuilder::new()
///     .build()
///     .init(|systems| {
///         systems.states.add("main", Main);
///         systems.states.start("main");
///     })
///     .run()
///     .unwrap();
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            channel_capacity: 128,
        }
    }

    /// Replaces the whole game configuration, including its TPS.
    ///
    /// Call [`EngineBuilder::with_tps`] afterwards to override the rate.
    ///
    /// # Panics
    ///
    /// Panics if the config fails [`GameConfig::validate`].
    pub fn with_config(mut self, config: GameConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("{}", e);
        }
        self.config = config;
        self
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps` is outside `MIN_TPS..=MAX_TPS`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(
            (MIN_TPS..=MAX_TPS).contains(&tps),
            "TPS must be within {}..={}, got {}",
            MIN_TPS,
            MAX_TPS,
            tps
        );
        self.config.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the engine. No window or thread exists until [`Engine::run`].
    pub fn build(self) -> Engine {
        info!(
            "Building engine ({}x{}, TPS: {}, channel: {})",
            self.config.width, self.config.height, self.config.tps, self.channel_capacity
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(Game::new(&self.config)),
            config: self.config,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game host runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► Game::tick(): states, world step, update
///   │
///   └─► Platform (Event Loop)
///         └─► Window, focus, close
///
/// Communication: bounded channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    config: GameConfig,
    channel_capacity: usize,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Registers and starts states before execution.
    ///
    /// ```no_run
    /// # use horsefall::prelude::*;
    /// # struct Main;
    /// # impl State for Main { fn update(&mut self, _ctx: &mut GameContext) {} }
    /// EngineBuilder::new()
    ///     .build()
    ///     .init(|systems| {
    ///         systems.states.add("main", Main);
    ///         systems.states.start("main");
    ///     });
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GameSystems),
    {
        info!("Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On close: platform exits → channel disconnects → logic thread ends
    ///
    /// # Errors
    ///
    /// Returns the [`PlatformError`] if the event loop could not be created
    /// or failed. The logic thread is still shut down and joined first.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.config.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.config.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        // Platform owns the only sender; dropping it disconnects the core.
        let platform = Platform::new(tx, WindowSettings::from(&self.config));
        let result = platform.run();

        match &result {
            Ok(()) => info!("Platform event loop exited"),
            Err(e) => error!("Platform error: {}", e),
        }

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::State;
    use crate::core::GameContext;

    struct Noop;

    impl State for Noop {
        fn update(&mut self, _ctx: &mut GameContext) {}
    }

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config, GameConfig::default());
        assert_eq!(builder.channel_capacity, 128);
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.config.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be within")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be within")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be within")]
    fn builder_with_tps_panics_on_tiny_rate() {
        EngineBuilder::new().with_tps(1e-20);
    }

    #[test]
    #[should_panic(expected = "tps must be within")]
    fn with_config_rejects_tiny_rate() {
        EngineBuilder::new().with_config(GameConfig {
            tps: 1e-20,
            ..GameConfig::default()
        });
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn with_config_then_tps_overrides_rate() {
        let config = GameConfig {
            tps: 30.0,
            parent: "stage".into(),
            ..GameConfig::default()
        };

        let builder = EngineBuilder::new().with_config(config).with_tps(90.0);

        assert_eq!(builder.config.tps, 90.0);
        assert_eq!(builder.config.parent, "stage");
    }

    #[test]
    #[should_panic(expected = "viewport must be non-empty")]
    fn with_config_rejects_invalid() {
        EngineBuilder::new().with_config(GameConfig {
            width: 0,
            ..GameConfig::default()
        });
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build();

        assert_eq!(engine.config.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
    }

    #[test]
    fn init_registers_states() {
        let engine = EngineBuilder::new().build().init(|systems| {
            systems.states.add("main", Noop);
            systems.states.start("main");
        });

        let states = &engine.orchestrator.game().systems().states;
        assert!(states.contains("main"));
        assert_eq!(states.pending(), Some("main"));
    }
}
