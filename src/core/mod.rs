//=========================================================================
// Core Systems
//
// Everything that runs on the logic (non-platform) thread.
//
// Responsibilities:
// - Own the game systems (state manager) and shared context (stage,
//   assets, world, time)
// - Advance the game one fixed step per tick
// - Receive platform events via channel and react to focus/close
// - Keep a steady pace at the configured tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer. The two
// only talk through `PlatformEvent` messages, so no game data is ever
// shared between threads.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::Receiver;
use log::info;

//=== Module Declarations =================================================
pub mod assets;
pub mod globals;
pub mod stage;
pub mod state;
pub mod time;
pub mod world;

mod error;
pub(crate) mod platform_bridge;

//=== Public API ==========================================================
pub use error::GameError;
pub use globals::{GameContext, GameSystems};

//=== Internal Modules ====================================================
use crate::config::GameConfig;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== Game ================================================================

/// Headless game runtime: context, systems and pause state.
///
/// [`Game::tick`] is the whole per-frame pipeline. The engine calls it from
/// the logic thread; tests call it directly.
pub struct Game {
    context: GameContext,
    systems: GameSystems,
    focused: bool,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            context: GameContext::new(config),
            systems: GameSystems::new(),
            focused: true,
        }
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.context
    }

    pub fn systems(&self) -> &GameSystems {
        &self.systems
    }

    pub fn systems_mut(&mut self) -> &mut GameSystems {
        &mut self.systems
    }

    pub fn is_paused(&self) -> bool {
        !self.focused
    }

    /// Pauses the game while the window is unfocused.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            info!("Game {}", if focused { "resumed" } else { "paused" });
        }
        self.focused = focused;
    }

    /// Advances the game by one fixed step. Does nothing while paused.
    pub fn tick(&mut self) {
        if !self.focused {
            return;
        }

        self.systems.update(&mut self.context);
        self.context.time.advance();
    }
}

//=== CoreSystemsOrchestrator =============================================
//
// Owns the game on the logic thread and paces its ticks.
//
pub(crate) struct CoreSystemsOrchestrator {
    game: Game,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub fn new(game: Game) -> Self {
        Self { game }
    }

    //--- Initialization ---------------------------------------------------

    /// Gives the caller mutable access to the game systems before the
    /// logic thread starts.
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GameSystems),
    {
        init_fn(self.game.systems_mut());
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread, ticking the game at a fixed frequency.
    //
    // Each tick:
    //  1. Drains platform events (focus, close)
    //  2. Ticks the game
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits cleanly when the platform closes or disconnects
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut game = self.game;
            let mut collector = EventCollector::new(receiver);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting after {} ticks", game.context().time.frame());
                    break;
                }

                if let Some(focused) = collector.focus_change() {
                    game.set_focused(focused);
                }

                //--- Step 2: Tick the game ---------------------------------
                game.tick();

                //--- Step 3: Maintain fixed pacing -------------------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crossbeam_channel::unbounded;

    use super::*;
    use crate::core::state::State;

    struct Counter(Arc<AtomicUsize>);

    impl State for Counter {
        fn update(&mut self, _ctx: &mut GameContext) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Switcher;

    impl State for Switcher {
        fn update(&mut self, ctx: &mut GameContext) {
            ctx.start_state("counter");
        }
    }

    fn game_with_counter() -> (Game, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let mut game = Game::new(&GameConfig::default());
        game.systems_mut().states.add("counter", Counter(Arc::clone(&count)));
        game.systems_mut().states.start("counter");
        (game, count)
    }

    #[test]
    fn tick_starts_then_updates() {
        let (mut game, count) = game_with_counter();

        game.tick();
        assert_eq!(game.systems().states.current(), Some("counter"));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        game.tick();
        game.tick();
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(game.context().time.frame(), 3);
    }

    #[test]
    fn tick_without_states_only_advances_time() {
        let mut game = Game::new(&GameConfig::default());

        game.tick();

        assert_eq!(game.context().time.frame(), 1);
        assert!(game.systems().states.current().is_none());
    }

    #[test]
    fn paused_game_does_not_tick() {
        let (mut game, count) = game_with_counter();
        game.tick();

        game.set_focused(false);
        assert!(game.is_paused());
        for _ in 0..10 {
            game.tick();
        }

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(game.context().time.frame(), 1);

        game.set_focused(true);
        game.tick();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn state_can_request_switch() {
        let (mut game, count) = game_with_counter();
        game.systems_mut().states.add("switcher", Switcher);
        game.systems_mut().states.start("switcher");

        game.tick();
        assert_eq!(game.systems().states.current(), Some("switcher"));

        game.tick();
        assert_eq!(game.systems().states.current(), Some("counter"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn core_thread_exits_on_window_closed() {
        let (game, _count) = game_with_counter();
        let (tx, rx) = unbounded();

        let handle = CoreSystemsOrchestrator::new(game).spawn_core_thread(rx, 240.0);
        tx.send(PlatformEvent::WindowClosed).unwrap();

        handle.join().unwrap();
    }

    #[test]
    fn core_thread_exits_on_disconnect() {
        let (game, _count) = game_with_counter();
        let (tx, rx) = unbounded::<PlatformEvent>();

        let handle = CoreSystemsOrchestrator::new(game).spawn_core_thread(rx, 240.0);
        drop(tx);

        handle.join().unwrap();
    }

    #[test]
    fn init_systems_exposes_state_manager() {
        let mut orchestrator = CoreSystemsOrchestrator::new(Game::new(&GameConfig::default()));
        orchestrator.init_systems(|systems| {
            systems.states.add("counter", Counter(Arc::default()));
        });
        assert!(orchestrator.game.systems().states.contains("counter"));
    }
}
