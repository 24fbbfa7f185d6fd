//=========================================================================
// Platform Subsystem
//
// Hosts the game window on the main thread and reports window lifecycle
// to the logic thread over a channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Game::tick()    │
//  │   ├─ resumed → window    │    │   ├─ states      │
//  │   ├─ Focused(bool)  ─────┼──┐ │   ├─ world step  │
//  │   └─ CloseRequested ─────┼──┤ │   └─ update      │
//  └──────────────────────────┘  │ └──────────────────┘
//                                │          ↑
//                                └──────────┘
//                               PlatformEvent
// ```
//
// Key Design Decisions:
// - **Fixed viewport**: the window opens at the configured logical size
//   and cannot be resized, so the world bounds always match it
// - **Mount point as title**: the configured parent id names the window
// - **Graceful channel disconnect**: if the logic thread is gone, the
//   platform logs and keeps running so the window can still be closed
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::{GameConfig, Renderer};
use crate::core::platform_bridge::PlatformEvent;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop the game cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),
}

//=== WindowSettings ======================================================

/// Window parameters taken from [`GameConfig`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub renderer: Renderer,
}

impl From<&GameConfig> for WindowSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            title: config.parent.clone(),
            width: config.width,
            height: config.height,
            renderer: config.renderer,
        }
    }
}

impl WindowSettings {
    fn attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_resizable(false)
    }
}

//=== Platform ============================================================

/// Window owner and lifecycle reporter.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, settings)`
/// 2. **Execution**: `platform.run()` blocks in the winit event loop
/// 3. **Shutdown**: close request → `WindowClosed` sent → loop exits
///
/// # Thread Safety
///
/// Must stay on the main thread. Communication with the logic thread goes
/// exclusively through the sender.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` is called).
    window: Option<Window>,

    settings: WindowSettings,

    event_sender: Sender<PlatformEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform. The window is created lazily in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, settings: WindowSettings) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            settings,
            event_sender,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends an event to the logic thread.
    ///
    /// A disconnected channel means the logic thread already stopped; the
    /// event is dropped with a warning.
    fn send(&self, event: PlatformEvent) {
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform", "Logic thread gone, dropping {:?}", event);
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called on startup (and on mobile resume). Creates the window once.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        info!(
            target: "platform",
            "Mounting {:?} ({}x{}, renderer preference {:?})",
            self.settings.title,
            self.settings.width,
            self.settings.height,
            self.settings.renderer
        );

        match event_loop.create_window(self.settings.attributes()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Focused(focused) => {
                trace!(target: "platform", "Focus changed: {}", focused);
                self.send(PlatformEvent::Focused(focused));
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
