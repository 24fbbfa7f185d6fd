//=========================================================================
// State Manager
//=========================================================================
//
// Registers states by key and switches between them at tick boundaries.
//
// Only one state runs at a time. Starting a state replaces the current
// one; the replaced state keeps its own data and can be started again
// later, but the world it built is discarded.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use super::State;
use crate::core::globals::GameContext;

//=== StateStatus =========================================================

/// Lifecycle status of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateStatus {
    /// No state has been started yet.
    Idle,

    /// `create` succeeded; `update` runs every tick.
    Running,

    /// `create` returned an error; `update` is skipped.
    Failed,
}

//=== State Manager =======================================================

pub struct StateManager {
    states: HashMap<String, Box<dyn State>>,
    current: Option<String>,
    pending: Option<String>,
    status: StateStatus,
}

impl StateManager {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
            pending: None,
            status: StateStatus::Idle,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a state under `key`.
    ///
    /// Registering an existing key replaces the stored state, unless that
    /// key is the current state: the running state is never swapped out
    /// from under its own `create`/`shutdown` pair, so the new state is
    /// dropped. Returns whether the state was stored.
    pub fn add<T>(&mut self, key: impl Into<String>, state: T) -> bool
    where
        T: State + 'static,
    {
        let key = key.into();

        if self.current.as_deref() == Some(key.as_str()) {
            warn!("State {:?} is current and cannot be replaced", key);
            return false;
        }

        debug!("Registering state {:?}", key);
        if self.states.insert(key.clone(), Box::new(state)).is_some() {
            warn!("State {:?} was already registered and has been replaced", key);
        }
        true
    }

    /// Requests a switch to `key` at the next tick boundary.
    ///
    /// Unregistered keys are ignored with a warning. When called several
    /// times before the boundary, the last call wins.
    pub fn start(&mut self, key: impl Into<String>) {
        let key = key.into();

        if !self.states.contains_key(&key) {
            warn!("Attempted to start unregistered state {:?}", key);
            return;
        }

        if let Some(previous) = self.pending.replace(key.clone()) {
            debug!("Pending start of {:?} overridden by {:?}", previous, key);
        } else {
            debug!("Queued start of state {:?}", key);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, key: &str) -> bool {
        self.states.contains_key(key)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn status(&self) -> StateStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == StateStatus::Running
    }

    //--- Tick Boundary ----------------------------------------------------

    /// Performs a pending switch, if any.
    ///
    /// Sequence: `shutdown` on the outgoing state, clear the world and the
    /// loader queue, `preload`, decode queued assets, `create`.
    pub fn process_pending(&mut self, ctx: &mut GameContext) {
        let Some(key) = self.pending.take() else {
            return;
        };

        if let Some(old_key) = self.current.take() {
            debug!("Shutting down state {:?}", old_key);
            if let Some(old) = self.states.get_mut(&old_key) {
                old.shutdown(ctx);
            }
        }

        ctx.world.clear();
        ctx.load.reset();
        self.status = StateStatus::Idle;

        let Some(state) = self.states.get_mut(&key) else {
            warn!("State {:?} vanished before it could start", key);
            return;
        };

        info!("Starting state {:?}", key);

        state.preload(ctx);

        let report = ctx.load.load_all(&mut ctx.cache);
        if !report.is_complete() {
            warn!(
                "State {:?} preload finished with {} failed asset(s)",
                key,
                report.failed.len()
            );
        }

        self.status = match state.create(ctx) {
            Ok(()) => {
                debug!("State {:?} created", key);
                StateStatus::Running
            }
            Err(e) => {
                error!("State {:?} failed to create: {}", key, e);
                StateStatus::Failed
            }
        };

        self.current = Some(key);
    }

    //--- Update Loop ------------------------------------------------------

    /// Calls `update` on the current state if it is running.
    pub fn update(&mut self, ctx: &mut GameContext) {
        if self.status != StateStatus::Running {
            return;
        }

        let Some(key) = self.current.as_ref() else {
            return;
        };

        if let Some(state) = self.states.get_mut(key) {
            state.update(ctx);
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
