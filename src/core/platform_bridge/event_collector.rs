//=========================================================================
// Event Collector
//=========================================================================
//
// Platform event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → focus change → TickControl
//
// Bounded polling keeps a flooded channel from starving the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Drains platform events once per tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    focus: Option<bool>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            focus: None,
        }
    }

    /// Collects pending platform events without blocking.
    ///
    /// Returns [`TickControl::Exit`] on `WindowClosed` or when the platform
    /// side of the channel is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.focus = None;
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Focused(focused)) => {
                    debug!("Window focus changed: {}", focused);
                    self.focus = Some(focused);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Latest focus state reported during the last `collect_frame`, if any.
    pub(crate) fn focus_change(&self) -> Option<bool> {
        self.focus
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.focus_change(), None);
    }

    #[test]
    fn collect_keeps_last_focus_change() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Focused(false)).unwrap();
        tx.send(PlatformEvent::Focused(true)).unwrap();
        tx.send(PlatformEvent::Focused(false)).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.focus_change(), Some(false));
    }

    #[test]
    fn focus_change_resets_each_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Focused(false)).unwrap();
        collector.collect_frame();
        collector.collect_frame();

        assert_eq!(collector.focus_change(), None);
    }

    #[test]
    fn collect_returns_exit_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..150 {
            tx.send(PlatformEvent::Focused(true)).unwrap();
        }
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }
}
