//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core event types.
//
//=========================================================================

//=== PlatformEvent =======================================================

/// Events sent from the platform to the logic thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlatformEvent {
    /// Window gained (`true`) or lost (`false`) focus.
    ///
    /// The game pauses while unfocused.
    Focused(bool),

    /// Window close requested, or the window could not be created.
    WindowClosed,
}
