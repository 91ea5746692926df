//! Pointer events delivered to widgets by the host.

/// The pointer lifecycle events a widget reacts to.
///
/// The host toolkit owns hit-testing and event routing; widgets only see
/// the events that target them, already on the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer was pressed inside the widget.
    Down,
    /// The pointer was released.
    Up,
    /// The interaction was aborted by the host (e.g. the gesture was
    /// claimed by a scroll container).
    Cancel,
}

impl PointerEvent {
    /// Whether this event ends an in-progress press.
    pub fn ends_press(&self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}
