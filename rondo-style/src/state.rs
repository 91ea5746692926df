//! Interaction states a styled surface can be in.

/// The interaction state of a widget surface.
///
/// Only the states that change a surface's colors are modeled here;
/// hover and focus do not affect fills and are left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// The resting state.
    #[default]
    Normal,
    /// A pointer is currently held down on the surface.
    Pressed,
}

impl InteractionState {
    /// Whether this is the pressed state.
    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed)
    }
}
