//! Per-state color tables.
//!
//! A [`ColorTable`] maps [`InteractionState`]s to colors, with a default
//! color that always resolves. Tables are small and cheap to clone.

use indexmap::IndexMap;
use vello::peniko::Color;

use crate::color::pressed_variant;
use crate::state::InteractionState;

/// An ordered mapping from interaction states to colors.
///
/// Lookup checks the explicit entries in insertion order and falls back
/// to the default color, so the default acts as the final, catch-all
/// entry. A table with no explicit entries paints every state the same.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    entries: IndexMap<InteractionState, Color>,
    default: Color,
}

impl ColorTable {
    /// Create a table that resolves every state to `default`.
    pub fn solid(default: Color) -> Self {
        Self {
            entries: IndexMap::new(),
            default,
        }
    }

    /// Create a table whose pressed color is derived from `normal` by
    /// scaling its HSV value channel by `ratio`.
    ///
    /// `ratio` is passed through unguarded; a non-positive ratio is
    /// almost certainly a caller bug and is logged.
    pub fn auto_pressed(normal: Color, ratio: f32) -> Self {
        if ratio <= 0.0 {
            log::warn!(
                "ColorTable: auto_pressed called with non-positive ratio {ratio}, \
                 the pressed color will degenerate to black"
            );
        }
        Self::solid(normal).with_state(InteractionState::Pressed, pressed_variant(normal, ratio))
    }

    /// Add or replace the color for an explicit state.
    pub fn with_state(mut self, state: InteractionState, color: Color) -> Self {
        self.set_state(state, color);
        self
    }

    /// Set the color for an explicit state.
    pub fn set_state(&mut self, state: InteractionState, color: Color) {
        self.entries.insert(state, color);
    }

    /// Resolve the color for `state`, falling back to the default.
    pub fn resolve(&self, state: InteractionState) -> Color {
        self.entries.get(&state).copied().unwrap_or(self.default)
    }

    /// The catch-all color used when no explicit entry matches.
    pub fn default_color(&self) -> Color {
        self.default
    }

    /// Whether the table carries explicit per-state entries.
    ///
    /// This is structural: an entry that happens to repeat the default
    /// color still counts, because the caller asked for that state to be
    /// pinned.
    pub fn is_stateful(&self) -> bool {
        !self.entries.is_empty()
    }
}

impl Default for ColorTable {
    /// A table that resolves every state to fully transparent.
    fn default() -> Self {
        Self::solid(Color::TRANSPARENT)
    }
}
