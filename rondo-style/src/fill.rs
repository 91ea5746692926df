//! Fill configuration and state-driven fill resolution.
//!
//! A [`FillResolver`] owns the fill configuration of one surface (flat
//! color table, gradient pair, or a fixed static color) and resolves it
//! against the current [`InteractionState`], reporting whether the
//! resolved colors differ from what is currently applied. Callers use
//! that signal to skip redundant redraws.

use vello::peniko::Color;

use crate::state::InteractionState;
use crate::table::ColorTable;

/// The configured fill of a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    /// A single state-resolved color.
    Flat(ColorTable),
    /// A two-stop horizontal gradient, each stop resolved independently.
    Gradient {
        /// Table for the left gradient stop.
        start: ColorTable,
        /// Table for the right gradient stop.
        end: ColorTable,
    },
}

/// The concrete colors applied to a surface after resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillColors {
    /// The flat color, or the left gradient stop.
    pub start: Color,
    /// The right gradient stop; `None` for flat fills.
    pub end: Option<Color>,
}

impl FillColors {
    /// A flat fill.
    pub fn flat(color: Color) -> Self {
        Self {
            start: color,
            end: None,
        }
    }

    /// A gradient fill.
    pub fn gradient(start: Color, end: Color) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Whether these colors describe a gradient.
    pub fn is_gradient(&self) -> bool {
        self.end.is_some()
    }
}

/// Resolves a fill configuration against interaction states and tracks
/// the colors currently applied to the surface.
///
/// Until a style is configured the resolver holds a fully transparent
/// flat fill and [`FillResolver::resolve`] never signals a change.
#[derive(Debug, Clone)]
pub struct FillResolver {
    style: Option<FillStyle>,
    applied: FillColors,
}

impl FillResolver {
    /// Create a resolver with no configured style and a transparent fill.
    pub fn new() -> Self {
        Self {
            style: None,
            applied: FillColors::flat(Color::TRANSPARENT),
        }
    }

    /// Configure a flat fill. The table's default color is applied
    /// immediately; the per-state entries take effect on [`resolve`].
    ///
    /// [`resolve`]: FillResolver::resolve
    pub fn set_flat(&mut self, table: ColorTable) -> FillColors {
        self.applied = FillColors::flat(table.default_color());
        self.style = Some(FillStyle::Flat(table));
        self.applied
    }

    /// Configure a gradient fill from two stop tables. The defaults of
    /// both tables are applied immediately.
    pub fn set_gradient(&mut self, start: ColorTable, end: ColorTable) -> FillColors {
        self.applied = FillColors::gradient(start.default_color(), end.default_color());
        self.style = Some(FillStyle::Gradient { start, end });
        self.applied
    }

    /// Configure a fixed color that does not react to state changes.
    /// [`resolve`] becomes a permanent no-op until restyled.
    ///
    /// [`resolve`]: FillResolver::resolve
    pub fn set_static(&mut self, color: Color) -> FillColors {
        self.applied = FillColors::flat(color);
        self.style = None;
        self.applied
    }

    /// Resolve the configured style for `state`.
    ///
    /// Returns `Some` with the freshly applied colors when they differ
    /// from the current fill, `None` when nothing changed (or no style is
    /// configured). Repeated calls with the same state settle after the
    /// first: once a change has been signaled, the applied snapshot is
    /// up to date and resolving again returns `None`.
    ///
    /// Gradient change detection compares only the start stop. An update
    /// that alters solely the end stop is not signaled; the stale end
    /// color is corrected the next time the start stop moves.
    pub fn resolve(&mut self, state: InteractionState) -> Option<FillColors> {
        let style = self.style.as_ref()?;
        match style {
            FillStyle::Flat(table) => {
                let color = table.resolve(state);
                if color == self.applied.start {
                    return None;
                }
                self.applied = FillColors::flat(color);
            }
            FillStyle::Gradient { start, end } => {
                let start_color = start.resolve(state);
                if start_color == self.applied.start {
                    return None;
                }
                self.applied = FillColors::gradient(start_color, end.resolve(state));
            }
        }
        Some(self.applied)
    }

    /// The colors currently applied to the surface.
    pub fn applied(&self) -> FillColors {
        self.applied
    }

    /// The configured style, if any.
    pub fn style(&self) -> Option<&FillStyle> {
        self.style.as_ref()
    }

    /// Whether the configured style is a gradient.
    pub fn is_gradient(&self) -> bool {
        matches!(self.style, Some(FillStyle::Gradient { .. }))
    }
}

impl Default for FillResolver {
    fn default() -> Self {
        Self::new()
    }
}
