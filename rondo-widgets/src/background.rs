//! The round-rect background surface shared by stadium-shaped widgets.

use vello::kurbo::{Affine, Point, Rect, RoundedRect, RoundedRectRadii, Stroke};
use vello::peniko::{Brush, Color, Fill, Gradient};

use rondo_style::corner::{CornerPolicy, RenderBounds};
use rondo_style::fill::FillResolver;
use rondo_style::state::InteractionState;

use crate::vgi::{shape_to_path, Graphics};

/// Outline styling for a [`RoundBackground`].
///
/// A zero `dash_width` draws a solid outline; a positive one draws
/// dashes of that length separated by `dash_gap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Outline color.
    pub color: Color,
    /// Outline width in logical pixels.
    pub width: f32,
    /// Length of each dash, or `0.0` for a solid line.
    pub dash_width: f32,
    /// Gap between dashes.
    pub dash_gap: f32,
}

impl StrokeStyle {
    /// Create a solid outline.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash_width: 0.0,
            dash_gap: 0.0,
        }
    }

    /// Make the outline dashed.
    pub fn with_dashes(mut self, dash_width: f32, dash_gap: f32) -> Self {
        self.dash_width = dash_width;
        self.dash_gap = dash_gap;
        self
    }

    fn to_stroke(self) -> Stroke {
        let stroke = Stroke::new(self.width as f64);
        if self.dash_width > 0.0 {
            stroke.with_dashes(0.0, [self.dash_width as f64, self.dash_gap as f64])
        } else {
            stroke
        }
    }
}

/// A rounded-rectangle surface with a state-resolved fill and an
/// optional outline.
///
/// The effective corner radius is recomputed whenever the bounds or the
/// corner policy change, so a [`CornerPolicy::Stadium`] background is
/// never stale relative to its last known bounds. Painting itself is a
/// pure read: it draws whatever fill is currently applied.
#[derive(Debug, Clone)]
pub struct RoundBackground {
    bounds: RenderBounds,
    corner: CornerPolicy,
    radius: f32,
    stroke: Option<StrokeStyle>,
    fill: FillResolver,
}

impl RoundBackground {
    /// Create a background with zero bounds, square corners, no outline
    /// and a transparent fill.
    pub fn new() -> Self {
        Self {
            bounds: RenderBounds::default(),
            corner: CornerPolicy::default(),
            radius: 0.0,
            stroke: None,
            fill: FillResolver::new(),
        }
    }

    /// Update the render bounds, recomputing the corner radius.
    ///
    /// Returns whether the effective radius changed.
    pub fn set_bounds(&mut self, bounds: RenderBounds) -> bool {
        self.bounds = bounds;
        self.refresh_radius()
    }

    /// Replace the corner policy, recomputing the corner radius.
    ///
    /// Returns whether the effective radius changed.
    pub fn set_corner_policy(&mut self, corner: CornerPolicy) -> bool {
        self.corner = corner;
        self.refresh_radius()
    }

    /// Re-resolve the fill for `state`.
    ///
    /// Returns whether the applied fill changed, i.e. whether the caller
    /// needs to repaint.
    pub fn set_state(&mut self, state: InteractionState) -> bool {
        self.fill.resolve(state).is_some()
    }

    /// Replace the outline. `None` removes it.
    pub fn set_stroke(&mut self, stroke: Option<StrokeStyle>) {
        self.stroke = stroke;
    }

    /// The current render bounds.
    pub fn bounds(&self) -> RenderBounds {
        self.bounds
    }

    /// The corner policy in effect.
    pub fn corner_policy(&self) -> CornerPolicy {
        self.corner
    }

    /// The effective corner radius for the current bounds.
    pub fn corner_radius(&self) -> f32 {
        self.radius
    }

    /// The current outline, if any.
    pub fn stroke(&self) -> Option<&StrokeStyle> {
        self.stroke.as_ref()
    }

    /// The fill resolver owning this surface's colors.
    pub fn fill(&self) -> &FillResolver {
        &self.fill
    }

    /// Mutable access to the fill resolver.
    pub fn fill_mut(&mut self) -> &mut FillResolver {
        &mut self.fill
    }

    /// Paint the surface at the origin of `transform`.
    ///
    /// Degenerate bounds paint nothing. Gradients run horizontally from
    /// the left edge to the right edge.
    pub fn paint(&self, graphics: &mut dyn Graphics, transform: Affine) {
        if self.bounds.is_empty() {
            return;
        }

        let rect = Rect::new(
            0.0,
            0.0,
            self.bounds.width as f64,
            self.bounds.height as f64,
        );
        let shape = RoundedRect::from_rect(
            rect,
            RoundedRectRadii::from_single_radius(self.radius as f64),
        );
        let path = shape_to_path(&shape);

        let colors = self.fill.applied();
        let brush = match colors.end {
            Some(end) => Brush::Gradient(
                Gradient::new_linear(
                    Point::new(rect.x0, rect.center().y),
                    Point::new(rect.x1, rect.center().y),
                )
                .with_stops([(0.0, colors.start), (1.0, end)]),
            ),
            None => Brush::Solid(colors.start),
        };
        graphics.fill(Fill::NonZero, transform, &brush, None, &path);

        if let Some(stroke) = self.stroke {
            if stroke.width > 0.0 {
                graphics.stroke(
                    &stroke.to_stroke(),
                    transform,
                    &Brush::Solid(stroke.color),
                    None,
                    &path,
                );
            }
        }
    }

    fn refresh_radius(&mut self) -> bool {
        let radius = self.corner.radius_for(self.bounds);
        let changed = radius != self.radius;
        self.radius = radius;
        changed
    }
}

impl Default for RoundBackground {
    fn default() -> Self {
        Self::new()
    }
}
