//! Vector Graphics Interface abstraction.
//!
//! This module provides an abstraction over rendering backends, allowing
//! widgets to be decoupled from the specific rendering implementation
//! (e.g., Vello). It also keeps widget logic testable: tests drive
//! widgets against a recording implementation instead of a GPU scene.

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill};

/// A trait for rendering vector graphics.
///
/// Note: Methods use `&BezPath` for object-safety. To use concrete shape
/// types (Rect, RoundedRect, etc.), convert them to BezPath using
/// [`shape_to_path`].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );
}

/// Helper function to convert a shape to BezPath for use with Graphics.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;
