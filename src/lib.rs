#![warn(missing_docs)]

//! Stadium-shaped buttons for vello-based user interfaces.

pub use vello::peniko as color;

pub use rondo_style as style;
pub use rondo_widgets as widgets;

/// A "prelude" for users of rondo.
///
/// Importing this module brings into scope everything needed to
/// configure, drive and paint a round button.
///
/// ```rust
/// use rondo::prelude::*;
/// ```
pub mod prelude {
    // Styling
    pub use crate::style::color::{grayscale, pressed_variant};
    pub use crate::style::corner::{CornerPolicy, RenderBounds};
    pub use crate::style::fill::{FillColors, FillResolver, FillStyle};
    pub use crate::style::state::InteractionState;
    pub use crate::style::table::ColorTable;

    // Color
    pub use crate::color::Color;

    // Widgets
    pub use crate::widgets::background::{RoundBackground, StrokeStyle};
    pub use crate::widgets::button::RoundButton;
    pub use crate::widgets::catalog::{ColorCatalog, ColorTableSource};
    pub use crate::widgets::config::RoundButtonConfig;
    pub use crate::widgets::event::PointerEvent;
    pub use crate::widgets::vgi::{
        vello_vg::{DefaultGraphics, VelloGraphics},
        Graphics,
    };
}
