#![warn(missing_docs)]

//! Widget library for rondo => See `rondo` crate.
//!
//! Contains the stadium-shaped [button::RoundButton] and the pieces it
//! is built from: the paintable [background::RoundBackground], the
//! declarative [config::RoundButtonConfig] and the rendering seam in
//! [vgi].

/// Contains the [background::RoundBackground] surface.
pub mod background;

/// Contains the [button::RoundButton] widget.
pub mod button;

/// Contains the [catalog::ColorCatalog] of named color tables.
pub mod catalog;

/// Contains the [config::RoundButtonConfig] struct.
pub mod config;

/// Contains the [error::WidgetError] type.
pub mod error;

/// Contains the [event::PointerEvent] enum.
pub mod event;

/// Contains the vector graphics interface abstraction.
pub mod vgi;
