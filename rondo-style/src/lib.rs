#![warn(missing_docs)]

//! # Rondo Styling
//!
//! State-aware colors and round-rect geometry for the rondo widgets.
//! This crate is host-agnostic: it computes colors and radii but never
//! touches a scene graph.
//!
//! ## Overview
//!
//! - **[ColorTable](table::ColorTable)**: per-interaction-state colors
//!   with an unconditional default
//! - **[pressed_variant](color::pressed_variant)**: HSV-space darkening
//!   used to derive pressed colors
//! - **[FillResolver](fill::FillResolver)**: resolves flat or gradient
//!   fills against the current state and signals real changes only
//! - **[CornerPolicy](corner::CornerPolicy)**: fixed corner radius or
//!   the bounds-tracking stadium shape
//!
//! ## Quick Start
//!
//! ```rust
//! use rondo_style::color::pressed_variant;
//! use rondo_style::state::InteractionState;
//! use rondo_style::table::ColorTable;
//! use vello::peniko::Color;
//!
//! let base = Color::from_rgb8(0x33, 0x66, 0x99);
//! let table = ColorTable::auto_pressed(base, 0.8);
//!
//! assert_eq!(table.resolve(InteractionState::Normal), base);
//! assert_eq!(
//!     table.resolve(InteractionState::Pressed),
//!     pressed_variant(base, 0.8),
//! );
//! ```

/// Contains color derivation helpers such as [color::pressed_variant].
pub mod color;
/// Contains the [corner::CornerPolicy] and [corner::RenderBounds] types.
pub mod corner;
/// Contains the [error::StyleError] type.
pub mod error;
/// Contains the [fill::FillResolver] for state-driven fill resolution.
pub mod fill;
/// Contains serde helpers for hex-encoded color fields.
pub mod serde_color;
/// Contains the [state::InteractionState] enum.
pub mod state;
/// Contains the [table::ColorTable] struct.
pub mod table;
