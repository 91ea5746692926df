//! The [RoundButton] widget.

use vello::kurbo::Affine;
use vello::peniko::Color;

use rondo_style::corner::{CornerPolicy, RenderBounds};
use rondo_style::fill::FillResolver;
use rondo_style::state::InteractionState;
use rondo_style::table::ColorTable;

use crate::background::{RoundBackground, StrokeStyle};
use crate::catalog::ColorTableSource;
use crate::config::{RoundButtonConfig, DEFAULT_PRESSED_RATIO};
use crate::error::{WidgetError, WidgetResult};
use crate::event::PointerEvent;
use crate::vgi::Graphics;

// Ratios at or below this threshold mean "no derived pressed state".
const RATIO_EPSILON: f32 = 1e-4;

/// The neutral gray (`#c6cbd7`) applied to both gradient stops when a
/// button is disabled.
fn disabled_fill() -> Color {
    Color::from_rgb8(0xc6, 0xcb, 0xd7)
}

#[derive(Debug, Clone)]
struct GradientPair {
    start: ColorTable,
    end: ColorTable,
}

/// A button with a rounded or stadium-shaped background, an optional
/// outline and a pressed-state color shift.
///
/// ### Fill behavior
/// The fill reacts to the interaction state depending on how it was
/// supplied:
/// - a stateful color table is used verbatim.
/// - a plain color gets an automatically derived pressed variant, its
///   HSV value channel scaled by the pressed ratio.
/// - with a pressed ratio of (near) zero the fill is static and ignores
///   state changes entirely.
///
/// Pointer handling is host-driven: feed [PointerEvent]s through
/// [RoundButton::pointer] and repaint whenever it returns `true`. On
/// release or cancel the button reasserts its configured gradient, so a
/// disable/enable toggle that changed the base colors mid-press cannot
/// leave a stale fill behind.
#[derive(Debug, Clone)]
pub struct RoundButton {
    background: RoundBackground,
    pressed_ratio: f32,
    state: InteractionState,
    enabled: bool,
    gradient: Option<GradientPair>,
}

impl RoundButton {
    /// Create a button with the default configuration: transparent,
    /// square-cornered, strokeless, with a pressed ratio of
    /// [DEFAULT_PRESSED_RATIO].
    pub fn new() -> Self {
        let mut button = Self {
            background: RoundBackground::new(),
            pressed_ratio: DEFAULT_PRESSED_RATIO,
            state: InteractionState::default(),
            enabled: true,
            gradient: None,
        };
        button.install_flat(ColorTable::default());
        button
    }

    /// Build a button from a parsed configuration.
    pub fn from_config(config: &RoundButtonConfig) -> WidgetResult<Self> {
        let mut button = Self::new();
        button.pressed_ratio = config.pressed_ratio;
        button.background.set_corner_policy(config.corner_policy());
        button.background.set_stroke(config.stroke_style());
        button.install_flat(config.fill_table()?);
        Ok(button)
    }

    /// Set the ratio used to derive pressed colors. Applies to fills
    /// supplied afterwards, so set it before the fill.
    pub fn with_pressed_ratio(mut self, ratio: f32) -> Self {
        self.pressed_ratio = ratio;
        self
    }

    /// Set the corner policy.
    pub fn with_corner_policy(mut self, policy: CornerPolicy) -> Self {
        self.background.set_corner_policy(policy);
        self
    }

    /// Set the outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.background.set_stroke(Some(stroke));
        self
    }

    /// Set the flat fill.
    pub fn with_fill(mut self, table: ColorTable) -> Self {
        self.set_fill(table);
        self
    }

    /// Set a gradient fill.
    pub fn with_gradient(
        mut self,
        start: ColorTable,
        end: ColorTable,
        darken_pressed: bool,
    ) -> Self {
        self.set_gradient(start, end, darken_pressed);
        self
    }

    /// Replace the fill with a flat color table.
    ///
    /// A stateful table is installed verbatim. A stateless one gets a
    /// derived pressed entry, unless the pressed ratio is (near) zero,
    /// in which case the fill becomes static.
    pub fn set_fill(&mut self, table: ColorTable) {
        self.install_flat(table);
    }

    /// Replace the fill with a named table from `source`.
    pub fn set_fill_named(
        &mut self,
        source: &dyn ColorTableSource,
        name: &str,
    ) -> WidgetResult<()> {
        let table = self.lookup(source, name)?;
        self.install_flat(table);
        Ok(())
    }

    /// Replace the fill with a two-stop horizontal gradient.
    ///
    /// With `darken_pressed` both stops get automatically derived
    /// pressed variants of their default colors; explicit per-state
    /// entries in the supplied tables are ignored in that case. Without
    /// it the tables are used verbatim.
    pub fn set_gradient(&mut self, start: ColorTable, end: ColorTable, darken_pressed: bool) {
        let (start, end) = if darken_pressed {
            (
                ColorTable::auto_pressed(start.default_color(), self.pressed_ratio),
                ColorTable::auto_pressed(end.default_color(), self.pressed_ratio),
            )
        } else {
            (start, end)
        };
        self.gradient = Some(GradientPair {
            start: start.clone(),
            end: end.clone(),
        });
        self.background.fill_mut().set_gradient(start, end);
        self.background.set_state(self.state);
    }

    /// Replace the fill with a gradient built from two named tables.
    /// Fails without touching the fill if either name is unknown.
    pub fn set_gradient_named(
        &mut self,
        source: &dyn ColorTableSource,
        start_name: &str,
        end_name: &str,
        darken_pressed: bool,
    ) -> WidgetResult<()> {
        let start = self.lookup(source, start_name)?;
        let end = self.lookup(source, end_name)?;
        self.set_gradient(start, end, darken_pressed);
        Ok(())
    }

    /// Set a fixed corner radius.
    ///
    /// Returns whether the effective radius changed.
    pub fn set_corner_radius(&mut self, radius: f32) -> bool {
        self.background.set_corner_policy(CornerPolicy::Fixed(radius))
    }

    /// Replace the corner policy.
    ///
    /// Returns whether the effective radius changed.
    pub fn set_corner_policy(&mut self, policy: CornerPolicy) -> bool {
        self.background.set_corner_policy(policy)
    }

    /// Update the render bounds; a stadium button recomputes its radius.
    ///
    /// Returns whether the effective radius changed.
    pub fn set_bounds(&mut self, bounds: RenderBounds) -> bool {
        self.background.set_bounds(bounds)
    }

    /// Enable or disable the button.
    ///
    /// Disabling cancels any in-progress press, ignores pointer events
    /// from then on and forces both gradient stops to the neutral gray
    /// `#c6cbd7` with no pressed darkening. Re-enabling does not restore
    /// the previous colors; supply a fill again to recolor the button.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            log::debug!("RoundButton: disabled, forcing the neutral fill");
            self.state = InteractionState::Normal;
            let gray = ColorTable::solid(disabled_fill());
            self.set_gradient(gray.clone(), gray, false);
        }
    }

    /// Feed a pointer event to the button.
    ///
    /// Returns whether the applied fill changed, i.e. whether the host
    /// needs to repaint. A disabled button ignores pointer events.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        if !self.enabled {
            return false;
        }
        if event.ends_press() {
            let reasserted = self.reassert_gradient();
            self.state = InteractionState::Normal;
            let resolved = self.background.set_state(self.state);
            reasserted || resolved
        } else {
            self.state = InteractionState::Pressed;
            self.background.set_state(self.state)
        }
    }

    /// Paint the button at the origin of `transform`.
    pub fn render(&self, graphics: &mut dyn Graphics, transform: Affine) {
        self.background.paint(graphics, transform);
    }

    /// The background surface, for inspecting bounds, radius and fill.
    pub fn background(&self) -> &RoundBackground {
        &self.background
    }

    /// The fill resolver owning the button's colors.
    pub fn fill(&self) -> &FillResolver {
        self.background.fill()
    }

    /// The current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Whether the button reacts to pointer events.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The ratio used to derive pressed colors.
    pub fn pressed_ratio(&self) -> f32 {
        self.pressed_ratio
    }

    fn install_flat(&mut self, table: ColorTable) {
        let fill = self.background.fill_mut();
        if table.is_stateful() {
            fill.set_flat(table);
        } else if self.pressed_ratio > RATIO_EPSILON {
            fill.set_flat(ColorTable::auto_pressed(
                table.default_color(),
                self.pressed_ratio,
            ));
        } else {
            fill.set_static(table.default_color());
        }
        self.gradient = None;
        self.background.set_state(self.state);
    }

    fn reassert_gradient(&mut self) -> bool {
        match &self.gradient {
            Some(pair) => {
                let (start, end) = (pair.start.clone(), pair.end.clone());
                self.background.fill_mut().set_gradient(start, end);
                true
            }
            None => false,
        }
    }

    fn lookup(&self, source: &dyn ColorTableSource, name: &str) -> WidgetResult<ColorTable> {
        source.color_table(name).ok_or_else(|| {
            log::warn!("RoundButton: no color table named '{name}'");
            WidgetError::unknown_color_table(name)
        })
    }
}

impl Default for RoundButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorCatalog;
    use rondo_style::color::pressed_variant;

    fn two_state(normal: Color, pressed: Color) -> ColorTable {
        ColorTable::solid(normal).with_state(InteractionState::Pressed, pressed)
    }

    #[test]
    fn default_button_gives_pressed_feedback_on_transparency() {
        let mut button = RoundButton::new();
        assert_eq!(button.fill().applied().start, Color::TRANSPARENT);

        assert!(button.pointer(PointerEvent::Down));
        // Transparent maps through the gray stand-in before darkening.
        assert_eq!(
            button.fill().applied().start,
            Color::from_rgba8(0x66, 0x66, 0x66, 0x22)
        );

        assert!(button.pointer(PointerEvent::Up));
        assert_eq!(button.fill().applied().start, Color::TRANSPARENT);
    }

    #[test]
    fn stateful_fills_are_used_verbatim() {
        let mut button = RoundButton::new();
        button.set_fill(two_state(Color::WHITE, Color::BLACK));

        assert!(button.pointer(PointerEvent::Down));
        assert_eq!(button.fill().applied().start, Color::BLACK);

        // Holding the press resolves to the same color: no repaint.
        assert!(!button.pointer(PointerEvent::Down));

        assert!(button.pointer(PointerEvent::Cancel));
        assert_eq!(button.fill().applied().start, Color::WHITE);
    }

    #[test]
    fn plain_fills_get_a_derived_pressed_variant() {
        let base = Color::from_rgb8(0x33, 0x66, 0x99);
        let mut button = RoundButton::new();
        button.set_fill(ColorTable::solid(base));

        assert!(button.pointer(PointerEvent::Down));
        assert_eq!(
            button.fill().applied().start,
            pressed_variant(base, DEFAULT_PRESSED_RATIO)
        );
    }

    #[test]
    fn near_zero_ratio_makes_the_fill_static() {
        let base = Color::from_rgb8(0x33, 0x66, 0x99);
        let mut button = RoundButton::new().with_pressed_ratio(0.0);
        button.set_fill(ColorTable::solid(base));

        assert!(!button.pointer(PointerEvent::Down));
        assert_eq!(button.fill().applied().start, base);
        assert!(!button.pointer(PointerEvent::Up));
    }

    #[test]
    fn installing_a_fill_while_pressed_applies_the_pressed_color() {
        let mut button = RoundButton::new();
        button.pointer(PointerEvent::Down);

        button.set_fill(two_state(Color::WHITE, Color::BLACK));
        assert_eq!(button.fill().applied().start, Color::BLACK);
    }

    #[test]
    fn disabling_forces_the_neutral_gray_and_ignores_pointers() {
        let gray = Color::from_rgb8(0xc6, 0xcb, 0xd7);
        let mut button = RoundButton::new();
        button.set_gradient(
            ColorTable::solid(Color::from_rgb8(0xff, 0x00, 0x00)),
            ColorTable::solid(Color::from_rgb8(0x00, 0x00, 0xff)),
            true,
        );

        button.set_enabled(false);
        assert!(!button.is_enabled());
        assert_eq!(button.fill().applied().start, gray);
        assert_eq!(button.fill().applied().end, Some(gray));

        // No darkening while disabled, and no pointer reaction at all.
        assert!(!button.pointer(PointerEvent::Down));
        assert_eq!(button.fill().applied().start, gray);
        assert_eq!(button.state(), InteractionState::Normal);
    }

    #[test]
    fn disabling_cancels_an_in_progress_press() {
        let mut button = RoundButton::new();
        button.set_fill(two_state(Color::WHITE, Color::BLACK));
        button.pointer(PointerEvent::Down);
        assert_eq!(button.state(), InteractionState::Pressed);

        button.set_enabled(false);
        assert_eq!(button.state(), InteractionState::Normal);
    }

    #[test]
    fn reenabling_does_not_restore_the_previous_fill() {
        let gray = Color::from_rgb8(0xc6, 0xcb, 0xd7);
        let mut button = RoundButton::new();
        button.set_fill(ColorTable::solid(Color::WHITE));
        button.set_enabled(false);
        button.set_enabled(true);

        assert!(button.is_enabled());
        assert_eq!(button.fill().applied().start, gray);

        // The caller recolors explicitly.
        button.set_fill(ColorTable::solid(Color::WHITE));
        assert_eq!(button.fill().applied().start, Color::WHITE);
        assert_eq!(button.fill().applied().end, None);
    }

    #[test]
    fn release_reasserts_the_configured_gradient() {
        let mut button = RoundButton::new();
        button.set_gradient(
            ColorTable::solid(Color::from_rgb8(0xff, 0x00, 0x00)),
            ColorTable::solid(Color::from_rgb8(0x00, 0x00, 0xff)),
            true,
        );
        button.pointer(PointerEvent::Down);

        // The configuration changes while the press is held.
        button.set_gradient(
            ColorTable::solid(Color::WHITE),
            ColorTable::solid(Color::BLACK),
            false,
        );

        assert!(button.pointer(PointerEvent::Up));
        assert_eq!(button.fill().applied().start, Color::WHITE);
        assert_eq!(button.fill().applied().end, Some(Color::BLACK));
    }

    #[test]
    fn darkened_gradients_derive_both_stops() {
        let start = Color::from_rgb8(0xff, 0x00, 0x00);
        let end = Color::from_rgb8(0x00, 0x00, 0xff);
        let mut button = RoundButton::new();
        button.set_gradient(ColorTable::solid(start), ColorTable::solid(end), true);

        assert!(button.pointer(PointerEvent::Down));
        let applied = button.fill().applied();
        assert_eq!(applied.start, pressed_variant(start, DEFAULT_PRESSED_RATIO));
        assert_eq!(
            applied.end,
            Some(pressed_variant(end, DEFAULT_PRESSED_RATIO))
        );
    }

    #[test]
    fn named_fills_come_from_the_catalog() {
        let catalog = ColorCatalog::new()
            .with_table("primary", ColorTable::solid(Color::from_rgb8(0x33, 0x66, 0x99)))
            .with_table("accent", ColorTable::solid(Color::from_rgb8(0xc8, 0x14, 0x3c)));

        let mut button = RoundButton::new();
        button.set_fill_named(&catalog, "primary").unwrap();
        assert_eq!(
            button.fill().applied().start,
            Color::from_rgb8(0x33, 0x66, 0x99)
        );

        button
            .set_gradient_named(&catalog, "primary", "accent", false)
            .unwrap();
        assert_eq!(
            button.fill().applied().end,
            Some(Color::from_rgb8(0xc8, 0x14, 0x3c))
        );
    }

    #[test]
    fn unknown_names_error_without_touching_the_fill() {
        let catalog = ColorCatalog::new()
            .with_table("primary", ColorTable::solid(Color::WHITE));

        let mut button = RoundButton::new();
        button.set_fill_named(&catalog, "primary").unwrap();

        let err = button.set_fill_named(&catalog, "missing").unwrap_err();
        assert!(matches!(err, WidgetError::UnknownColorTable { .. }));
        assert_eq!(button.fill().applied().start, Color::WHITE);

        // Gradient lookup is all-or-nothing.
        let err = button
            .set_gradient_named(&catalog, "primary", "missing", false)
            .unwrap_err();
        assert!(matches!(err, WidgetError::UnknownColorTable { .. }));
        assert!(!button.fill().is_gradient());
    }

    #[test]
    fn corner_setters_drive_the_background() {
        let mut button = RoundButton::new();
        button.set_bounds(RenderBounds::new(100.0, 40.0));

        assert!(button.set_corner_radius(8.0));
        assert_eq!(button.background().corner_radius(), 8.0);

        assert!(button.set_corner_policy(CornerPolicy::Stadium));
        assert_eq!(button.background().corner_radius(), 20.0);

        assert!(button.set_bounds(RenderBounds::new(60.0, 80.0)));
        assert_eq!(button.background().corner_radius(), 30.0);
    }
}
