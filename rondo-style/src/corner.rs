//! Round-rect geometry: render bounds and the corner-radius policy.

/// Dimensions of the rectangle a widget is rendered into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderBounds {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl RenderBounds {
    /// Create bounds with explicit width and height.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convenience helper for square bounds.
    pub fn square(size: f32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// The shorter of the two dimensions.
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Whether the bounds enclose a drawable area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for RenderBounds {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// How the corner radius of a round background is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerPolicy {
    /// A fixed radius in logical pixels, independent of the bounds.
    Fixed(f32),
    /// Half the shorter bound dimension, so opposing corners meet and the
    /// shape becomes a stadium (a capsule). Recomputed on every bounds
    /// change.
    Stadium,
}

impl CornerPolicy {
    /// Map a configured pixel radius to a policy. The sentinel `-1`
    /// selects the stadium shape; everything else is a fixed radius.
    pub fn from_px(radius: i32) -> Self {
        if radius == -1 {
            Self::Stadium
        } else {
            Self::Fixed(radius as f32)
        }
    }

    /// The effective radius for the given bounds.
    ///
    /// Calling this again with identical bounds yields the identical
    /// radius; there is no accumulated state.
    pub fn radius_for(&self, bounds: RenderBounds) -> f32 {
        match self {
            Self::Fixed(radius) => *radius,
            Self::Stadium => bounds.min_side() / 2.0,
        }
    }

    /// Whether this policy tracks the bounds.
    pub fn is_stadium(&self) -> bool {
        matches!(self, Self::Stadium)
    }
}

impl Default for CornerPolicy {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_radius_ignores_bounds() {
        let policy = CornerPolicy::Fixed(7.5);
        assert_eq!(policy.radius_for(RenderBounds::new(100.0, 40.0)), 7.5);
        assert_eq!(policy.radius_for(RenderBounds::default()), 7.5);
    }

    #[test]
    fn stadium_radius_is_half_the_shorter_side() {
        let policy = CornerPolicy::Stadium;
        assert_eq!(policy.radius_for(RenderBounds::new(100.0, 40.0)), 20.0);
        assert_eq!(policy.radius_for(RenderBounds::new(40.0, 100.0)), 20.0);
        assert_eq!(policy.radius_for(RenderBounds::square(64.0)), 32.0);
    }

    #[test]
    fn stadium_radius_tracks_bounds_changes() {
        // 100x40 -> 20.0, then 60x80 -> 30.0; no stale radius survives.
        let policy = CornerPolicy::Stadium;
        assert_eq!(policy.radius_for(RenderBounds::new(100.0, 40.0)), 20.0);
        assert_eq!(policy.radius_for(RenderBounds::new(60.0, 80.0)), 30.0);
        assert_eq!(policy.radius_for(RenderBounds::new(60.0, 80.0)), 30.0);
    }

    #[test]
    fn stadium_radius_of_empty_bounds_is_zero() {
        assert_eq!(CornerPolicy::Stadium.radius_for(RenderBounds::default()), 0.0);
        assert_eq!(
            CornerPolicy::Stadium.radius_for(RenderBounds::new(0.0, 30.0)),
            0.0
        );
    }

    #[test]
    fn only_minus_one_selects_the_stadium() {
        assert!(CornerPolicy::from_px(-1).is_stadium());
        assert_eq!(CornerPolicy::from_px(0), CornerPolicy::Fixed(0.0));
        assert_eq!(CornerPolicy::from_px(12), CornerPolicy::Fixed(12.0));
        assert_eq!(CornerPolicy::from_px(-2), CornerPolicy::Fixed(-2.0));
    }
}
