use super::Vec2;

/// Dimensions of the drawing space in coordinate units.
///
/// All shape and gradient math happens in this space. The normalized
/// 100 × 100 square is the only space the presets are tuned for, but any
/// positive size is accepted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordSpace {
    pub width: f64,
    pub height: f64,
}

impl CoordSpace {
    pub const NORMALIZED: CoordSpace = CoordSpace::new(100.0, 100.0);

    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Converts a horizontal percentage into absolute units.
    #[inline]
    pub fn percent_x(self, pct: f64) -> f64 {
        pct / 100.0 * self.width
    }

    /// Converts a vertical percentage into absolute units.
    #[inline]
    pub fn percent_y(self, pct: f64) -> f64 {
        pct / 100.0 * self.height
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

impl Default for CoordSpace {
    fn default() -> Self {
        Self::NORMALIZED
    }
}
