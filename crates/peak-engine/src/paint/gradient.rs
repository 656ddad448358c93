use serde::{Deserialize, Serialize};

use crate::coords::{CoordSpace, Vec2};

use super::{ColorPalette, ColorRef};

/// A single gradient stop.
///
/// `offset` is a percentage along the gradient axis, expected in [0, 100].
/// Stops are not sorted; surfaces honor declaration order.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub offset: f64,
    pub color_ref: ColorRef,
}

impl GradientStop {
    #[inline]
    pub const fn new(offset: f64, color_ref: ColorRef) -> Self {
        Self { offset, color_ref }
    }
}

/// Gradient type plus its optional geometry parameters.
///
/// Defaults are applied when resolving, never stored:
/// - linear `angle`: 0 (top-to-bottom)
/// - radial `cx`, `cy`: 50, 50 (center of the space)
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GradientKind {
    Linear {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        angle: Option<f64>,
    },
    Radial {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cx: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cy: Option<f64>,
    },
}

/// Declarative gradient definition, referenced by shapes through `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientDef {
    pub id: String,
    #[serde(flatten)]
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

impl GradientDef {
    pub fn linear(id: impl Into<String>, angle: Option<f64>, stops: Vec<GradientStop>) -> Self {
        Self { id: id.into(), kind: GradientKind::Linear { angle }, stops }
    }

    pub fn radial(
        id: impl Into<String>,
        cx: Option<f64>,
        cy: Option<f64>,
        stops: Vec<GradientStop>,
    ) -> Self {
        Self { id: id.into(), kind: GradientKind::Radial { cx, cy }, stops }
    }
}

/// Axis of a linear gradient in coordinate-space units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearAxis {
    pub start: Vec2,
    pub end: Vec2,
}

impl LinearAxis {
    #[inline]
    pub fn x1(&self) -> f64 {
        self.start.x
    }

    #[inline]
    pub fn y1(&self) -> f64 {
        self.start.y
    }

    #[inline]
    pub fn x2(&self) -> f64 {
        self.end.x
    }

    #[inline]
    pub fn y2(&self) -> f64 {
        self.end.y
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) / 2.0
    }
}

/// Sine and cosine of an angle in degrees, exact at quarter turns.
fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let d = degrees.rem_euclid(360.0);
    if d == 0.0 {
        (0.0, 1.0)
    } else if d == 90.0 {
        (1.0, 0.0)
    } else if d == 180.0 {
        (0.0, -1.0)
    } else if d == 270.0 {
        (-1.0, 0.0)
    } else {
        d.to_radians().sin_cos()
    }
}

/// Resolves a gradient angle into an axis through the center of `space`.
///
/// Angle convention:
/// - `0` runs top-to-bottom
/// - `90` runs left-to-right
/// - `180` runs bottom-to-top
///
/// The endpoints sit at the center displaced by `∓direction`, scaled by half
/// the space width on X and half the height on Y. Any finite angle is accepted;
/// values wrap every 360 degrees.
pub fn resolve_linear_axis(angle_deg: f64, space: CoordSpace) -> LinearAxis {
    let center = space.center();
    let (sin, cos) = sin_cos_degrees(angle_deg);
    let reach = Vec2::new(sin * center.x, cos * center.y);

    LinearAxis { start: center - reach, end: center + reach }
}

/// Resolved gradient geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientGeometry {
    Linear(LinearAxis),
    Radial { center: Vec2, radius: f64 },
}

/// Gradient stop with the palette color substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStop {
    /// Percentage along the axis, passed through unchanged.
    pub offset: f64,
    pub color: String,
    /// Opacity as a fraction (`opacity / 100`).
    pub opacity: f64,
}

/// Gradient ready for a surface: absolute geometry in coordinate space
/// (not relative to any shape's bounding box) and concrete stop colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGradient {
    pub id: String,
    pub geometry: GradientGeometry,
    pub stops: Vec<ResolvedStop>,
}

impl ResolvedGradient {
    /// Returns true when geometry and stops are all finite.
    pub fn is_finite(&self) -> bool {
        let geometry = match self.geometry {
            GradientGeometry::Linear(axis) => axis.start.is_finite() && axis.end.is_finite(),
            GradientGeometry::Radial { center, radius } => center.is_finite() && radius.is_finite(),
        };
        geometry && self.stops.iter().all(|s| s.offset.is_finite() && s.opacity.is_finite())
    }
}

/// Resolves one definition against `palette` within `space`.
pub fn resolve_gradient(def: &GradientDef, palette: &ColorPalette, space: CoordSpace) -> ResolvedGradient {
    let geometry = match def.kind {
        GradientKind::Linear { angle } => {
            GradientGeometry::Linear(resolve_linear_axis(angle.unwrap_or(0.0), space))
        }
        GradientKind::Radial { cx, cy } => GradientGeometry::Radial {
            center: Vec2::new(space.percent_x(cx.unwrap_or(50.0)), space.percent_y(cy.unwrap_or(50.0))),
            radius: space.width.max(space.height) / 2.0,
        },
    };

    let stops = def
        .stops
        .iter()
        .map(|stop| ResolvedStop {
            offset: stop.offset,
            color: palette.resolve(stop.color_ref.color).to_owned(),
            opacity: stop.color_ref.opacity / 100.0,
        })
        .collect();

    ResolvedGradient { id: def.id.clone(), geometry, stops }
}
