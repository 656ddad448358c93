use serde::{Deserialize, Serialize};

/// Geometry of one layer before a gradient is attached.
///
/// This is the entry type of the preset tables; the layer scaler turns it into
/// a [`ShapeParams`] by scaling `peak_height`/`pointiness` and assigning a
/// gradient reference by layer index.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseLayer {
    pub width: f64,
    pub height: f64,
    pub peak_height: f64,
    pub pointiness: f64,
    pub baseline: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
}

impl BaseLayer {
    pub fn with_gradient(self, gradient_ref: impl Into<String>) -> ShapeParams {
        ShapeParams {
            width: self.width,
            height: self.height,
            peak_height: self.peak_height,
            pointiness: self.pointiness,
            baseline: self.baseline,
            gradient_ref: gradient_ref.into(),
            blur: self.blur,
        }
    }
}

/// One layer's arch definition.
///
/// Units:
/// - `width`, `height`: percent of the coordinate space; may exceed 100 so the
///   shape overflows the space and its flanks get clipped
/// - `peak_height`: percent of the shape's own height the apex rises above the baseline
/// - `pointiness`: 0 = fully rounded apex, 100 = sharp corner
/// - `baseline`: percent of space height between the shape bottom and the space bottom
/// - `blur`: Gaussian blur radius; 0 or absent = none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeParams {
    pub width: f64,
    pub height: f64,
    pub peak_height: f64,
    pub pointiness: f64,
    pub baseline: f64,
    #[serde(rename = "gradientId", alias = "gradientRef")]
    pub gradient_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
}

impl ShapeParams {
    /// Blur radius when blurring is actually requested.
    #[inline]
    pub fn blur_radius(&self) -> Option<f64> {
        self.blur.filter(|r| r.is_finite() && *r > 0.0)
    }

    /// Returns true when every field is inside its documented range.
    ///
    /// Synthesis accepts out-of-range values anyway; this is for callers that
    /// want to validate configuration at the boundary.
    pub fn is_valid(&self) -> bool {
        let percent = |v: f64| (0.0..=100.0).contains(&v);
        let extent = |v: f64| v.is_finite() && v >= 0.0;

        extent(self.width)
            && extent(self.height)
            && extent(self.baseline)
            && percent(self.peak_height)
            && percent(self.pointiness)
            && self.blur.is_none_or(|r| r.is_finite() && r >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> ShapeParams {
        BaseLayer {
            width: 140.0,
            height: 90.0,
            peak_height: 85.0,
            pointiness: 55.0,
            baseline: 0.0,
            blur: Some(7.0),
        }
        .with_gradient("g")
    }

    #[test]
    fn with_gradient_copies_geometry() {
        let s = shape();
        assert_eq!(s.width, 140.0);
        assert_eq!(s.peak_height, 85.0);
        assert_eq!(s.gradient_ref, "g");
        assert_eq!(s.blur, Some(7.0));
    }

    #[test]
    fn blur_radius_ignores_zero_and_missing() {
        let mut s = shape();
        assert_eq!(s.blur_radius(), Some(7.0));
        s.blur = Some(0.0);
        assert_eq!(s.blur_radius(), None);
        s.blur = None;
        assert_eq!(s.blur_radius(), None);
    }

    #[test]
    fn overflowing_width_is_valid() {
        let mut s = shape();
        s.width = 250.0;
        assert!(s.is_valid());
    }

    #[test]
    fn out_of_range_percentages_are_invalid() {
        let mut s = shape();
        s.pointiness = 101.0;
        assert!(!s.is_valid());

        let mut s = shape();
        s.peak_height = -1.0;
        assert!(!s.is_valid());

        let mut s = shape();
        s.baseline = f64::NAN;
        assert!(!s.is_valid());
    }

    #[test]
    fn deserializes_declarative_field_names() {
        let json = r#"{ "width": 120, "height": 50, "peakHeight": 65, "pointiness": 45,
                        "baseline": 0, "gradientId": "gpb-gradient-1" }"#;
        let s: ShapeParams = serde_json::from_str(json).unwrap();
        assert_eq!(s.peak_height, 65.0);
        assert_eq!(s.gradient_ref, "gpb-gradient-1");
        assert_eq!(s.blur, None);
    }
}
