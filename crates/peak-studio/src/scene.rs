use std::path::Path;

use anyhow::{Context, Result};
use peak_engine::paint::{ColorPalette, GradientDef};
use peak_engine::shape::ShapeParams;
use serde::Deserialize;

/// Explicit layer set loaded from JSON.
///
/// ```json
/// {
///   "colors": ["#000", "#333", "#666", "#999", "#ccc"],
///   "shapes": [{ "width": 140, "height": 90, "peakHeight": 85, "pointiness": 55,
///                "baseline": 0, "gradientId": "g", "blur": 7 }],
///   "gradients": [{ "id": "g", "type": "linear", "angle": 0,
///                   "stops": [{ "offset": 0, "colorRef": { "color": "a", "opacity": 100 } }] }]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SceneFile {
    /// Overrides `--colors` when present.
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    pub shapes: Vec<ShapeParams>,
    pub gradients: Vec<GradientDef>,
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading scene {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing scene {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn palette(&self) -> Option<Result<ColorPalette>> {
        self.colors
            .as_deref()
            .map(|c| ColorPalette::from_slice(c).context("scene colors"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peak_engine::paint::{ColorKey, GradientKind};

    const SCENE: &str = r##"{
        "colors": ["#000", "#333", "#666", "#999", "#ccc"],
        "shapes": [{ "width": 140, "height": 90, "peakHeight": 85, "pointiness": 55,
                     "baseline": 0, "gradientId": "g", "blur": 7 }],
        "gradients": [{ "id": "g", "type": "radial", "cx": 30,
                        "stops": [{ "offset": 0, "colorRef": { "color": "a", "opacity": 100 } }] }]
    }"##;

    #[test]
    fn parses_scene() {
        let scene = SceneFile::parse(SCENE).unwrap();
        assert_eq!(scene.shapes.len(), 1);
        assert_eq!(scene.shapes[0].blur, Some(7.0));
        assert_eq!(scene.gradients[0].kind, GradientKind::Radial { cx: Some(30.0), cy: None });
        let palette = scene.palette().unwrap().unwrap();
        assert_eq!(palette.resolve(ColorKey::E), "#ccc");
    }

    #[test]
    fn colors_are_optional() {
        let scene = SceneFile::parse(r#"{ "shapes": [], "gradients": [] }"#).unwrap();
        assert!(scene.palette().is_none());
    }

    #[test]
    fn wrong_color_count_is_reported() {
        let scene = SceneFile::parse(r##"{ "colors": ["#000"], "shapes": [], "gradients": [] }"##).unwrap();
        assert!(scene.palette().unwrap().is_err());
    }
}
