use std::fmt::Write as _;

use peak_engine::coords::CoordSpace;
use peak_engine::paint::{GradientGeometry, ResolvedGradient, ResolvedStop};
use peak_engine::scene::{DrawList, LayerCmd, RenderSurface};

/// Builds SVG markup from a draw list.
///
/// Output conventions:
/// - `viewBox` is the scene's coordinate space with `preserveAspectRatio="none"`,
///   so the markup stretches to fill whatever box it is placed in
/// - gradients use `userSpaceOnUse`, anchoring them to the space rather than to
///   each path's bounding box
/// - each blurred layer gets its own `blur-{index}` filter, with a region wide
///   enough that the blur is not clipped at the shape's bounds
#[derive(Debug)]
pub struct SvgSurface {
    space: CoordSpace,
    defs: String,
    body: String,
}

impl SvgSurface {
    pub fn new(space: CoordSpace) -> Self {
        Self { space, defs: String::new(), body: String::new() }
    }

    /// Closes the document and returns the markup.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.defs.len() + self.body.len() + 160);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="none">"#,
            self.space.width, self.space.height
        );
        out.push('\n');
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn write_stops(&mut self, stops: &[ResolvedStop]) {
        for stop in stops {
            let _ = writeln!(
                self.defs,
                r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                stop.offset,
                escape(&stop.color),
                stop.opacity
            );
        }
    }
}

impl RenderSurface for SvgSurface {
    fn declare_gradient(&mut self, gradient: &ResolvedGradient) {
        let id = escape(&gradient.id);
        match gradient.geometry {
            GradientGeometry::Linear(axis) => {
                let _ = writeln!(
                    self.defs,
                    r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    axis.x1(),
                    axis.y1(),
                    axis.x2(),
                    axis.y2()
                );
                self.write_stops(&gradient.stops);
                self.defs.push_str("</linearGradient>\n");
            }
            GradientGeometry::Radial { center, radius } => {
                let _ = writeln!(
                    self.defs,
                    r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}">"#,
                    center.x, center.y, radius
                );
                self.write_stops(&gradient.stops);
                self.defs.push_str("</radialGradient>\n");
            }
        }
    }

    fn declare_blur(&mut self, layer_index: usize, radius: f64) {
        let _ = writeln!(
            self.defs,
            r#"<filter id="blur-{layer_index}" x="-50%" y="-100%" width="200%" height="200%"><feGaussianBlur stdDeviation="{radius}"/></filter>"#
        );
    }

    fn fill_layer(&mut self, layer: &LayerCmd) {
        let fill = match &layer.fill {
            Some(id) => format!("url(#{})", escape(id)),
            None => "none".to_owned(),
        };
        let _ = write!(self.body, r#"<path d="{}" fill="{fill}""#, layer.path.to_svg_data());
        if layer.blur.is_some() {
            let _ = write!(self.body, r#" filter="url(#blur-{})""#, layer.index);
        }
        self.body.push_str("/>\n");
    }
}

/// Renders `list` into a standalone SVG document.
pub fn render_svg(list: &DrawList) -> String {
    let mut surface = SvgSurface::new(list.space());
    list.paint_onto(&mut surface);
    let svg = surface.finish();
    log::debug!("rendered svg: {} layers, {} bytes", list.layers().len(), svg.len());
    svg
}

/// Escapes text for use inside a double-quoted attribute.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
