use std::fmt::Write as _;

use crate::coords::{CoordSpace, Vec2};

use super::ShapeParams;

/// One outline drawing command, in coordinate-space units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    /// Quadratic Bézier from the current point through `ctrl` to `to`.
    QuadTo { ctrl: Vec2, to: Vec2 },
    LineTo(Vec2),
    Close,
}

/// Closed peak outline produced by [`synthesize_path`].
///
/// Layout (always six commands):
/// `MoveTo(start)`, `QuadTo(left ctrl, apex)`, `QuadTo(right ctrl, end)`,
/// `LineTo(end, bottom)`, `LineTo(start, bottom)`, `Close`.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakPath {
    commands: Vec<PathCmd>,
}

impl PeakPath {
    #[inline]
    pub fn commands(&self) -> &[PathCmd] {
        &self.commands
    }

    /// Bottom-left point where the outline starts (and closes).
    pub fn start(&self) -> Vec2 {
        match self.commands[0] {
            PathCmd::MoveTo(p) => p,
            _ => unreachable!("peak path always starts with MoveTo"),
        }
    }

    pub fn apex(&self) -> Vec2 {
        match self.commands[1] {
            PathCmd::QuadTo { to, .. } => to,
            _ => unreachable!("peak path command 1 is the rising curve"),
        }
    }

    /// Left and right curve control points.
    pub fn control_points(&self) -> (Vec2, Vec2) {
        match (self.commands[1], self.commands[2]) {
            (PathCmd::QuadTo { ctrl: left, .. }, PathCmd::QuadTo { ctrl: right, .. }) => (left, right),
            _ => unreachable!("peak path commands 1 and 2 are curves"),
        }
    }

    /// Y of the extended bottom edge.
    pub fn bottom_y(&self) -> f64 {
        match self.commands[3] {
            PathCmd::LineTo(p) => p.y,
            _ => unreachable!("peak path command 3 is the right edge"),
        }
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match *cmd {
                PathCmd::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
                PathCmd::QuadTo { ctrl, to } => write!(d, "Q {} {}, {} {}", ctrl.x, ctrl.y, to.x, to.y),
                PathCmd::LineTo(p) => write!(d, "L {} {}", p.x, p.y),
                PathCmd::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Builds the closed outline of one peak layer.
///
/// The apex sits on the vertical center line of `space`, `peak_height` percent
/// of the shape height above the baseline. Both curve control points sit at apex
/// height, spread horizontally by `(100 - pointiness)% × shapeWidth / 2`, so the
/// apex turns into a sharp corner at pointiness 100 and is fully rounded at 0.
///
/// The side edges continue down to `1.5 × space.height`. Blur expands edges,
/// and the overshoot keeps the blurred bottom from showing a gap.
///
/// Total over all finite inputs: zero width or zero peak height yields a
/// collapsed outline, not an error.
pub fn synthesize_path(shape: &ShapeParams, space: CoordSpace) -> PeakPath {
    let shape_width = space.percent_x(shape.width);
    let shape_height = space.percent_y(shape.height);
    let baseline_y = space.height - space.percent_y(shape.baseline);

    let start_x = (space.width - shape_width) / 2.0;
    let end_x = start_x + shape_width;

    let apex = Vec2::new(space.width / 2.0, baseline_y - shape.peak_height / 100.0 * shape_height);

    let control_spread = (100.0 - shape.pointiness) / 100.0 * (shape_width / 2.0);
    let left_ctrl = Vec2::new(apex.x - control_spread, apex.y);
    let right_ctrl = Vec2::new(apex.x + control_spread, apex.y);

    let bottom_y = space.height + space.height / 2.0;

    PeakPath {
        commands: vec![
            PathCmd::MoveTo(Vec2::new(start_x, baseline_y)),
            PathCmd::QuadTo { ctrl: left_ctrl, to: apex },
            PathCmd::QuadTo { ctrl: right_ctrl, to: Vec2::new(end_x, baseline_y) },
            PathCmd::LineTo(Vec2::new(end_x, bottom_y)),
            PathCmd::LineTo(Vec2::new(start_x, bottom_y)),
            PathCmd::Close,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::BaseLayer;

    const EPS: f64 = 1e-9;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < EPS
    }

    fn shape(width: f64, height: f64, peak_height: f64, pointiness: f64, baseline: f64) -> ShapeParams {
        BaseLayer { width, height, peak_height, pointiness, baseline, blur: None }.with_gradient("g")
    }

    fn path(s: &ShapeParams) -> PeakPath {
        synthesize_path(s, CoordSpace::NORMALIZED)
    }

    // ── control points ────────────────────────────────────────────────────

    #[test]
    fn full_pointiness_collapses_controls_onto_apex() {
        for (w, h, p) in [(140.0, 90.0, 85.0), (10.0, 10.0, 100.0), (300.0, 40.0, 1.0)] {
            let out = path(&shape(w, h, p, 100.0, 0.0));
            let (left, right) = out.control_points();
            assert_eq!(left, out.apex());
            assert_eq!(right, out.apex());
        }
    }

    #[test]
    fn zero_pointiness_puts_controls_above_edges() {
        let out = path(&shape(120.0, 50.0, 65.0, 0.0, 10.0));
        let (left, right) = out.control_points();
        assert!(close(left, Vec2::new(50.0 - 60.0, out.apex().y)));
        assert!(close(right, Vec2::new(50.0 + 60.0, out.apex().y)));
        assert_eq!(left.x, out.start().x);
    }

    #[test]
    fn controls_are_symmetric_about_apex() {
        let out = path(&shape(125.0, 70.0, 75.0, 80.0, 5.0));
        let (left, right) = out.control_points();
        let apex = out.apex();
        assert!((apex.x - left.x - (right.x - apex.x)).abs() < EPS);
        assert_eq!(left.y, apex.y);
        assert_eq!(right.y, apex.y);
    }

    // ── apex & edges ──────────────────────────────────────────────────────

    #[test]
    fn zero_peak_height_gives_flat_top() {
        let out = path(&shape(100.0, 60.0, 0.0, 50.0, 20.0));
        assert_eq!(out.apex().y, out.start().y);
        assert_eq!(out.start().y, 80.0);
    }

    #[test]
    fn bottom_edge_is_fixed_below_space() {
        for (peak, baseline) in [(0.0, 0.0), (100.0, 50.0), (42.0, 99.0), (85.0, -10.0)] {
            let out = path(&shape(140.0, 90.0, peak, 55.0, baseline));
            assert_eq!(out.bottom_y(), 150.0);
        }
        let wide = synthesize_path(&shape(50.0, 50.0, 50.0, 50.0, 0.0), CoordSpace::new(300.0, 40.0));
        assert_eq!(wide.bottom_y(), 60.0);
    }

    #[test]
    fn outline_closes_back_at_start() {
        let out = path(&shape(140.0, 80.0, 89.0, 55.0, 0.0));
        let cmds = out.commands();
        assert_eq!(cmds.len(), 6);
        assert_eq!(cmds[5], PathCmd::Close);
        assert_eq!(cmds[4], PathCmd::LineTo(Vec2::new(out.start().x, 150.0)));
    }

    #[test]
    fn shape_is_centered_horizontally() {
        let out = path(&shape(140.0, 90.0, 85.0, 55.0, 0.0));
        assert_eq!(out.start(), Vec2::new(-20.0, 100.0));
        match out.commands()[2] {
            PathCmd::QuadTo { to, .. } => assert_eq!(to, Vec2::new(120.0, 100.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn zero_width_collapses_onto_center_line() {
        let out = path(&shape(0.0, 50.0, 50.0, 50.0, 0.0));
        let (left, right) = out.control_points();
        assert_eq!(out.start().x, 50.0);
        assert_eq!(left.x, 50.0);
        assert_eq!(right.x, 50.0);
    }

    #[test]
    fn outermost_preset_layer_geometry() {
        let out = path(&shape(140.0, 90.0, 85.0, 55.0, 0.0));
        assert!(close(out.apex(), Vec2::new(50.0, 23.5)));
        let (left, right) = out.control_points();
        assert!(close(left, Vec2::new(18.5, 23.5)));
        assert!(close(right, Vec2::new(81.5, 23.5)));
    }

    // ── svg data ──────────────────────────────────────────────────────────

    #[test]
    fn svg_data_layout() {
        let out = path(&shape(100.0, 50.0, 100.0, 100.0, 0.0));
        assert_eq!(
            out.to_svg_data(),
            "M 0 100 Q 50 50, 50 50 Q 50 50, 100 100 L 100 150 L 0 150 Z"
        );
    }
}
