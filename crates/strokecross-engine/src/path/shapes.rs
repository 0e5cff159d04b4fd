use crate::coords::{Rect, Vec2};

use super::{Path, PathBuilder};

/// Cubic control-point distance for a quarter circle of unit radius.
const KAPPA: f32 = 0.552_284_8;

impl Path {
    /// Open straight segment from `from` to `to`.
    pub fn line(from: Vec2, to: Vec2) -> Path {
        PathBuilder::new()
            .move_to(from.x, from.y)
            .line_to(to.x, to.y)
            .finish()
    }

    /// Open polyline through `points`. Fewer than two points yield a path
    /// without drawable segments.
    pub fn polyline(points: &[Vec2]) -> Path {
        let mut pb = PathBuilder::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            pb.move_to(first.x, first.y);
            for p in iter {
                pb.line_to(p.x, p.y);
            }
        }
        pb.finish()
    }

    /// Closed rectangle outline, clockwise from the origin corner.
    pub fn rect(rect: Rect) -> Path {
        let r = rect.normalized();
        let min = r.min();
        let max = r.max();
        PathBuilder::new()
            .move_to(min.x, min.y)
            .line_to(max.x, min.y)
            .line_to(max.x, max.y)
            .line_to(min.x, max.y)
            .close()
            .finish()
    }

    /// Closed circle outline made of four cubic arcs, starting at angle 0.
    pub fn circle(center: Vec2, radius: f32) -> Path {
        let r = radius.abs();
        let k = r * KAPPA;
        let (cx, cy) = (center.x, center.y);
        PathBuilder::new()
            .move_to(cx + r, cy)
            .cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r)
            .cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy)
            .cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r)
            .cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy)
            .close()
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCmd;

    #[test]
    fn line_has_two_commands() {
        let path = Path::line(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(
            path.cmds(),
            &[PathCmd::MoveTo(Vec2::new(1.0, 2.0)), PathCmd::LineTo(Vec2::new(3.0, 4.0))]
        );
    }

    #[test]
    fn rect_is_closed() {
        let path = Path::rect(Rect::new(-1000.0, -1000.0, 2000.0, 2000.0));
        assert_eq!(path.cmds().len(), 5);
        assert_eq!(path.cmds().last(), Some(&PathCmd::Close));
    }

    #[test]
    fn polyline_single_point_is_empty() {
        assert!(Path::polyline(&[Vec2::new(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn circle_ends_where_it_starts() {
        let path = Path::circle(Vec2::new(10.0, 20.0), 5.0);
        let cmds = path.cmds();
        let (PathCmd::MoveTo(first), PathCmd::CubicTo(_, _, last)) = (cmds[0], cmds[cmds.len() - 2])
        else {
            panic!("unexpected circle commands {cmds:?}");
        };
        assert_eq!(first, last);
        assert_eq!(cmds.last(), Some(&PathCmd::Close));
    }
}
