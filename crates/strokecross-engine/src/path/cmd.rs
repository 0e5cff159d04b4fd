use crate::coords::Vec2;

/// A single path drawing command with absolute coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic Bézier: control point, end point.
    QuadTo(Vec2, Vec2),
    /// Cubic Bézier: first control, second control, end point.
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}
