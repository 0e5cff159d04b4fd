/// A point in absolute path coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drawing command with every coordinate resolved to absolute space.
///
/// Relative commands and the `H`/`V` shorthands are expanded by the parser,
/// so consumers only ever see these five shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

/// The result of parsing a path-data string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    pub segments: Vec<Segment>,
}

impl PathData {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of subpaths (one per `MoveTo`).
    pub fn subpath_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::MoveTo(_)))
            .count()
    }
}
