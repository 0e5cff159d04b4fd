//! Path model: an immutable sequence of drawing commands in path-space.
//!
//! Paths are built with [`PathBuilder`] or the shape constructors
//! (`Path::line`, `Path::polyline`, `Path::rect`, `Path::circle`) and are only
//! ever read by the raster pipeline.

mod bounds;
mod builder;
mod cmd;
mod shapes;

pub use builder::PathBuilder;
pub use cmd::PathCmd;

use crate::coords::Rect;

/// Immutable 2D vector path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub(crate) fn from_cmds(cmds: Vec<PathCmd>) -> Self {
        Self { cmds }
    }

    /// Returns the commands in drawing order.
    #[inline]
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// True when every point and control point is finite.
    pub fn is_finite(&self) -> bool {
        self.cmds.iter().all(|cmd| match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => p.is_finite(),
            PathCmd::QuadTo(c, p) => c.is_finite() && p.is_finite(),
            PathCmd::CubicTo(c1, c2, p) => c1.is_finite() && c2.is_finite() && p.is_finite(),
            PathCmd::Close => true,
        })
    }

    /// Tight axis-aligned bounds of the path geometry.
    ///
    /// Curve extents are measured at their extrema, not at their control
    /// points. Returns `None` for a path without any points.
    pub fn bounds(&self) -> Option<Rect> {
        bounds::tight_bounds(&self.cmds)
    }
}
