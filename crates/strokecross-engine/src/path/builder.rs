use crate::coords::Vec2;

use super::{Path, PathCmd};

/// Incremental path construction.
///
/// Drawing commands issued before any `move_to` (or right after `close`)
/// start a new subpath at the last subpath start, matching common 2D canvas
/// semantics.
#[derive(Debug)]
pub struct PathBuilder {
    cmds: Vec<PathCmd>,
    subpath_start: Vec2,
    needs_move: bool,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            cmds: Vec::new(),
            subpath_start: Vec2::zero(),
            needs_move: true,
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        let p = Vec2::new(x, y);
        // Consecutive moves collapse into the last one.
        if let Some(PathCmd::MoveTo(last)) = self.cmds.last_mut() {
            *last = p;
        } else {
            self.cmds.push(PathCmd::MoveTo(p));
        }
        self.subpath_start = p;
        self.needs_move = false;
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.inject_move();
        self.cmds.push(PathCmd::LineTo(Vec2::new(x, y)));
        self
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.inject_move();
        self.cmds.push(PathCmd::QuadTo(Vec2::new(cx, cy), Vec2::new(x, y)));
        self
    }

    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> &mut Self {
        self.inject_move();
        self.cmds.push(PathCmd::CubicTo(
            Vec2::new(c1x, c1y),
            Vec2::new(c2x, c2y),
            Vec2::new(x, y),
        ));
        self
    }

    /// Closes the current subpath. No-op when there is nothing to close.
    pub fn close(&mut self) -> &mut Self {
        if !self.needs_move && !matches!(self.cmds.last(), Some(PathCmd::Close)) {
            self.cmds.push(PathCmd::Close);
        }
        self.needs_move = true;
        self
    }

    /// Finishes the builder. A trailing `move_to` carries no geometry and is dropped.
    pub fn finish(&mut self) -> Path {
        let mut cmds = std::mem::take(&mut self.cmds);
        if matches!(cmds.last(), Some(PathCmd::MoveTo(_))) {
            cmds.pop();
        }
        self.subpath_start = Vec2::zero();
        self.needs_move = true;
        Path::from_cmds(cmds)
    }

    fn inject_move(&mut self) {
        if self.needs_move {
            let start = self.subpath_start;
            self.move_to(start.x, start.y);
        }
    }
}
