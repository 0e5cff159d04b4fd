use crate::coords::{Rect, Vec2};

use super::PathCmd;

/// Tight bounds over on-curve points and curve extrema.
pub(super) fn tight_bounds(cmds: &[PathCmd]) -> Option<Rect> {
    let mut acc: Option<(Vec2, Vec2)> = None;
    let mut include = |p: Vec2| {
        acc = Some(match acc {
            None => (p, p),
            Some((min, max)) => (min.min(p), max.max(p)),
        });
    };

    let mut current = Vec2::zero();
    let mut subpath_start = Vec2::zero();

    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => {
                include(p);
                current = p;
                subpath_start = p;
            }
            PathCmd::LineTo(p) => {
                include(p);
                current = p;
            }
            PathCmd::QuadTo(c, p) => {
                include(p);
                for t in quad_extrema(current, c, p) {
                    include(eval_quad(current, c, p, t));
                }
                current = p;
            }
            PathCmd::CubicTo(c1, c2, p) => {
                include(p);
                for t in cubic_extrema(current, c1, c2, p) {
                    include(eval_cubic(current, c1, c2, p, t));
                }
                current = p;
            }
            PathCmd::Close => current = subpath_start,
        }
    }

    acc.map(|(min, max)| Rect::from_corners(min, max))
}

/// Parameters in `(0, 1)` where a quadratic's derivative vanishes, per axis.
fn quad_extrema(p0: Vec2, p1: Vec2, p2: Vec2) -> impl Iterator<Item = f64> {
    let axis = |a: f32, b: f32, c: f32| {
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        let denom = a - 2.0 * b + c;
        if denom == 0.0 { None } else { Some((a - b) / denom) }
    };
    [axis(p0.x, p1.x, p2.x), axis(p0.y, p1.y, p2.y)]
        .into_iter()
        .flatten()
        .filter(|t| *t > 0.0 && *t < 1.0)
}

/// Parameters in `(0, 1)` where a cubic's derivative vanishes, per axis.
fn cubic_extrema(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> impl Iterator<Item = f64> {
    let mut roots = Vec::with_capacity(4);
    for (a0, a1, a2, a3) in [(p0.x, p1.x, p2.x, p3.x), (p0.y, p1.y, p2.y, p3.y)] {
        let d0 = f64::from(a1) - f64::from(a0);
        let d1 = f64::from(a2) - f64::from(a1);
        let d2 = f64::from(a3) - f64::from(a2);
        // B'(t) / 3 = a t² + b t + c
        let a = d0 - 2.0 * d1 + d2;
        let b = 2.0 * (d1 - d0);
        let c = d0;
        solve_quadratic(a, b, c, &mut roots);
    }
    roots.into_iter().filter(|t| *t > 0.0 && *t < 1.0)
}

fn solve_quadratic(a: f64, b: f64, c: f64, out: &mut Vec<f64>) {
    const EPS: f64 = 1e-12;
    if a.abs() < EPS {
        if b.abs() >= EPS {
            out.push(-c / b);
        }
        return;
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return;
    }
    let sq = disc.sqrt();
    out.push((-b + sq) / (2.0 * a));
    out.push((-b - sq) / (2.0 * a));
}

fn eval_quad(p0: Vec2, p1: Vec2, p2: Vec2, t: f64) -> Vec2 {
    let mt = 1.0 - t;
    let f = |a: f32, b: f32, c: f32| {
        (mt * mt * f64::from(a) + 2.0 * mt * t * f64::from(b) + t * t * f64::from(c)) as f32
    };
    Vec2::new(f(p0.x, p1.x, p2.x), f(p0.y, p1.y, p2.y))
}

fn eval_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    let mt = 1.0 - t;
    let f = |a: f32, b: f32, c: f32, d: f32| {
        (mt * mt * mt * f64::from(a)
            + 3.0 * mt * mt * t * f64::from(b)
            + 3.0 * mt * t * t * f64::from(c)
            + t * t * t * f64::from(d)) as f32
    };
    Vec2::new(f(p0.x, p1.x, p2.x, p3.x), f(p0.y, p1.y, p2.y, p3.y))
}
