//! Circle constructions.
//!
//! - `circle_by_diameter`: midpoint + half length.
//! - `circle_by_three_points`: circumcircle from a 2×2 linear solve.
//! - `min_containing_circle`: incremental (Welzl-style) smallest enclosing circle.
//!
//! Code cross-refs: `types::GeomCfg`, `search::diameter`
use nalgebra::{Matrix2, Vector2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

use super::search::diameter;
use super::types::{Circle, GeomCfg, Point, Segment};
use crate::error::{GeomError, Result};

/// Fixed shuffle seed: results are reproducible for a given input order.
const SHUFFLE_SEED: u64 = 0x5eed_c1c1e;

/// Circle having `diameter` as a diameter. A zero-length segment gives radius 0.
pub fn circle_by_diameter(diameter: &Segment) -> Circle {
    Circle::new(diameter.midpoint(), diameter.length() / 2.0)
}

/// Circle through `a`, `b`, `c` using default tolerances.
pub fn circle_by_three_points(a: &Point, b: &Point, c: &Point) -> Result<Circle> {
    circle_by_three_points_cfg(a, b, c, GeomCfg::default())
}

/// Circumcircle of `a`, `b`, `c`.
///
/// With `u = center - a`, equidistance from `a`, `b`, `c` reads
/// `(b-a)·u = |b-a|²/2` and `(c-a)·u = |c-a|²/2`.
/// Fails with `Collinear` when `|det| <= eps_det · |b-a| · |c-a|`, which also
/// covers coincident points.
pub fn circle_by_three_points_cfg(
    a: &Point,
    b: &Point,
    c: &Point,
    cfg: GeomCfg,
) -> Result<Circle> {
    let pa: Vector2<f64> = (*a).into();
    let ab: Vector2<f64> = Vector2::<f64>::from(*b) - pa;
    let ac: Vector2<f64> = Vector2::<f64>::from(*c) - pa;
    let m = Matrix2::new(ab.x, ab.y, ac.x, ac.y);
    let det = m.determinant();
    let scale = ab.norm() * ac.norm();
    // Also rejects NaN determinants.
    if !(det.abs() > cfg.eps_det * scale) {
        return Err(GeomError::Collinear);
    }
    let rhs = Vector2::new(ab.norm_squared(), ac.norm_squared()) * 0.5;
    let u = m.try_inverse().ok_or(GeomError::Collinear)? * rhs;
    Ok(Circle::new(Point::from(pa + u), u.norm()))
}

/// Smallest circle containing every point, using default tolerances.
pub fn min_containing_circle(points: &[Point]) -> Result<Circle> {
    min_containing_circle_cfg(points, GeomCfg::default())
}

/// Smallest enclosing circle.
///
/// Empty input is an error; a single point yields a zero-radius circle on it.
/// Otherwise the points are shuffled with a fixed seed and fed to the
/// three-level incremental algorithm (expected O(n)): each point found
/// outside the current circle must lie on the boundary of the next one.
/// Containment uses `GeomCfg::eps_feas` as relative slack.
pub fn min_containing_circle_cfg(points: &[Point], cfg: GeomCfg) -> Result<Circle> {
    match points {
        [] => {
            return Err(GeomError::NotEnoughPoints {
                required: 1,
                got: 0,
            })
        }
        [p] => return Ok(Circle::new(*p, 0.0)),
        _ => {}
    }
    let mut pts = points.to_vec();
    pts.shuffle(&mut StdRng::seed_from_u64(SHUFFLE_SEED));
    let eps = cfg.eps_feas;

    let mut circle = Circle::new(pts[0], 0.0);
    for i in 1..pts.len() {
        if circle.contains_eps(&pts[i], eps) {
            continue;
        }
        trace!(i, radius = circle.radius, "restart with one boundary point");
        circle = Circle::new(pts[i], 0.0);
        for j in 0..i {
            if circle.contains_eps(&pts[j], eps) {
                continue;
            }
            circle = circle_by_diameter(&Segment::new(pts[i], pts[j]));
            for k in 0..j {
                if circle.contains_eps(&pts[k], eps) {
                    continue;
                }
                circle = circle_on_boundary(&pts[i], &pts[j], &pts[k], cfg)?;
            }
        }
    }
    debug!(n = points.len(), radius = circle.radius, "min containing circle");
    Ok(circle)
}

/// Circle through three boundary points; for a collinear triple, the circle on
/// its farthest pair.
fn circle_on_boundary(a: &Point, b: &Point, c: &Point, cfg: GeomCfg) -> Result<Circle> {
    match circle_by_three_points_cfg(a, b, c, cfg) {
        Ok(circle) => Ok(circle),
        Err(GeomError::Collinear) => Ok(circle_by_diameter(&diameter(&[*a, *b, *c])?)),
        Err(e) => Err(e),
    }
}
