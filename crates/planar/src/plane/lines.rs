//! Lines in point + angle form: constructions and pairwise intersection.
//!
//! - `line_by_segment`, `line_by_points`: angle from `atan` of the slope.
//! - `bisector_by_points`: perpendicular bisector through the midpoint.
//! - `Line::cross_point`: closed-form 2×2 solve with a vertical-line branch.
use std::f64::consts::FRAC_PI_2;

use super::types::{Line, Point, Segment};

/// Exact comparison against `cos(π/2)` (≈ 6.1e-17, not 0.0).
///
/// Matches angles produced by `atan(±inf)` and `θ + π/2` with `θ = 0`; angles
/// that are only close to vertical fall through to the general formula.
#[inline]
fn is_vertical(angle: f64) -> bool {
    angle.cos() == FRAC_PI_2.cos()
}

impl Line {
    /// Intersection with `other`.
    ///
    /// Parallel lines (or two vertical ones) divide by zero and yield
    /// non-finite coordinates.
    pub fn cross_point(&self, other: &Line) -> Point {
        let tan_a = self.angle.tan();
        let tan_o = other.angle.tan();
        let self_vertical = is_vertical(self.angle);
        let x = if self_vertical {
            self.point.x
        } else if is_vertical(other.angle) {
            other.point.x
        } else {
            (other.point.y - self.point.y - other.point.x * tan_o + self.point.x * tan_a)
                / (tan_a - tan_o)
        };
        let y = if self_vertical {
            (x - other.point.x) * tan_o + other.point.y
        } else {
            (x - self.point.x) * tan_a + self.point.y
        };
        Point::new(x, y)
    }
}

/// Line through the segment; vertical segments give `±π/2` via `atan(±inf)`.
pub fn line_by_segment(s: &Segment) -> Line {
    let slope = (s.end.y - s.begin.y) / (s.end.x - s.begin.x);
    Line::new(s.begin, slope.atan())
}

pub fn line_by_points(a: &Point, b: &Point) -> Line {
    line_by_segment(&Segment::new(*a, *b))
}

/// Perpendicular bisector of `a`–`b`.
pub fn bisector_by_points(a: &Point, b: &Point) -> Line {
    Line::new(a.midpoint(b), line_by_points(a, b).angle + FRAC_PI_2)
}
