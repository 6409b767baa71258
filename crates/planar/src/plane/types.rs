//! Basic plane value types and tolerances.
//!
//! - `GeomCfg`: centralizes the epsilons for collinearity and containment.
//! - `Point`, `Triangle`, `Circle`, `Segment`: flat records, structural `==`.
//! - `Line`: point + angle form, `(y - p.y)·cos(angle) = (x - p.x)·sin(angle)`.
//!
//! Code cross-refs: `lines::line_by_segment`, `circles::circle_by_three_points`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::sqr;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Relative determinant threshold below which three points count as collinear.
    pub eps_det: f64,
    /// Relative slack for containment decisions.
    pub eps_feas: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_feas: 1e-9,
        }
    }
}

/// Point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (sqr(self.x - other.x) + sqr(self.y - other.y)).sqrt()
    }

    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// Triangle given by three vertices. Collinear vertices are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    pub fn half_perimeter(&self) -> f64 {
        (self.a.distance(&self.b) + self.b.distance(&self.c) + self.c.distance(&self.a)) / 2.0
    }

    /// Heron's formula. Slivers may push the radicand below zero, giving `NaN`.
    pub fn area(&self) -> f64 {
        self.heron_radicand().sqrt()
    }

    /// Point-in-triangle by sub-areas with the default relative slack.
    ///
    /// Splits into (a,b,p), (b,c,p), (c,a,p); `p` is inside when the three
    /// areas add up to no more than the whole. Boundary points count.
    pub fn contains(&self, p: &Point) -> bool {
        self.contains_eps(p, GeomCfg::default().eps_feas)
    }

    /// Sub-area test with relative slack `eps`; `eps = 0.0` compares with a bare `<=`.
    pub fn contains_eps(&self, p: &Point, eps: f64) -> bool {
        let abp = Triangle::new(self.a, self.b, *p);
        let bcp = Triangle::new(self.b, self.c, *p);
        let cap = Triangle::new(self.c, self.a, *p);
        let parts = abp.area_clamped() + bcp.area_clamped() + cap.area_clamped();
        parts <= self.area() * (1.0 + eps)
    }

    fn heron_radicand(&self) -> f64 {
        let p = self.half_perimeter();
        p * (p - self.a.distance(&self.b))
            * (p - self.b.distance(&self.c))
            * (p - self.c.distance(&self.a))
    }

    // Flat sub-triangles on an edge must count as zero, not NaN.
    fn area_clamped(&self) -> f64 {
        self.heron_radicand().max(0.0).sqrt()
    }
}

/// Circle with `center` and `radius` (non-negative by convention, not enforced).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Gap between the two discs: center distance minus both radii, or `0.0`
    /// when they touch, overlap, or one contains the other.
    pub fn distance(&self, other: &Circle) -> f64 {
        let d = self.center.distance(&other.center);
        if d > self.radius + other.radius {
            d - self.radius - other.radius
        } else {
            0.0
        }
    }

    /// Closed disc membership; the boundary counts.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.distance(&self.center) <= self.radius
    }

    #[inline]
    pub(crate) fn contains_eps(&self, p: &Point, eps: f64) -> bool {
        p.distance(&self.center) <= self.radius * (1.0 + eps) + eps
    }
}

/// Segment between `begin` and `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub begin: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.begin.distance(&self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.begin.midpoint(&self.end)
    }
}

/// Line through `point` at `angle` radians to the X axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub point: Point,
    pub angle: f64,
}

impl Line {
    #[inline]
    pub fn new(point: Point, angle: f64) -> Self {
        Self { point, angle }
    }
}
