//! Plane geometry primitives.
//!
//! Value types (`Point`, `Triangle`, `Circle`, `Segment`, `Line`) and a small
//! set of pure operations on them: distances, areas, containment, line
//! intersection, constructions (bisector, circle on a diameter, circumcircle),
//! brute-force pair searches, and the minimum enclosing circle.
//!
//! Conventions
//! - All values are `Copy` and never mutated after construction.
//! - Numeric degeneracies (parallel lines, Heron on a sliver) surface as IEEE
//!   `inf`/`NaN` values; only size preconditions and collinear circumcircles
//!   are reported through [`GeomError`].
//! - Tolerances live in [`GeomCfg`]; functions that need them come in a plain
//!   and a `*_cfg` flavour.

pub mod error;
pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, Result};
pub use nalgebra::Vector2 as Vec2;
pub use plane::{Circle, GeomCfg, Line, Point, Segment, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::plane::rand::{draw_circles, draw_points, CloudCfg, ReplayToken};
    pub use crate::plane::{
        bisector_by_points, circle_by_diameter, circle_by_three_points, diameter,
        find_nearest_circle_pair, line_by_points, line_by_segment, min_containing_circle, Circle,
        GeomCfg, Line, Point, Segment, Triangle,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Square of `x`.
#[inline]
pub fn sqr(x: f64) -> f64 {
    x * x
}
