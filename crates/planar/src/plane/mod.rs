//! Plane geometry: value types and the operations over them.
//!
//! Purpose
//! - Provide flat, immutable value types with structural equality and pure
//!   functions over them. No shared state; everything is safe to call from
//!   any thread.
//! - Keep the numerics plain: straightforward `f64` formulas, with explicit
//!   tolerances only where a decision (collinear? contained?) depends on them.
//!
//! Layout
//! - `types`: `Point`, `Triangle`, `Circle`, `Segment`, `Line`, `GeomCfg`.
//! - `lines`: line by segment/points, perpendicular bisector, intersection.
//! - `search`: brute-force farthest point pair and nearest circle pair.
//! - `circles`: circle on a diameter, circumcircle, minimum enclosing circle.
//! - `rand`: reproducible point clouds and circle sets.

mod circles;
mod lines;
pub mod rand;
mod search;
mod types;

pub use circles::{
    circle_by_diameter, circle_by_three_points, circle_by_three_points_cfg,
    min_containing_circle, min_containing_circle_cfg,
};
pub use lines::{bisector_by_points, line_by_points, line_by_segment};
pub use search::{diameter, find_nearest_circle_pair};
pub use types::{Circle, GeomCfg, Line, Point, Segment, Triangle};
