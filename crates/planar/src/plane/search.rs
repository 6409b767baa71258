//! Brute-force pair searches over small sets.
//!
//! Both scans visit unordered pairs `(i, j)`, `i < j`, with `i` ascending then
//! `j` ascending, and only replace the best pair on a strict improvement, so
//! ties resolve to the first pair in that order.
use tracing::debug;

use super::types::{Circle, Point, Segment};
use crate::error::{GeomError, Result};

/// Segment joining the two mutually farthest points.
pub fn diameter(points: &[Point]) -> Result<Segment> {
    if points.len() < 2 {
        return Err(GeomError::NotEnoughPoints {
            required: 2,
            got: points.len(),
        });
    }
    let mut best = Segment::new(points[0], points[1]);
    let mut max = 0.0;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let d = p.distance(q);
            if d > max {
                max = d;
                best = Segment::new(*p, *q);
            }
        }
    }
    debug!(n = points.len(), length = max, "diameter");
    Ok(best)
}

/// The two circles with the smallest gap (`Circle::distance`).
pub fn find_nearest_circle_pair(circles: &[Circle]) -> Result<(Circle, Circle)> {
    if circles.len() < 2 {
        return Err(GeomError::NotEnoughCircles {
            required: 2,
            got: circles.len(),
        });
    }
    let mut best = (circles[0], circles[1]);
    let mut min = circles[0].distance(&circles[1]);
    for (i, c) in circles.iter().enumerate() {
        for d in &circles[i + 1..] {
            let gap = c.distance(d);
            if gap < min {
                min = gap;
                best = (*c, *d);
            }
        }
    }
    debug!(n = circles.len(), gap = min, "nearest circle pair");
    Ok(best)
}
