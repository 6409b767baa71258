//! Property tests for distances, searches, and the enclosing circle.

use planar::prelude::*;
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn circle() -> impl Strategy<Value = Circle> {
    (point(), 0.0..10.0f64).prop_map(|(c, r)| Circle::new(c, r))
}

proptest! {
    #[test]
    fn distance_is_symmetric_and_zero_on_self(p in point(), q in point()) {
        prop_assert_eq!(p.distance(&p), 0.0);
        prop_assert_eq!(p.distance(&q), q.distance(&p));
    }

    #[test]
    fn triangle_inequality(p in point(), q in point(), r in point()) {
        prop_assert!(p.distance(&r) <= p.distance(&q) + q.distance(&r) + 1e-9);
    }

    #[test]
    fn circle_distance_is_symmetric_and_non_negative(a in circle(), b in circle()) {
        prop_assert!(a.distance(&b) >= 0.0);
        prop_assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn diameter_dominates_every_pair(pts in prop::collection::vec(point(), 2..40)) {
        init_tracing();
        let s = diameter(&pts).unwrap();
        let best = s.length();
        for (i, p) in pts.iter().enumerate() {
            for q in &pts[i + 1..] {
                prop_assert!(p.distance(q) <= best);
            }
        }
        prop_assert!(pts.contains(&s.begin) && pts.contains(&s.end));
    }

    #[test]
    fn nearest_pair_is_minimal(cs in prop::collection::vec(circle(), 2..30)) {
        init_tracing();
        let (a, b) = find_nearest_circle_pair(&cs).unwrap();
        let best = a.distance(&b);
        for (i, c) in cs.iter().enumerate() {
            for d in &cs[i + 1..] {
                prop_assert!(best <= c.distance(d));
            }
        }
    }

    #[test]
    fn min_circle_encloses_and_is_no_larger_than_needed(pts in prop::collection::vec(point(), 1..60)) {
        init_tracing();
        let c = min_containing_circle(&pts).unwrap();
        for p in &pts {
            prop_assert!(p.distance(&c.center) <= c.radius * (1.0 + 1e-8) + 1e-8);
        }
        if pts.len() >= 2 {
            let d = diameter(&pts).unwrap().length();
            prop_assert!(c.radius + 1e-7 >= d / 2.0);
            prop_assert!(c.radius <= d / 3.0f64.sqrt() + 1e-7);
        }
    }

    #[test]
    fn circumcircle_is_equidistant(a in point(), b in point(), c in point()) {
        if let Ok(circ) = circle_by_three_points(&a, &b, &c) {
            for p in [a, b, c] {
                let d = p.distance(&circ.center);
                prop_assert!((d - circ.radius).abs() <= 1e-6 * circ.radius.max(1.0));
            }
        }
    }

    #[test]
    fn bisector_midpoint_is_equidistant(a in point(), b in point()) {
        let l = bisector_by_points(&a, &b);
        prop_assert!((l.point.distance(&a) - l.point.distance(&b)).abs() < 1e-9);
    }
}

#[test]
fn sampled_clouds_feed_the_searches() {
    init_tracing();
    let cfg = CloudCfg {
        count: 100,
        ..CloudCfg::default()
    };
    let tok = ReplayToken { seed: 1, index: 0 };
    let pts = draw_points(cfg, tok);
    let circle = min_containing_circle(&pts).unwrap();
    assert!(pts.iter().all(|p| p.distance(&circle.center) <= circle.radius + 1e-8));
    let circles = draw_circles(cfg, tok);
    let (a, b) = find_nearest_circle_pair(&circles).unwrap();
    assert_ne!(a, b);
}
