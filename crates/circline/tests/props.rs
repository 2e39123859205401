//! Property tests for the intersection engine.
//!
//! Lines are built from a unit normal `n` and the signed offset `h` of the line
//! from the circle center, so the true configuration (disjoint / tangent /
//! secant) is known by construction.

use circline::geom2::{
    filter_to_segment, intersect_circle_line, intersect_circle_segment,
    segment_contains_projection, Circle, GeomCfg, Point, Segment, Status,
};
use nalgebra::Vector2;
use proptest::prelude::*;

fn unit(theta: f64) -> Point {
    Vector2::new(theta.cos(), theta.sin())
}

/// Segment on the line `{ center + h n + s along }` for `s ∈ [-back, fwd]`.
fn offset_segment(circle: &Circle, theta: f64, h: f64, back: f64, fwd: f64) -> Segment {
    let n = unit(theta);
    let along = Vector2::new(-n.y, n.x);
    let foot = circle.center + n * h;
    Segment::new(foot - along * back, foot + along * fwd).unwrap()
}

fn circle_strategy() -> impl Strategy<Value = Circle> {
    (-100.0f64..100.0, -100.0f64..100.0, 0.1f64..10.0)
        .prop_map(|(x, y, r)| Circle::new(Vector2::new(x, y), r).unwrap())
}

proptest! {
    #[test]
    fn repeated_calls_agree(
        c in circle_strategy(),
        x1 in -100.0f64..100.0, y1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0, y2 in -100.0f64..100.0,
    ) {
        let cfg = GeomCfg::default();
        let s = Segment::new(Vector2::new(x1, y1), Vector2::new(x2, y2)).unwrap();
        let a = intersect_circle_segment(&c, &s, &cfg);
        let b = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn line_outside_circle_is_empty(
        c in circle_strategy(),
        theta in 0.0f64..std::f64::consts::TAU,
        margin in 0.01f64..5.0,
        back in 0.5f64..20.0, fwd in 0.5f64..20.0,
    ) {
        let cfg = GeomCfg::default();
        let s = offset_segment(&c, theta, c.radius * (1.0 + margin), back, fwd);
        let res = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(res.status, Status::Disjoint);
        prop_assert!(res.is_empty());
    }

    #[test]
    fn tangent_line_touches_once(
        c in circle_strategy(),
        theta in 0.0f64..std::f64::consts::TAU,
        back in 0.5f64..10.0, fwd in 0.5f64..10.0,
    ) {
        let cfg = GeomCfg::default();
        let s = offset_segment(&c, theta, c.radius, back, fwd);
        let res = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(res.status, Status::Tangent);
        prop_assert_eq!(res.len(), 1);
        prop_assert!(c.boundary_distance(res.points[0]).abs() < 1e-8);
    }

    #[test]
    fn tangent_segment_from_touch_point(
        c in circle_strategy(),
        theta in 0.0f64..std::f64::consts::TAU,
        fwd in 0.5f64..10.0,
        reversed in any::<bool>(),
    ) {
        let cfg = GeomCfg::default();
        let s = offset_segment(&c, theta, c.radius, 0.0, fwd);
        let s = if reversed { Segment::new(s.p2, s.p1).unwrap() } else { s };
        let touch = c.center + unit(theta) * c.radius;
        let res = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(res.status, Status::Tangent);
        prop_assert_eq!(res.len(), 1);
        prop_assert!((res.points[0] - touch).norm() < 1e-12);
    }

    // Below ~1e-9 the chord is shorter than `eps_degenerate` allows.
    #[test]
    fn diameter_chord_at_any_magnitude(e in -8i32..250) {
        let cfg = GeomCfg::default();
        let k = 10f64.powi(e);
        let center = Vector2::new(0.3 * k, -0.2 * k);
        let c = Circle::new(center, k).unwrap();
        let along = Vector2::new(k, 0.0);
        let s = Segment::new(center - along * 2.0, center + along * 2.0).unwrap();
        let res = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(res.status, Status::Secant);
        prop_assert_eq!(res.len(), 2);
        prop_assert!((res.points[0] - (center + along)).norm() <= 1e-12 * k);
        prop_assert!((res.points[1] - (center - along)).norm() <= 1e-12 * k);
    }

    #[test]
    fn secant_through_interior_gives_two_ordered_points(
        c in circle_strategy(),
        theta in 0.0f64..std::f64::consts::TAU,
        frac in -0.9f64..0.9,
        extra_back in 0.1f64..5.0, extra_fwd in 0.1f64..5.0,
    ) {
        let cfg = GeomCfg::default();
        let h = c.radius * frac;
        let half_chord = (c.radius * c.radius - h * h).sqrt();
        let s = offset_segment(&c, theta, h, half_chord + extra_back, half_chord + extra_fwd);
        let res = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(res.status, Status::Secant);
        prop_assert_eq!(res.len(), 2);
        for p in &res.points {
            prop_assert!(c.boundary_distance(*p).abs() < 1e-8);
            prop_assert!(segment_contains_projection(*p, s.p1, s.p2));
        }
        // +root first: farther along the segment direction.
        let d = s.direction();
        prop_assert!((res.points[0] - s.p1).dot(&d) > (res.points[1] - s.p1).dot(&d));
    }

    #[test]
    fn segment_from_inside_keeps_only_exit_point(
        c in circle_strategy(),
        theta in 0.0f64..std::f64::consts::TAU,
        inner in 0.0f64..0.9,
        extra in 0.1f64..5.0,
    ) {
        let cfg = GeomCfg::default();
        // Starts at distance `inner * r` from the center, leaves through the boundary.
        let n = unit(theta);
        let p1 = c.center + n * (c.radius * inner);
        let p2 = c.center + n * (c.radius + extra);
        let s = Segment::new(p1, p2).unwrap();
        let raw = intersect_circle_line(&c, &s, &cfg);
        prop_assert_eq!(raw.len(), 2);
        let kept = filter_to_segment(&raw.points, s.p1, s.p2);
        prop_assert_eq!(kept.len(), 1);
        prop_assert!((kept[0] - (c.center + n * c.radius)).norm() < 1e-8);
    }

    #[test]
    fn segment_inside_circle_has_no_boundary_points(
        c in circle_strategy(),
        t1 in 0.0f64..std::f64::consts::TAU, t2 in 0.0f64..std::f64::consts::TAU,
        r1 in 0.0f64..0.9, r2 in 0.0f64..0.9,
    ) {
        let cfg = GeomCfg::default();
        let p1 = c.center + unit(t1) * (c.radius * r1);
        let p2 = c.center + unit(t2) * (c.radius * r2);
        prop_assume!((p2 - p1).norm() > 1e-6);
        let s = Segment::new(p1, p2).unwrap();
        let res = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(res.status, Status::Secant);
        prop_assert!(res.is_empty());
    }

    #[test]
    fn filtered_points_are_an_ordered_subset(
        c in circle_strategy(),
        x1 in -100.0f64..100.0, y1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0, y2 in -100.0f64..100.0,
    ) {
        let cfg = GeomCfg::default();
        let s = Segment::new(Vector2::new(x1, y1), Vector2::new(x2, y2)).unwrap();
        let raw = intersect_circle_line(&c, &s, &cfg);
        let seg = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(raw.status, seg.status);
        prop_assert!(seg.len() <= raw.len());
        let mut it = raw.points.iter();
        for p in &seg.points {
            prop_assert!(it.any(|q| q == p));
        }
    }

    #[test]
    fn degenerate_segment_is_always_empty(
        c in circle_strategy(),
        x in -100.0f64..100.0, y in -100.0f64..100.0,
    ) {
        let cfg = GeomCfg::default();
        let p = Vector2::new(x, y);
        let s = Segment::new(p, p).unwrap();
        let res = intersect_circle_segment(&c, &s, &cfg);
        prop_assert_eq!(res.status, Status::DegenerateSegment);
        prop_assert!(res.is_empty());
    }
}
