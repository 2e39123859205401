//! Circle ∩ line / segment via the parametric quadratic.
//!
//! Parametrize the supporting line as `p1 + t·(p2 − p1)` and solve
//! `|p(t) − center|² = r²`, i.e. `a t² + b t + c = 0` with
//! - `a = |d|²`, `b = 2 d·(p1 − center)`, `c = |p1 − center|² − r²`.
//!
//! The discriminant `b² − 4ac = 4a·(r² − dist²)` classifies the line
//! (disjoint / tangent / secant); it is evaluated in the `r² − dist²` form, with
//! coordinates scaled by a power of two, so neither cancellation nor overflow
//! decides the sign. `filter_to_segment` then keeps the points inside the closed
//! segment.
//!
//! Code cross-refs: `types::{Circle, Segment, GeomCfg}`

use super::types::{pow2_scale, Circle, GeomCfg, Point, Segment};

/// How the supporting line meets the circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// No real root: the line misses the circle.
    Disjoint,
    /// `r² − dist²` within tolerance of zero: one touching point.
    Tangent,
    /// Two distinct roots.
    Secant,
    /// Zero-length segment; no direction, no points.
    DegenerateSegment,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Disjoint => "disjoint",
            Status::Tangent => "tangent",
            Status::Secant => "secant",
            Status::DegenerateSegment => "degenerate_segment",
        }
    }
}

/// Classified intersection: status of the line plus the ordered points.
///
/// Invariants:
/// - `points.len() <= 2`; `Secant` points are ordered `t1` (+root) first.
/// - `DegenerateSegment` and `Disjoint` carry no points.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection {
    pub status: Status,
    pub points: Vec<Point>,
}

impl Intersection {
    #[inline]
    fn empty(status: Status) -> Self {
        Self {
            status,
            points: Vec::new(),
        }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// True for both true non-intersection and degeneracy.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Intersect the circle with the infinite line through `seg`.
///
/// Roots map to `p1 + t·d`; for two roots the `+√disc` root comes first.
/// Works on coordinates divided by a power of two, so any finite input stays finite.
/// Tangency is decided by `|r² − dist²| <= eps_tangent · r·(r + |f|)`, and a root
/// within `eps_tangent · (r + |f|)` of an endpoint resolves to that endpoint.
pub fn intersect_circle_line(circle: &Circle, seg: &Segment, cfg: &GeomCfg) -> Intersection {
    if seg.is_degenerate(cfg) {
        return Intersection::empty(Status::DegenerateSegment);
    }
    let s = pow2_scale([
        seg.p1.x,
        seg.p1.y,
        seg.p2.x,
        seg.p2.y,
        circle.center.x,
        circle.center.y,
        circle.radius,
    ]);
    let p1 = seg.p1 / s;
    let d = seg.p2 / s - p1;
    let f = p1 - circle.center / s;
    let r = circle.radius / s;

    let a = d.norm_squared();
    let cross = d.x * f.y - d.y * f.x;
    // disc / 4a = r² − dist², dist = |d × f| / |d|
    let q = r * r - cross * cross / a;
    let t0 = -d.dot(&f) / a;
    let reach = r + f.norm();

    let len = a.sqrt();
    let snap = cfg.eps_tangent * reach;
    let point_at = |t: f64| -> Point {
        if t.abs() * len <= snap {
            seg.p1
        } else if (1.0 - t).abs() * len <= snap {
            seg.p2
        } else {
            (p1 + d * t) * s
        }
    };

    if q.abs() <= cfg.eps_tangent * r * reach {
        return Intersection {
            status: Status::Tangent,
            points: vec![point_at(t0)],
        };
    }
    if q < 0.0 {
        return Intersection::empty(Status::Disjoint);
    }

    let half = (q / a).sqrt();
    Intersection {
        status: Status::Secant,
        points: vec![point_at(t0 + half), point_at(t0 - half)],
    }
}

/// Dot-product containment: `p` projects onto `[p1, p2]` (endpoints inclusive).
#[inline]
pub fn segment_contains_projection(p: Point, p1: Point, p2: Point) -> bool {
    // Power-of-two scaling keeps the dot products finite without moving their signs.
    let s = pow2_scale([p.x, p.y, p1.x, p1.y, p2.x, p2.y]);
    let (p, p1, p2) = (p / s, p1 / s, p2 / s);
    let dot1 = (p - p1).dot(&(p2 - p1));
    let dot2 = (p - p2).dot(&(p1 - p2));
    dot1 >= 0.0 && dot2 >= 0.0
}

/// Keep the points whose projection lies within the closed segment, in input order.
pub fn filter_to_segment(points: &[Point], p1: Point, p2: Point) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&p| segment_contains_projection(p, p1, p2))
        .collect()
}

/// Circle ∩ closed segment: line classification, then containment filter.
pub fn intersect_circle_segment(circle: &Circle, seg: &Segment, cfg: &GeomCfg) -> Intersection {
    let line = intersect_circle_line(circle, seg, cfg);
    let points = filter_to_segment(&line.points, seg.p1, seg.p2);
    Intersection {
        status: line.status,
        points,
    }
}
