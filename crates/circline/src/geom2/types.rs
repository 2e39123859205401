//! Basic 2D primitives and tolerances for circle/segment intersection.
//!
//! - `GeomCfg`: centralizes epsilons for degeneracy and tangency checks.
//! - `Circle`: center + non-negative radius (radius 0 is a point-circle).
//! - `Segment`: closed segment between two endpoints (may be zero-length).
//!
//! Code cross-refs: `intersect::{intersect_circle_line, filter_to_segment}`

use nalgebra::Vector2;

/// Points live in a shared 2D coordinate space; no conversion happens here.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// - `eps_degenerate`: absolute bound on the squared segment length below which the
///   segment has no usable direction.
/// - `eps_tangent`: relative bound on `r² − dist²` (dist = center-to-line distance),
///   scaled by `r·(r + |p1 − center|)` so rounding in the inputs, not in the
///   cancelled difference, sets the tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_degenerate: f64,
    pub eps_tangent: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_degenerate: 1e-18,
            eps_tangent: 1e-10,
        }
    }
}

/// Largest power of two not above `max |v|`, or 1 when that is zero, subnormal or
/// non-finite. Dividing by it is exact and keeps every value within `[-2, 2]`.
pub(crate) fn pow2_scale<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let m = values.into_iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if !m.is_finite() || m == 0.0 {
        return 1.0;
    }
    let s = f64::from_bits(m.to_bits() & 0x7ff0_0000_0000_0000);
    if s == 0.0 {
        1.0
    } else {
        s
    }
}

/// Circle `{ p : |p − center| = radius }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// None for non-finite input. A negative radius is taken by magnitude.
    #[inline]
    pub fn new(center: Point, radius: f64) -> Option<Self> {
        if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
            return None;
        }
        Some(Self {
            center,
            radius: radius.abs(),
        })
    }

    /// Circle from a drag: start point is the center, drag distance the radius.
    #[inline]
    pub fn from_drag(start: Point, end: Point) -> Option<Self> {
        Self::new(start, (end - start).norm())
    }

    /// Signed distance of `p` to the boundary (negative inside).
    #[inline]
    pub fn boundary_distance(&self, p: Point) -> f64 {
        (p - self.center).norm() - self.radius
    }
}

/// Closed segment `[p1, p2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    /// None for non-finite endpoints. `p1 == p2` is accepted (degenerate).
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Option<Self> {
        if !(p1.x.is_finite() && p1.y.is_finite() && p2.x.is_finite() && p2.y.is_finite()) {
            return None;
        }
        Some(Self { p1, p2 })
    }
    #[inline]
    pub fn direction(&self) -> Point {
        self.p2 - self.p1
    }
    #[inline]
    fn scale(&self) -> f64 {
        pow2_scale([self.p1.x, self.p1.y, self.p2.x, self.p2.y])
    }
    /// Squared length below `eps_degenerate`. Evaluated on scaled coordinates, so
    /// long segments with huge coordinates are never reported degenerate.
    pub fn is_degenerate(&self, cfg: &GeomCfg) -> bool {
        let s = self.scale();
        let a_s = (self.p2 / s - self.p1 / s).norm_squared();
        a_s == 0.0 || a_s * s * s <= cfg.eps_degenerate
    }
    /// Distance from `p` to the infinite line through the segment. None if degenerate.
    pub fn line_distance(&self, p: Point, cfg: &GeomCfg) -> Option<f64> {
        if self.is_degenerate(cfg) {
            return None;
        }
        let s = self.scale().max(pow2_scale([p.x, p.y]));
        let d = self.p2 / s - self.p1 / s;
        let w = p / s - self.p1 / s;
        Some((d.x * w.y - d.y * w.x).abs() / d.norm() * s)
    }
}
