//! Canvas pixel coordinates → normalized device coordinates.
//!
//! Pixels have the origin top-left with y pointing down; NDC spans `[-1, 1]²`
//! with y pointing up.

use nalgebra::Vector2;

use crate::geom2::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 700.0,
        }
    }
}

impl Viewport {
    /// None unless both sides are finite and positive.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(width) && ok(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }
    #[inline]
    pub fn to_ndc(&self, x: f64, y: f64) -> Point {
        Vector2::new(
            (x / self.width) * 2.0 - 1.0,
            -((y / self.height) * 2.0 - 1.0),
        )
    }
}
