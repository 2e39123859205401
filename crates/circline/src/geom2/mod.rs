//! 2D circle/segment intersection engine.
//!
//! Purpose
//! - Given one `Circle` and one `Segment`, compute the points common to the circle
//!   boundary and the closed segment, classified as disjoint / tangent / secant.
//! - Keep every operation pure and numerically explicit (eps-aware, no panics on
//!   degenerate input).
//!
//! Code cross-refs: `Circle`, `Segment`, `GeomCfg`, `Intersection`, `Status`

mod intersect;
pub mod rand;
mod types;

pub use intersect::{
    filter_to_segment, intersect_circle_line, intersect_circle_segment,
    segment_contains_projection, Intersection, Status,
};
pub use types::{Circle, GeomCfg, Point, Segment};
