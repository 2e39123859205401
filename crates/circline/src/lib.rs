//! Circle/segment intersection and the interaction session that drives it.
//!
//! - `geom2`: pure engine (`intersect_circle_line`, `filter_to_segment`,
//!   `intersect_circle_segment`) plus random scene sampling.
//! - `session`: pointer-drag state machine producing one circle and one segment.

pub mod geom2;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_scene, ReplayToken, Scene, SceneCfg};
    pub use crate::geom2::{
        filter_to_segment, intersect_circle_line, intersect_circle_segment, Circle, GeomCfg,
        Intersection, Point, Segment, Status,
    };
    pub use crate::session::{Commit, PointerEvent, Preview, Session, Viewport};
    pub use nalgebra::Vector2 as Vec2;
}
