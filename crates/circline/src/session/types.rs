//! Pointer events, drag state, and what a session hands back to callers.

use crate::geom2::{Circle, Intersection, Point, Segment};

/// Pointer input in the engine's coordinate space (see `Viewport::to_ndc`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
}

/// Drag gesture state.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `current` stays None until the pointer moves after `Down`.
    Dragging { start: Point, current: Option<Point> },
}

/// What has been finalized so far. Shapes never change once committed.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Stage {
    #[default]
    AwaitCircle,
    AwaitSegment {
        circle: Circle,
    },
    Committed {
        circle: Circle,
        segment: Segment,
        intersection: Intersection,
    },
}

/// Emitted by `Session::handle` when a drag commits a shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Commit {
    Circle(Circle),
    Segment {
        segment: Segment,
        intersection: Intersection,
    },
}

/// In-progress shape under the pointer. Recomputed on demand, never stored.
#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    Circle(Circle),
    Segment {
        segment: Segment,
        intersection: Intersection,
    },
}
