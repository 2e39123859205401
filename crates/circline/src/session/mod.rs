//! Interaction session: pointer drags → one circle, one segment, one result.
//!
//! State machine
//! - Drag gesture: `Idle → Dragging → (commit) → Idle`.
//! - Stage: `AwaitCircle → AwaitSegment → Committed`. The first committed drag is
//!   the circle (start = center, drag distance = radius), the second the segment
//!   (start = p1, release = p2). The intersection is computed once, on commit.
//! - After `Committed`, further drags are ignored until `reset`.
//!
//! The geometry engine stays pure; all mutable state lives here.
//!
//! Code cross-refs: `geom2::intersect_circle_segment`, `Viewport`

mod types;
mod viewport;

pub use types::{Commit, DragState, PointerEvent, Preview, Stage};
pub use viewport::Viewport;

use crate::geom2::{intersect_circle_segment, Circle, GeomCfg, Intersection, Point, Segment};

#[derive(Clone, Debug, Default)]
pub struct Session {
    cfg: GeomCfg,
    stage: Stage,
    drag: DragState,
}

impl Session {
    pub fn new(cfg: GeomCfg) -> Self {
        Self {
            cfg,
            stage: Stage::AwaitCircle,
            drag: DragState::Idle,
        }
    }

    #[inline]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }
    #[inline]
    pub fn drag(&self) -> DragState {
        self.drag
    }
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self.stage, Stage::Committed { .. })
    }

    pub fn circle(&self) -> Option<&Circle> {
        match &self.stage {
            Stage::AwaitCircle => None,
            Stage::AwaitSegment { circle } | Stage::Committed { circle, .. } => Some(circle),
        }
    }
    pub fn segment(&self) -> Option<&Segment> {
        match &self.stage {
            Stage::Committed { segment, .. } => Some(segment),
            _ => None,
        }
    }
    pub fn intersection(&self) -> Option<&Intersection> {
        match &self.stage {
            Stage::Committed { intersection, .. } => Some(intersection),
            _ => None,
        }
    }

    /// Drop all shapes and any in-progress drag.
    pub fn reset(&mut self) {
        tracing::debug!("session reset");
        self.stage = Stage::AwaitCircle;
        self.drag = DragState::Idle;
    }

    /// Feed one pointer event. Returns the shape committed by this event, if any.
    pub fn handle(&mut self, ev: PointerEvent) -> Option<Commit> {
        if self.is_complete() {
            return None;
        }
        match (ev, self.drag) {
            (PointerEvent::Down(p), DragState::Idle) => {
                self.drag = DragState::Dragging {
                    start: p,
                    current: None,
                };
                None
            }
            (PointerEvent::Move(p), DragState::Dragging { start, .. }) => {
                self.drag = DragState::Dragging {
                    start,
                    current: Some(p),
                };
                None
            }
            (PointerEvent::Up, DragState::Dragging { start, current }) => {
                self.drag = DragState::Idle;
                let end = current?;
                self.commit(start, end)
            }
            _ => None,
        }
    }

    fn commit(&mut self, start: Point, end: Point) -> Option<Commit> {
        match &self.stage {
            Stage::AwaitCircle => {
                let Some(circle) = Circle::from_drag(start, end) else {
                    tracing::warn!("dropping circle drag with non-finite coordinates");
                    return None;
                };
                tracing::debug!(
                    cx = circle.center.x,
                    cy = circle.center.y,
                    r = circle.radius,
                    "circle committed"
                );
                self.stage = Stage::AwaitSegment { circle };
                Some(Commit::Circle(circle))
            }
            Stage::AwaitSegment { circle } => {
                let circle = *circle;
                let Some(segment) = Segment::new(start, end) else {
                    tracing::warn!("dropping segment drag with non-finite coordinates");
                    return None;
                };
                let intersection = intersect_circle_segment(&circle, &segment, &self.cfg);
                tracing::debug!(
                    status = intersection.status.as_str(),
                    count = intersection.len(),
                    "segment committed"
                );
                self.stage = Stage::Committed {
                    circle,
                    segment,
                    intersection: intersection.clone(),
                };
                Some(Commit::Segment {
                    segment,
                    intersection,
                })
            }
            Stage::Committed { .. } => None,
        }
    }

    /// Live shape for the drag in progress, or None when idle / before the first move.
    pub fn preview(&self) -> Option<Preview> {
        let DragState::Dragging {
            start,
            current: Some(end),
        } = self.drag
        else {
            return None;
        };
        match &self.stage {
            Stage::AwaitCircle => Circle::from_drag(start, end).map(Preview::Circle),
            Stage::AwaitSegment { circle } => {
                let segment = Segment::new(start, end)?;
                let intersection = intersect_circle_segment(circle, &segment, &self.cfg);
                Some(Preview::Segment {
                    segment,
                    intersection,
                })
            }
            Stage::Committed { .. } => None,
        }
    }
}
