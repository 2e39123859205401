//! Text presentation of committed shapes and results (two decimals, fixed wording).

use circline::geom2::{Circle, Intersection, Point, Segment};

#[inline]
fn pt(p: &Point) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}

pub fn describe_circle(c: &Circle) -> String {
    format!("Circle: center {}, radius {:.2}", pt(&c.center), c.radius)
}

pub fn describe_segment(s: &Segment) -> String {
    format!("Line segment: {} ~ {}", pt(&s.p1), pt(&s.p2))
}

/// Empty results read "No Intersection" regardless of why they are empty.
pub fn describe_intersection(res: &Intersection) -> String {
    match res.points.as_slice() {
        [] => "No Intersection".to_string(),
        [p] => format!("Intersection Points: 1 Point 1: {}", pt(p)),
        [p, q, ..] => format!("Intersection Points: 2 Points 1: {}, 2: {}", pt(p), pt(q)),
    }
}
