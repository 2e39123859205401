//! Sweep a horizontal segment across the top of a unit circle and print how the
//! classification changes around the tangent height.
//!
//! Usage:
//!   cargo run -p circline --example tangent_sweep -- [steps]

use circline::prelude::*;

fn main() {
    let steps: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    let cfg = GeomCfg::default();
    let Some(circle) = Circle::new(Vec2::new(0.0, 0.0), 1.0) else {
        return;
    };
    for k in 0..=steps {
        let y = 0.98 + 0.04 * (k as f64) / (steps.max(1) as f64);
        let Some(seg) = Segment::new(Vec2::new(-2.0, y), Vec2::new(2.0, y)) else {
            continue;
        };
        let res = intersect_circle_segment(&circle, &seg, &cfg);
        let pts: Vec<String> = res
            .points
            .iter()
            .map(|p| format!("({:.4}, {:.4})", p.x, p.y))
            .collect();
        println!("y={y:.4}  {:<10} {}", res.status.as_str(), pts.join(" "));
    }
}
