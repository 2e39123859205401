//! Random circle/segment scenes (uniform boxes + replay tokens).
//!
//! Model
//! - Circle center and both segment endpoints are uniform in the square
//!   `[-half_extent, half_extent]²`; the radius is uniform in `[radius_min, radius_max]`.
//! - With probability `tangent_frac` the segment is replaced by a chord of the
//!   tangent line at a random boundary angle, which exercises the tangency path.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::{Circle, Point, Segment};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scene sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub half_extent: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Probability in [0, 1] of drawing a tangent segment.
    pub tangent_frac: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            half_extent: 1.0,
            radius_min: 0.05,
            radius_max: 0.8,
            tangent_frac: 0.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One finalized circle + segment pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub circle: Circle,
    pub segment: Segment,
}

/// Draw a random scene. None if the configuration is not finite or the box is empty.
pub fn draw_scene(cfg: SceneCfg, tok: ReplayToken) -> Option<Scene> {
    let h = cfg.half_extent;
    // `gen_range` needs a finite span: `2h` and the radius range must not overflow.
    if !(2.0 * h).is_finite() || h <= 0.0 {
        return None;
    }
    let r_lo = cfg.radius_min.max(0.0);
    let r_hi = cfg.radius_max.max(r_lo);
    if !r_hi.is_finite() {
        return None;
    }
    let mut rng = tok.to_std_rng();

    let center = uniform_point(&mut rng, h);
    let radius = if r_hi > r_lo {
        rng.gen_range(r_lo..=r_hi)
    } else {
        r_lo
    };
    let circle = Circle::new(center, radius)?;

    let segment = if rng.gen::<f64>() < cfg.tangent_frac.clamp(0.0, 1.0) {
        let theta = rng.gen::<f64>() * std::f64::consts::TAU;
        let normal = Vector2::new(theta.cos(), theta.sin());
        let touch = center + normal * radius;
        let along = Vector2::new(-normal.y, normal.x);
        let back = rng.gen_range((0.1 * h)..=h);
        let fwd = rng.gen_range((0.1 * h)..=h);
        Segment::new(touch - along * back, touch + along * fwd)?
    } else {
        Segment::new(uniform_point(&mut rng, h), uniform_point(&mut rng, h))?
    };
    Some(Scene { circle, segment })
}

#[inline]
fn uniform_point<R: Rng>(rng: &mut R, h: f64) -> Point {
    Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_token_is_reproducible() {
        let cfg = SceneCfg::default();
        let a = draw_scene(cfg, ReplayToken::new(7, 3)).unwrap();
        let b = draw_scene(cfg, ReplayToken::new(7, 3)).unwrap();
        assert_eq!(a, b);
        let c = draw_scene(cfg, ReplayToken::new(7, 4)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn scenes_respect_bounds() {
        let cfg = SceneCfg {
            tangent_frac: 0.0,
            ..SceneCfg::default()
        };
        for i in 0..200 {
            let s = draw_scene(cfg, ReplayToken::new(11, i)).unwrap();
            assert!(s.circle.radius >= cfg.radius_min && s.circle.radius <= cfg.radius_max);
            for p in [s.circle.center, s.segment.p1, s.segment.p2] {
                assert!(p.x.abs() <= cfg.half_extent && p.y.abs() <= cfg.half_extent);
            }
        }
    }

    #[test]
    fn tangent_scenes_touch_the_circle() {
        let cfg = SceneCfg {
            tangent_frac: 1.0,
            ..SceneCfg::default()
        };
        let geom = crate::geom2::GeomCfg::default();
        for i in 0..50 {
            let s = draw_scene(cfg, ReplayToken::new(5, i)).unwrap();
            let dist = s.segment.line_distance(s.circle.center, &geom).unwrap();
            assert!((dist - s.circle.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_empty_box() {
        let cfg = SceneCfg {
            half_extent: 0.0,
            ..SceneCfg::default()
        };
        assert!(draw_scene(cfg, ReplayToken::new(1, 0)).is_none());
    }

    #[test]
    fn rejects_overflowing_config_instead_of_panicking() {
        let huge_box = SceneCfg {
            half_extent: f64::MAX,
            ..SceneCfg::default()
        };
        assert!(draw_scene(huge_box, ReplayToken::new(1, 0)).is_none());
        let inf_radius = SceneCfg {
            radius_max: f64::INFINITY,
            ..SceneCfg::default()
        };
        assert!(draw_scene(inf_radius, ReplayToken::new(1, 0)).is_none());
        let inf_min = SceneCfg {
            radius_min: f64::INFINITY,
            ..SceneCfg::default()
        };
        assert!(draw_scene(inf_min, ReplayToken::new(1, 0)).is_none());
        let nan_box = SceneCfg {
            half_extent: f64::NAN,
            ..SceneCfg::default()
        };
        assert!(draw_scene(nan_box, ReplayToken::new(1, 0)).is_none());
    }
}
