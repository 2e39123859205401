use anyhow::{bail, Context, Result};
use circline::geom2::rand::SceneCfg;
use circline::geom2::{intersect_circle_segment, Circle, GeomCfg, Intersection, Segment};
use circline::session::{Session, Viewport};
use circline::Vec2;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod replay;
mod report;
mod sample;

#[derive(Parser)]
#[command(name = "circline")]
#[command(about = "Circle/segment intersection tools")]
struct Cmd {
    #[command(flatten)]
    tol: Tolerances,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct Tolerances {
    /// Relative tolerance on the discriminant for tangency
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_tangent)]
    eps_tangent: f64,
    /// Squared length below which a segment counts as zero-length
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_degenerate)]
    eps_degenerate: f64,
}

impl From<Tolerances> for GeomCfg {
    fn from(t: Tolerances) -> Self {
        GeomCfg {
            eps_degenerate: t.eps_degenerate,
            eps_tangent: t.eps_tangent,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Intersect one circle with one segment
    Intersect {
        /// Circle as `cx,cy,r`
        #[arg(long, allow_hyphen_values = true)]
        circle: String,
        /// Segment as `x1,y1,x2,y2`
        #[arg(long, allow_hyphen_values = true)]
        segment: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay pixel-space pointer events (JSON array) through an interactive session
    Replay {
        #[arg(long)]
        events: PathBuf,
        #[arg(long, default_value_t = 700.0)]
        width: f64,
        #[arg(long, default_value_t = 700.0)]
        height: f64,
    },
    /// Sample random scenes and write results to .csv or .parquet
    Sample {
        #[arg(long, default_value_t = 1000)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0.1)]
        tangent_frac: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Count rows per status in a sampled table
    Summary {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg::from(cmd.tol);
    match cmd.action {
        Action::Intersect {
            circle,
            segment,
            json,
        } => intersect(&circle, &segment, json, &cfg),
        Action::Replay {
            events,
            width,
            height,
        } => replay(events, width, height, cfg),
        Action::Sample {
            count,
            seed,
            tangent_frac,
            out,
        } => sample(count, seed, tangent_frac, out, &cfg),
        Action::Summary { input } => summary(input),
        Action::Report => report(),
    }
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("expected {N} comma-separated numbers, got {:?}", s);
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("invalid number {part:?} in {s:?}"))?;
    }
    Ok(out)
}

#[derive(Serialize)]
struct IntersectionOut {
    status: &'static str,
    points: Vec<[f64; 2]>,
}

impl From<&Intersection> for IntersectionOut {
    fn from(res: &Intersection) -> Self {
        Self {
            status: res.status.as_str(),
            points: res.points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

fn intersect(circle: &str, segment: &str, json: bool, cfg: &GeomCfg) -> Result<()> {
    let [cx, cy, r] = parse_floats::<3>(circle)?;
    let [x1, y1, x2, y2] = parse_floats::<4>(segment)?;
    let circle = Circle::new(Vec2::new(cx, cy), r).context("circle must be finite")?;
    let segment =
        Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2)).context("segment must be finite")?;
    let res = intersect_circle_segment(&circle, &segment, cfg);
    tracing::info!(status = res.status.as_str(), count = res.len(), "intersect");
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&IntersectionOut::from(&res))?
        );
    } else {
        println!("{}", report::describe_circle(&circle));
        println!("{}", report::describe_segment(&segment));
        println!("{}", report::describe_intersection(&res));
    }
    Ok(())
}

fn replay(events: PathBuf, width: f64, height: f64, cfg: GeomCfg) -> Result<()> {
    let vp = Viewport::new(width, height).context("viewport must be positive and finite")?;
    let evs = replay::load_events(&events)?;
    tracing::info!(events = evs.len(), path = %events.display(), "replay");
    let mut session = Session::new(cfg);
    replay::replay(&mut session, &vp, &evs);
    if let Some(c) = session.circle() {
        println!("{}", report::describe_circle(c));
    }
    if let Some(s) = session.segment() {
        println!("{}", report::describe_segment(s));
    }
    if let Some(res) = session.intersection() {
        println!("{}", report::describe_intersection(res));
    }
    Ok(())
}

fn sample(count: u64, seed: u64, tangent_frac: f64, out: PathBuf, cfg: &GeomCfg) -> Result<()> {
    tracing::info!(count, seed, tangent_frac, out = %out.display(), "sample");
    let scene = SceneCfg {
        tangent_frac,
        ..SceneCfg::default()
    };
    let mut df = sample::scenes_frame(count, seed, scene, cfg)?;
    sample::write_frame(&mut df, &out)?;
    let params = serde_json::json!({
        "count": count,
        "seed": seed,
        "tangent_frac": tangent_frac,
        "eps_tangent": cfg.eps_tangent,
        "eps_degenerate": cfg.eps_degenerate,
    });
    let prov = provenance::write_sidecar(&out, provenance::Provenance::new(params))?;
    tracing::info!(rows = df.height(), provenance = %prov.display(), "sample_written");
    Ok(())
}

fn summary(input: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), "summary");
    let df = sample::status_summary(&input)?;
    println!("{df}");
    Ok(())
}

fn report() -> Result<()> {
    let prov = provenance::Provenance::new(serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
