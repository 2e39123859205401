//! Batch experiments: random scenes → intersection table (CSV or Parquet).

use anyhow::{bail, Context, Result};
use circline::geom2::rand::{draw_scene, ReplayToken, SceneCfg};
use circline::geom2::{intersect_circle_segment, GeomCfg};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Parquet,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Format::Csv),
            Some("parquet") => Ok(Format::Parquet),
            other => bail!("unsupported output extension {other:?} (use .csv or .parquet)"),
        }
    }
}

/// One row per scene: inputs, status, and up to two points (null when absent).
pub fn scenes_frame(count: u64, seed: u64, scene: SceneCfg, geom: &GeomCfg) -> Result<DataFrame> {
    let mut index = Vec::new();
    let (mut cx, mut cy, mut r) = (Vec::new(), Vec::new(), Vec::new());
    let (mut x1, mut y1, mut x2, mut y2) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
    let mut status = Vec::new();
    let mut n_points = Vec::new();
    let (mut px1, mut py1, mut px2, mut py2) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());

    for i in 0..count {
        let Some(s) = draw_scene(scene, ReplayToken::new(seed, i)) else {
            bail!("scene sampler rejected configuration {scene:?}");
        };
        let res = intersect_circle_segment(&s.circle, &s.segment, geom);
        index.push(i);
        cx.push(s.circle.center.x);
        cy.push(s.circle.center.y);
        r.push(s.circle.radius);
        x1.push(s.segment.p1.x);
        y1.push(s.segment.p1.y);
        x2.push(s.segment.p2.x);
        y2.push(s.segment.p2.y);
        status.push(res.status.as_str());
        n_points.push(res.len() as u32);
        let first = res.points.first();
        let second = res.points.get(1);
        px1.push(first.map(|p| p.x));
        py1.push(first.map(|p| p.y));
        px2.push(second.map(|p| p.x));
        py2.push(second.map(|p| p.y));
    }

    let df = DataFrame::new(vec![
        Series::new("index".into(), index),
        Series::new("cx".into(), cx),
        Series::new("cy".into(), cy),
        Series::new("r".into(), r),
        Series::new("x1".into(), x1),
        Series::new("y1".into(), y1),
        Series::new("x2".into(), x2),
        Series::new("y2".into(), y2),
        Series::new("status".into(), status),
        Series::new("n_points".into(), n_points),
        Series::new("px1".into(), px1),
        Series::new("py1".into(), py1),
        Series::new("px2".into(), px2),
        Series::new("py2".into(), py2),
    ])?;
    Ok(df)
}

pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let format = Format::from_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        Format::Csv => CsvWriter::new(file).include_header(true).finish(df)?,
        Format::Parquet => {
            ParquetWriter::new(file).finish(df)?;
        }
    }
    Ok(())
}

/// Row counts per status, sorted by status name.
pub fn status_summary(path: &Path) -> Result<DataFrame> {
    let lf = match Format::from_path(path)? {
        Format::Csv => LazyCsvReader::new(path).with_has_header(true).finish()?,
        Format::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
    };
    let df = lf
        .group_by([col("status")])
        .agg([len().alias("n")])
        .sort_by_exprs(vec![col("status")], SortMultipleOptions::default())
        .collect()?;
    Ok(df)
}
