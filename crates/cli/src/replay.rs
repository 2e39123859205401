//! Replay pixel-space pointer events through a `Session`.
//!
//! Input is a JSON array such as
//! `[{"kind":"down","x":350,"y":350},{"kind":"move","x":420,"y":350},{"kind":"up"}]`.

use anyhow::{Context, Result};
use circline::session::{PointerEvent, Session, Viewport};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PixelEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
}

impl PixelEvent {
    pub fn to_pointer(self, vp: &Viewport) -> PointerEvent {
        match self {
            PixelEvent::Down { x, y } => PointerEvent::Down(vp.to_ndc(x, y)),
            PixelEvent::Move { x, y } => PointerEvent::Move(vp.to_ndc(x, y)),
            PixelEvent::Up => PointerEvent::Up,
        }
    }
}

pub fn parse_events(text: &str) -> Result<Vec<PixelEvent>> {
    serde_json::from_str(text).context("parsing pointer events")
}

pub fn load_events(path: &Path) -> Result<Vec<PixelEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading events from {}", path.display()))?;
    parse_events(&text)
}

/// Feed all events in order; returns how many shapes were committed.
pub fn replay(session: &mut Session, vp: &Viewport, events: &[PixelEvent]) -> usize {
    let mut commits = 0;
    for (i, ev) in events.iter().enumerate() {
        if session.handle(ev.to_pointer(vp)).is_some() {
            commits += 1;
            tracing::info!(event = i, "commit");
        }
    }
    commits
}
