//! RenderEngine: emits frames to a terminal sink, repainting only rows whose
//! encoded text changed since the previous frame.
//!
//! A full repaint (clear screen, then every row) happens on the first frame,
//! whenever the frame height differs from the previous one, after
//! `invalidate`, or on every frame when row diffing is disabled. Otherwise each
//! changed row is repainted as `MoveTo(0, y)`, `ClearLine`, `Print(row)`.
//! Both paths leave the screen identical to a full repaint of the same frame.

use crate::Frame;
use crate::partial_metrics::{RenderPathMetrics, RenderPathMetricsSnapshot};
use crate::writer::Writer;
use anyhow::Result;
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    Full,
    Partial,
}

pub struct RenderEngine {
    diff_rows: bool,
    /// Encoded rows of the last emitted frame; `None` forces a full repaint.
    prev_rows: Option<Vec<String>>,
    metrics: RenderPathMetrics,
    last_path: Option<RenderPath>,
    last_repaint_rows: Vec<usize>,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RenderEngine {
    pub fn new(diff_rows: bool) -> Self {
        Self {
            diff_rows,
            prev_rows: None,
            metrics: RenderPathMetrics::default(),
            last_path: None,
            last_repaint_rows: Vec::new(),
        }
    }

    /// Drop the previous-frame cache; the next render clears and repaints.
    pub fn invalidate(&mut self) {
        self.prev_rows = None;
    }

    pub fn metrics_snapshot(&self) -> RenderPathMetricsSnapshot {
        self.metrics.snapshot()
    }
    pub fn last_path(&self) -> Option<RenderPath> {
        self.last_path
    }
    /// Screen rows written by the most recent render.
    pub fn last_repaint_rows(&self) -> &[usize] {
        &self.last_repaint_rows
    }

    /// Compute the commands for `frame` without emitting them.
    pub fn plan(&mut self, frame: &Frame) -> Writer {
        let rows = frame.ansi_rows();
        let mut w = Writer::new();
        self.last_repaint_rows.clear();

        let prev = if self.diff_rows {
            self.prev_rows.take()
        } else {
            None
        };
        let path = match prev {
            Some(ref p) if p.len() == rows.len() => RenderPath::Partial,
            Some(_) => {
                RenderPathMetrics::add(&self.metrics.resize_invalidations, 1);
                RenderPath::Full
            }
            None => RenderPath::Full,
        };

        match path {
            RenderPath::Full => {
                w.clear_all();
                for (y, row) in rows.iter().enumerate() {
                    w.move_to(0, y as u16);
                    w.print(row.as_str());
                    self.last_repaint_rows.push(y);
                }
                RenderPathMetrics::add(&self.metrics.full_frames, 1);
            }
            RenderPath::Partial => {
                let prev = prev.unwrap_or_default();
                for (y, (old, new)) in prev.iter().zip(rows.iter()).enumerate() {
                    if old == new {
                        continue;
                    }
                    w.move_to(0, y as u16);
                    w.clear_line();
                    w.print(new.as_str());
                    self.last_repaint_rows.push(y);
                }
                RenderPathMetrics::add(&self.metrics.partial_frames, 1);
            }
        }

        let repainted = self.last_repaint_rows.len() as u64;
        RenderPathMetrics::add(&self.metrics.rows_repainted, repainted);
        RenderPathMetrics::add(
            &self.metrics.rows_skipped,
            rows.len() as u64 - repainted,
        );
        tracing::trace!(target: "render.engine", ?path, rows = rows.len(), repainted, "frame_planned");
        self.last_path = Some(path);
        self.prev_rows = Some(rows);
        w
    }

    /// Plan and emit `frame` into `out`.
    pub fn render_to<W: Write>(&mut self, frame: &Frame, out: &mut W) -> Result<()> {
        let start = Instant::now();
        let w = self.plan(frame);
        w.flush_to(out)?;
        self.metrics.last_render_ns.store(
            start.elapsed().as_nanos() as u64,
            std::sync::atomic::Ordering::Relaxed,
        );
        Ok(())
    }
}
