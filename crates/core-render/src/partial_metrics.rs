//! Render path counters.
//!
//! Records which emission strategy each frame took and how many rows were
//! actually written versus skipped because they matched the previous frame.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RenderPathMetrics {
    /// Frames painted after a full clear (first frame, height change, forced).
    pub full_frames: AtomicU64,
    /// Frames that repainted only changed rows.
    pub partial_frames: AtomicU64,
    /// Full repaints forced by a change of frame height.
    pub resize_invalidations: AtomicU64,
    pub rows_repainted: AtomicU64,
    pub rows_skipped: AtomicU64,
    /// Duration (ns) of the most recent render call.
    pub last_render_ns: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderPathMetricsSnapshot {
    pub full_frames: u64,
    pub partial_frames: u64,
    pub resize_invalidations: u64,
    pub rows_repainted: u64,
    pub rows_skipped: u64,
    pub last_render_ns: u64,
}

impl RenderPathMetrics {
    pub fn snapshot(&self) -> RenderPathMetricsSnapshot {
        RenderPathMetricsSnapshot {
            full_frames: self.full_frames.load(Ordering::Relaxed),
            partial_frames: self.partial_frames.load(Ordering::Relaxed),
            resize_invalidations: self.resize_invalidations.load(Ordering::Relaxed),
            rows_repainted: self.rows_repainted.load(Ordering::Relaxed),
            rows_skipped: self.rows_skipped.load(Ordering::Relaxed),
            last_render_ns: self.last_render_ns.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn add(counter: &AtomicU64, n: u64) {
        counter.fetch_add(n, Ordering::Relaxed);
    }
}
