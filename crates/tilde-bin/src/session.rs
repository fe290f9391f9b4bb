//! The single-threaded session loop.
//!
//! Each iteration blocks for one event, applies it completely (translate,
//! dispatch, auto-scroll) and then renders if anything visible changed. The
//! loop exits on Quit or when the key source is exhausted; the caller then
//! restores the terminal and saves.

use anyhow::Result;
use core_actions::{dispatch, translate_key};
use core_config::Config;
use core_events::{Event, InputEvent, KEYPRESS_IGNORED, KEYPRESS_TOTAL, KeyEvent};
use core_input::KeySource;
use core_model::EditorModel;
use core_render::build_frame;
use core_render::render_engine::RenderEngine;
use core_state::EditorState;
use std::fmt;
use std::io::Write;
use std::sync::atomic::Ordering;
use tracing::{debug, error, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownReason {
    /// Escape pressed.
    Quit,
    /// The key source ran dry (stdin closed).
    InputClosed,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Quit => "quit",
            ShutdownReason::InputClosed => "input_closed",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum LoopControl {
    Continue { render: bool },
    Break { reason: ShutdownReason },
}

pub(crate) struct Session<'c, K, W> {
    model: EditorModel,
    keys: K,
    out: W,
    engine: RenderEngine,
    config: &'c Config,
    text_rows: usize,
}

impl<'c, K: KeySource, W: Write> Session<'c, K, W> {
    pub(crate) fn new(
        model: EditorModel,
        keys: K,
        out: W,
        config: &'c Config,
        terminal_rows: Option<u16>,
    ) -> Self {
        let text_rows = config.text_rows(terminal_rows);
        debug!(target: "runtime", ?terminal_rows, text_rows, "session_viewport");
        Self {
            model,
            keys,
            out,
            engine: RenderEngine::new(config.diff_rows()),
            config,
            text_rows,
        }
    }

    pub(crate) fn run(&mut self) -> Result<ShutdownReason> {
        self.auto_scroll();
        self.render();

        let loop_span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter_loop = loop_span.enter();

        let reason = loop {
            let control = match self.keys.next_event()? {
                Event::Input(InputEvent::Key(key)) => self.handle_key(&key),
                Event::Input(InputEvent::Resize(cols, rows)) => self.handle_resize(cols, rows),
                Event::Shutdown => LoopControl::Break {
                    reason: ShutdownReason::InputClosed,
                },
            };
            match control {
                LoopControl::Break { reason } => break reason,
                LoopControl::Continue { render } => {
                    let scrolled = self.auto_scroll();
                    if render || scrolled {
                        self.render();
                    }
                }
            }
        };

        let metrics = self.engine.metrics_snapshot();
        info!(
            target: "runtime",
            reason = reason.as_str(),
            keys = KEYPRESS_TOTAL.load(Ordering::Relaxed),
            keys_ignored = KEYPRESS_IGNORED.load(Ordering::Relaxed),
            full_frames = metrics.full_frames,
            partial_frames = metrics.partial_frames,
            rows_repainted = metrics.rows_repainted,
            rows_skipped = metrics.rows_skipped,
            "session_end"
        );
        Ok(reason)
    }

    fn handle_key(&mut self, key: &KeyEvent) -> LoopControl {
        let Some(action) = translate_key(key) else {
            trace!(target: "runtime", %key, "key_unmapped");
            return LoopControl::Continue { render: false };
        };
        let result = dispatch(action, &mut self.model);
        if result.quit {
            return LoopControl::Break {
                reason: ShutdownReason::Quit,
            };
        }
        LoopControl::Continue {
            render: result.needs_render(),
        }
    }

    fn handle_resize(&mut self, cols: u16, rows: u16) -> LoopControl {
        self.text_rows = self.config.text_rows(Some(rows));
        debug!(target: "runtime", cols, rows, text_rows = self.text_rows, "resize");
        self.engine.invalidate();
        LoopControl::Continue { render: true }
    }

    fn auto_scroll(&mut self) -> bool {
        let (state, view) = self.model.split_state_and_active_view();
        view.auto_scroll(state, self.text_rows)
    }

    fn render(&mut self) {
        let frame = build_frame(
            self.model.state(),
            self.model.active_view(),
            self.text_rows,
        );
        if let Err(e) = self.engine.render_to(&frame, &mut self.out) {
            error!(target: "render", ?e, "render_error");
        }
    }

    #[cfg(test)]
    pub(crate) fn model(&self) -> &EditorModel {
        &self.model
    }

    pub(crate) fn into_state(self) -> EditorState {
        self.model.into_state()
    }
}
