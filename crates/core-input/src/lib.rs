//! Key sources: blocking producers of logical key events for the session loop.
//!
//! Two implementations share the `KeySource` trait:
//! * `CrosstermKeySource` reads decoded terminal events through crossterm.
//! * `ByteKeySource` decodes the raw two-stage byte encoding (lead byte 0 or
//!   0xE0, then a scan code) from any `io::Read`.
//!
//! Each call blocks until one logical event is available. Raw input with no
//! logical mapping is dropped here and counted in `KEYPRESS_IGNORED`.

mod crossterm_source;
mod key_token;
pub mod scan_code;

pub use crossterm_source::CrosstermKeySource;
pub use scan_code::{ByteKeySource, ScanCodeDecoder};

use core_events::{Event, InputEvent, KEYPRESS_IGNORED, KEYPRESS_TOTAL, KeyEvent};
use std::sync::atomic::Ordering;

/// Blocking producer of session events.
pub trait KeySource {
    /// Block until the next event. Returns `Event::Shutdown` once the source is
    /// exhausted; every later call keeps returning `Event::Shutdown`.
    fn next_event(&mut self) -> anyhow::Result<Event>;
}

impl<T: KeySource + ?Sized> KeySource for Box<T> {
    fn next_event(&mut self) -> anyhow::Result<Event> {
        (**self).next_event()
    }
}

#[inline]
pub(crate) fn key_delivered(key: KeyEvent) -> Event {
    KEYPRESS_TOTAL.fetch_add(1, Ordering::Relaxed);
    tracing::trace!(target: "input", %key, "key");
    Event::Input(InputEvent::Key(key))
}

/// Record a raw input unit that produced no key. Only the numeric code is
/// logged, never surrounding text.
#[inline]
pub(crate) fn key_ignored(source: &'static str, code: u32) {
    KEYPRESS_IGNORED.fetch_add(1, Ordering::Relaxed);
    tracing::trace!(target: "input", source, code, "key_ignored");
}

#[cfg(test)]
mod tests {

    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing::dispatcher::Dispatch;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::layer::Layer;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::registry::Registry;

    #[derive(Clone, Default)]
    struct Capture {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    #[derive(Clone, Debug)]
    struct CapturedEvent {
        target: String,
        fields: Vec<(String, String)>,
    }

    #[derive(Default)]
    struct FieldCollector {
        fields: Vec<(String, String)>,
    }

    impl Visit for FieldCollector {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    impl<S> Layer<S> for Capture
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut collector = FieldCollector::default();
            event.record(&mut collector);
            let meta = event.metadata();
            self.events.lock().unwrap().push(CapturedEvent {
                target: meta.target().to_string(),
                fields: collector.fields,
            });
        }
    }

    #[test]
    fn unknown_scan_code_is_logged_by_code() {
        let capture = Capture::default();
        let events = capture.events.clone();
        let subscriber = Registry::default().with(capture);
        let dispatch = Dispatch::new(subscriber);

        tracing::dispatcher::with_default(&dispatch, || {
            let mut dec = crate::ScanCodeDecoder::default();
            assert_eq!(dec.feed(0xE0), None);
            assert_eq!(dec.feed(59), None, "F1 scan code has no mapping");
        });

        let events = events.lock().unwrap();
        let event = events
            .iter()
            .find(|e| e.target == "input")
            .expect("missing input event");
        assert!(
            event
                .fields
                .iter()
                .any(|(name, value)| name == "code" && value == "59"),
            "code field missing from event: {:?}",
            event.fields
        );
        assert!(
            event
                .fields
                .iter()
                .any(|(name, value)| name == "source" && value.contains("scan")),
            "source field missing from event"
        );
    }
}
