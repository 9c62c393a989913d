//! Input sources: DOM-style click events and periodic timer ticks.
//!
//! Both sources only ever enqueue through an [`Emitter`]; they never touch
//! the model.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Local};
use flume::{RecvTimeoutError, Sender};
use thiserror::Error;

use crate::{Clock, Emitter};

/// Kind of a UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Focus,
    Blur,
}

/// A UI event targeted at the element carrying `class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub class: String,
    pub kind: EventKind,
}

impl DomEvent {
    pub fn click(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            kind: EventKind::Click,
        }
    }

    /// Whether this is a click on `class`.
    pub fn is_click_on(&self, class: &str) -> bool {
        self.kind == EventKind::Click && self.class == class
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("unsupported selector '{0}': only class selectors like '.name' are supported")]
    Unsupported(String),

    #[error("class selector is missing a class name")]
    EmptyClass,
}

/// Source of UI events, selected by element class.
pub struct DomSource<Event: Send> {
    emitter: Emitter<Event>,
}

impl<Event> DomSource<Event>
where
    Event: From<DomEvent> + Send,
{
    pub fn new(emitter: Emitter<Event>) -> Self {
        Self { emitter }
    }

    /// Select elements by class selector, e.g. `".add"`.
    pub fn select(&self, selector: &str) -> Result<Selection<Event>, SelectorError> {
        let class = selector
            .strip_prefix('.')
            .ok_or_else(|| SelectorError::Unsupported(selector.to_string()))?;
        if class.is_empty() {
            return Err(SelectorError::EmptyClass);
        }
        if class.contains(|c: char| c.is_whitespace() || c == '.' || c == '#') {
            return Err(SelectorError::Unsupported(selector.to_string()));
        }

        Ok(Selection {
            class: class.to_string(),
            emitter: self.emitter.clone(),
        })
    }
}

/// Elements matching one class, ready to receive events.
pub struct Selection<Event: Send> {
    class: String,
    emitter: Emitter<Event>,
}

impl<Event> Selection<Event>
where
    Event: From<DomEvent> + Send,
{
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn emit(&self, kind: EventKind) {
        tracing::trace!(class = %self.class, ?kind, "dom event");
        self.emitter.emit(Event::from(DomEvent {
            class: self.class.clone(),
            kind,
        }));
    }

    pub fn click(&self) {
        self.emit(EventKind::Click);
    }
}

#[derive(Debug, Error)]
pub enum TimeSourceError {
    #[error("periodic interval must be greater than zero")]
    ZeroPeriod,

    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Source of timestamps, emitted periodically.
pub struct TimeSource<Event: Send> {
    emitter: Emitter<Event>,
    clock: Arc<dyn Clock>,
}

impl<Event: Send + 'static> TimeSource<Event> {
    pub fn new(emitter: Emitter<Event>, clock: Arc<dyn Clock>) -> Self {
        Self { emitter, clock }
    }

    /// Emit `to_event(now)` every `period` on a background thread.
    ///
    /// The first emission happens one full period after the call. Ticks
    /// stop when the returned handle is stopped or dropped, or when the
    /// runtime stops receiving.
    pub fn periodic<F>(self, period: Duration, to_event: F) -> Result<Periodic, TimeSourceError>
    where
        F: Fn(DateTime<Local>) -> Event + Send + 'static,
    {
        if period.is_zero() {
            return Err(TimeSourceError::ZeroPeriod);
        }

        let (stop_tx, stop_rx) = flume::bounded::<()>(1);
        let TimeSource { emitter, clock } = self;

        let thread = thread::Builder::new()
            .name("time-source".into())
            .spawn(move || {
                tracing::debug!(?period, "timer started");
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            if emitter.is_closed() {
                                break;
                            }
                            emitter.emit(to_event(clock.now()));
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::debug!("timer stopped");
            })?;

        Ok(Periodic {
            stop: Some(stop_tx),
            thread: Some(thread),
        })
    }
}

/// Handle to a running periodic emission.
pub struct Periodic {
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Periodic {
    /// Stop ticking and wait for the timer thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the timer with `Disconnected`.
        self.stop.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("timer thread panicked");
            }
        }
    }
}

impl Drop for Periodic {
    fn drop(&mut self) {
        self.shutdown();
    }
}
