//! The counter-and-clock application.
//!
//! ```text
//! DomSource ──┐
//! TimeSource ─┼─→ intent ──→ Reducer ──→ AppState ──→ view ──→ Renderer
//! init ───────┘
//! ```

pub mod intent;
pub mod state;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::sources::{DomSource, Periodic, TimeSource, TimeSourceError};
use crate::vdom::VNode;
use crate::{Clock, Component, Reducer, Renderer, Runtime};

pub use state::{AppEvent, AppState};

/// Composition root: intent and view of the counter page.
pub struct CounterApp {
    clock: Arc<dyn Clock>,
    greeting: String,
}

/// The runtime specialised to the counter page.
pub type CounterRuntime<R> = Runtime<AppEvent, AppState, VNode, CounterApp, R>;

/// A runtime with its sources attached.
///
/// Dropping `dom` and `ticker` closes the queue, which ends
/// [`Runtime::run`].
pub struct Wiring<R: Renderer<VNode>> {
    pub runtime: CounterRuntime<R>,
    pub dom: DomSource<AppEvent>,
    pub ticker: Periodic,
}

impl CounterApp {
    pub fn new(clock: Arc<dyn Clock>, greeting: impl Into<String>) -> Self {
        Self {
            clock,
            greeting: greeting.into(),
        }
    }

    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self::new(clock, config.greeting.clone())
    }

    /// Build a runtime and attach a DOM source and a clock ticking every
    /// `tick_interval`.
    pub fn wire<R: Renderer<VNode>>(
        self,
        tick_interval: Duration,
        renderer: R,
    ) -> Result<Wiring<R>, TimeSourceError> {
        let clock = self.clock.clone();
        let runtime = Runtime::new(self, renderer);

        let dom = DomSource::new(runtime.emitter());
        let ticker = TimeSource::new(runtime.emitter(), clock).periodic(tick_interval, AppEvent::Tick)?;

        Ok(Wiring {
            runtime,
            dom,
            ticker,
        })
    }
}

impl Component<AppEvent, AppState, VNode> for CounterApp {
    fn init(&self) -> Reducer<AppState> {
        intent::init(self.clock.now())
    }

    fn intent(&self, event: AppEvent) -> Option<Reducer<AppState>> {
        intent::intent(event)
    }

    fn view(&self, model: &AppState) -> VNode {
        view::view(model, &self.greeting)
    }
}
