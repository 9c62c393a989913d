//! A counter and live clock driven by a small reducer-stream runtime.
//!
//! Sources (clicks, timer ticks) feed one queue. The [`Runtime`] maps each
//! event to a [`Reducer`] through [`Component::intent`], folds it into the
//! model it owns, and renders [`Component::view`] of the result.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use counter_clock::app::{intent, AppEvent, CounterApp};
//! use counter_clock::{DomEvent, SystemClock, TestRenderer, TestRuntime};
//!
//! let renderer = TestRenderer::new();
//! let app = CounterApp::new(Arc::new(SystemClock), "Haro");
//! let mut driver = TestRuntime::new(app, renderer.clone()).run();
//!
//! driver.emitter().emit(AppEvent::Dom(DomEvent::click(intent::ADD)));
//! driver.emitter().emit(AppEvent::Dom(DomEvent::click(intent::ADD)));
//! driver.process_events();
//!
//! assert_eq!(driver.state().count, 2);
//! let page = renderer.last().unwrap();
//! assert_eq!(page.find_all_by_tag("span")[0].text_content(), "Counter: 2");
//! ```

// Module declarations
pub mod app;
pub mod clock;
pub mod config;
mod emitter;
mod logic;
pub mod reducer;
mod renderer;
mod runtime;
pub mod sources;
pub mod vdom;

// Public re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigError};
pub use emitter::Emitter;
pub use logic::Component;
pub use reducer::Reducer;
pub use renderer::{Renderer, TerminalRenderer};
pub use runtime::Runtime;
pub use sources::{DomEvent, DomSource, EventKind, Periodic, Selection, TimeSource};
pub use vdom::{Element, VNode};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{TestDriver, TestRuntime};
