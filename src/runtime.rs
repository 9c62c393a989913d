//! The runtime that folds the reducer stream into the model.

use core::marker::PhantomData;

use flume::Receiver;

use crate::{Component, Emitter, Reducer, Renderer};

/// Owns the canonical model and the one place it is replaced.
struct StateLoop<Event, Model, Tree, Logic, Render>
where
    Event: Send,
    Logic: Component<Event, Model, Tree>,
    Render: Renderer<Tree>,
{
    logic: Logic,
    renderer: Render,
    model: Model,
    _marker: PhantomData<fn(Event) -> Tree>,
}

impl<Event, Model, Tree, Logic, Render> StateLoop<Event, Model, Tree, Logic, Render>
where
    Event: Send,
    Model: Default,
    Logic: Component<Event, Model, Tree>,
    Render: Renderer<Tree>,
{
    fn new(logic: Logic, renderer: Render) -> Self {
        Self {
            logic,
            renderer,
            model: Model::default(),
            _marker: PhantomData,
        }
    }

    fn start(&mut self) {
        let init = self.logic.init();
        self.apply(init);
    }

    fn step(&mut self, event: Event) {
        match self.logic.intent(event) {
            Some(reducer) => self.apply(reducer),
            None => tracing::trace!("event filtered out, no reducer"),
        }
    }

    fn apply(&mut self, reducer: Reducer<Model>) {
        tracing::debug!(reducer = reducer.name(), "applying reducer");
        self.model = reducer.apply(&self.model);

        let tree = self.logic.view(&self.model);
        tracing::trace!("rendering");
        self.renderer.render(tree);
    }
}

/// The runtime that drives the unidirectional loop.
///
/// 1. Applies [`Component::init`] to `Model::default()` and renders it
/// 2. Receives events from every [`Emitter`] through one fan-in queue
/// 3. Maps each event to a reducer via [`Component::intent`]
/// 4. Applies the reducer, projects the new model with
///    [`Component::view`] and hands the tree to the [`Renderer`]
///
/// Reducers are applied one at a time, in the order their events were
/// queued. The init reducer is applied before the queue is read, so it
/// precedes any event emitted before or during startup.
///
/// For tests with manual control, use [`TestRuntime`] with a
/// [`crate::TestRenderer`].
///
/// # Type Parameters
///
/// * `Event` - Raw input events (clicks, ticks)
/// * `Model` - The state folded by reducers
/// * `Tree` - What the view produces
/// * `Logic` - The [`Component`] implementation
/// * `Render` - The [`Renderer`] implementation
pub struct Runtime<Event, Model, Tree, Logic, Render>
where
    Event: Send,
    Logic: Component<Event, Model, Tree>,
    Render: Renderer<Tree>,
{
    state_loop: StateLoop<Event, Model, Tree, Logic, Render>,
    event_receiver: Receiver<Event>,
    emitter: Emitter<Event>,
}

impl<Event, Model, Tree, Logic, Render> Runtime<Event, Model, Tree, Logic, Render>
where
    Event: Send,
    Model: Default,
    Logic: Component<Event, Model, Tree>,
    Render: Renderer<Tree>,
{
    /// Create a new runtime.
    ///
    /// Nothing is applied or rendered until [`Runtime::run`] is awaited.
    pub fn new(logic: Logic, renderer: Render) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        Runtime {
            state_loop: StateLoop::new(logic, renderer),
            event_receiver,
            emitter: Emitter::new(event_sender),
        }
    }

    /// A producer handle for a source.
    ///
    /// Take every emitter you need before calling [`Runtime::run`].
    pub fn emitter(&self) -> Emitter<Event> {
        self.emitter.clone()
    }

    /// Snapshot of the current model.
    pub fn state(&self) -> &Model {
        &self.state_loop.model
    }

    /// Run the loop until every emitter has been dropped.
    ///
    /// Returns the final model.
    pub async fn run(self) -> Model {
        let Runtime {
            mut state_loop,
            event_receiver,
            emitter,
        } = self;
        // The runtime's own handle would keep the queue open forever.
        drop(emitter);

        tracing::info!("runtime started");
        state_loop.start();

        while let Ok(event) = event_receiver.recv_async().await {
            state_loop.step(event);
        }

        tracing::info!("all sources closed, runtime stopped");
        state_loop.model
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime driver for manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Returned by [`TestRuntime::run`].
pub struct TestDriver<Event, Model, Tree, Logic, Render>
where
    Event: Send,
    Logic: Component<Event, Model, Tree>,
    Render: Renderer<Tree>,
{
    runtime: Runtime<Event, Model, Tree, Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Tree, Logic, Render> TestDriver<Event, Model, Tree, Logic, Render>
where
    Event: Send,
    Model: Default,
    Logic: Component<Event, Model, Tree>,
    Render: Renderer<Tree>,
{
    /// Process all queued events.
    ///
    /// Drains the queue until it is empty. Call this after emitting events
    /// to drive the loop in tests.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.runtime.event_receiver.try_recv() {
            self.runtime.state_loop.step(event);
        }
    }

    pub fn emitter(&self) -> Emitter<Event> {
        self.runtime.emitter()
    }

    pub fn state(&self) -> &Model {
        self.runtime.state()
    }
}

#[cfg(any(test, feature = "testing"))]
/// Runtime with manual, synchronous event processing.
///
/// Only available with the `testing` feature or during tests.
///
/// Unlike [`Runtime`], events are not processed as they arrive. Tests call
/// [`process_events`](TestDriver::process_events) on the returned driver.
///
/// ```rust
/// use counter_clock::{Component, Reducer, TestRenderer, TestRuntime};
/// # enum Event { Increment }
/// # struct Counter;
/// # impl Component<Event, i32, i32> for Counter {
/// #     fn init(&self) -> Reducer<i32> { Reducer::named("init", |_: &i32| 0) }
/// #     fn intent(&self, _event: Event) -> Option<Reducer<i32>> {
/// #         Some(Reducer::named("inc", |n: &i32| n + 1))
/// #     }
/// #     fn view(&self, n: &i32) -> i32 { *n }
/// # }
/// let renderer = TestRenderer::new();
/// let mut driver = TestRuntime::new(Counter, renderer.clone()).run();
///
/// driver.emitter().emit(Event::Increment);
/// driver.process_events();
///
/// assert_eq!(*driver.state(), 1);
/// assert_eq!(renderer.count(), 2);
/// ```
pub struct TestRuntime<Event, Model, Tree, Logic, Render>
where
    Event: Send,
    Logic: Component<Event, Model, Tree>,
    Render: Renderer<Tree>,
{
    runtime: Runtime<Event, Model, Tree, Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Event, Model, Tree, Logic, Render> TestRuntime<Event, Model, Tree, Logic, Render>
where
    Event: Send,
    Model: Default,
    Logic: Component<Event, Model, Tree>,
    Render: Renderer<Tree>,
{
    pub fn new(logic: Logic, renderer: Render) -> Self {
        TestRuntime {
            runtime: Runtime::new(logic, renderer),
        }
    }

    /// Applies the init reducer, renders, and returns a driver.
    ///
    /// Events emitted before this call stay queued until
    /// [`process_events`](TestDriver::process_events).
    pub fn run(mut self) -> TestDriver<Event, Model, Tree, Logic, Render> {
        self.runtime.state_loop.start();
        TestDriver {
            runtime: self.runtime,
        }
    }

    pub fn emitter(&self) -> Emitter<Event> {
        self.runtime.emitter()
    }
}
