//! Producer handle onto the runtime's event queue.

use flume::Sender;

/// Producer handle onto the runtime's fan-in event queue.
///
/// Every source (DOM clicks, timer ticks, tests) holds its own clone. All
/// clones feed the same channel, so events reach the runtime in the order
/// they were emitted regardless of which producer sent them.
///
/// `Emitter` wraps a `flume` sender, making it cheap to clone and safe to
/// move to other threads.
///
/// # Example
///
/// ```rust
/// use counter_clock::{Component, Reducer, Renderer, Runtime};
///
/// enum Event { Bump }
///
/// #[derive(Clone, Default)]
/// struct Model { bumps: u32 }
///
/// struct Bumper;
///
/// impl Component<Event, Model, u32> for Bumper {
///     fn init(&self) -> Reducer<Model> {
///         Reducer::named("init", |_| Model::default())
///     }
///
///     fn intent(&self, event: Event) -> Option<Reducer<Model>> {
///         match event {
///             Event::Bump => Some(Reducer::named("bump", |m: &Model| Model { bumps: m.bumps + 1 })),
///         }
///     }
///
///     fn view(&self, model: &Model) -> u32 {
///         model.bumps
///     }
/// }
///
/// struct Discard;
/// impl Renderer<u32> for Discard {
///     fn render(&mut self, _tree: u32) {}
/// }
///
/// let runtime = Runtime::new(Bumper, Discard);
/// let emitter = runtime.emitter();
/// std::thread::spawn(move || emitter.emit(Event::Bump));
/// ```
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    /// Create a new emitter from a channel sender.
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// Queues the event for the runtime. Once the runtime has stopped the
    /// event is dropped.
    pub fn emit(&self, event: Event) {
        self.0.send(event).ok();
    }

    /// Whether the runtime on the other end has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.0.is_disconnected()
    }
}
