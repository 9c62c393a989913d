//! Application contract: intent, view, and the initial reducer.

use crate::Reducer;

/// Application logic driven by the [`Runtime`](crate::Runtime).
///
/// Implementations provide three pure functions:
/// - [`init`](Self::init): the reducer emitted at subscription time
/// - [`intent`](Self::intent): Event → optional Reducer
/// - [`view`](Self::view): Model → renderable tree
///
/// The runtime owns the model and folds reducers into it; implementations
/// never see a mutable model.
pub trait Component<Event: Send, Model, Tree> {
    /// The reducer applied before any queued event.
    ///
    /// The runtime applies it to `Model::default()` when it starts, so it
    /// is always the first entry of the reducer stream.
    fn init(&self) -> Reducer<Model>;

    /// Map an event to the reducer it stands for.
    ///
    /// Returning `None` filters the event out of the reducer stream; no
    /// state change or render follows.
    fn intent(&self, event: Event) -> Option<Reducer<Model>>;

    /// Project the model into a renderable tree.
    ///
    /// Must be pure: equal models produce equal trees.
    fn view(&self, model: &Model) -> Tree;
}
