use counter_clock::app::{AppEvent, AppState, CounterApp};
use counter_clock::{Component, Reducer, VNode};

/// Counter app that reports every reducer it hands to the runtime.
pub(crate) struct ObservedApp {
    pub(crate) inner: CounterApp,
    pub(crate) observer: Box<dyn ReducerObserver + Send>,
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait ReducerObserver {
    fn on_reducer(&self, name: &'static str);
}

impl ObservedApp {
    fn observe(&self, reducer: Reducer<AppState>) -> Reducer<AppState> {
        self.observer.on_reducer(reducer.name());
        reducer
    }
}

impl Component<AppEvent, AppState, VNode> for ObservedApp {
    fn init(&self) -> Reducer<AppState> {
        self.observe(self.inner.init())
    }

    fn intent(&self, event: AppEvent) -> Option<Reducer<AppState>> {
        self.inner.intent(event).map(|reducer| self.observe(reducer))
    }

    fn view(&self, model: &AppState) -> VNode {
        self.inner.view(model)
    }
}
