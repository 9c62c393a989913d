//! Maps clicks and ticks to reducers over [`AppState`].

use chrono::{DateTime, Local};

use super::state::{AppEvent, AppState};
use crate::Reducer;

/// Class of the increment button.
pub const ADD: &str = "add";
/// Class of the decrement button.
pub const SUBTRACT: &str = "subtract";

/// Resets to a fresh state stamped `at`, whatever came before.
pub fn init(at: DateTime<Local>) -> Reducer<AppState> {
    Reducer::named("init", move |_: &AppState| AppState::new(at))
}

pub fn add() -> Reducer<AppState> {
    Reducer::named("add", |prev: &AppState| AppState {
        count: prev.count + 1,
        ..prev.clone()
    })
}

pub fn subtract() -> Reducer<AppState> {
    Reducer::named("subtract", |prev: &AppState| AppState {
        count: prev.count - 1,
        ..prev.clone()
    })
}

/// Moves the clock to `at`; the count is untouched.
pub fn tick(at: DateTime<Local>) -> Reducer<AppState> {
    Reducer::named("tick", move |prev: &AppState| AppState {
        current_time: at,
        ..prev.clone()
    })
}

/// The reducer an event stands for, if any.
///
/// Only clicks on `.add` and `.subtract` and timer ticks pass the filter.
pub fn intent(event: AppEvent) -> Option<Reducer<AppState>> {
    match event {
        AppEvent::Dom(dom) if dom.is_click_on(ADD) => Some(add()),
        AppEvent::Dom(dom) if dom.is_click_on(SUBTRACT) => Some(subtract()),
        AppEvent::Dom(_) => None,
        AppEvent::Tick(at) => Some(tick(at)),
    }
}
