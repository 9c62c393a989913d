//! The application's single state record.

use chrono::{DateTime, Local};

use crate::DomEvent;

/// Everything the counter view needs.
///
/// Only ever replaced by applying a reducer; see [`super::intent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Net clicks, add minus subtract. May go negative.
    pub count: i64,
    /// Timestamp of the last tick, or of startup.
    pub current_time: DateTime<Local>,
}

impl AppState {
    pub fn new(current_time: DateTime<Local>) -> Self {
        Self {
            count: 0,
            current_time,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Local::now())
    }
}

/// Raw inputs to the counter application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Dom(DomEvent),
    Tick(DateTime<Local>),
}

impl From<DomEvent> for AppEvent {
    fn from(event: DomEvent) -> Self {
        AppEvent::Dom(event)
    }
}
