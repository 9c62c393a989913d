//! Projects [`AppState`] into a [`VNode`] tree.

use chrono::{DateTime, Local};

use super::intent::{ADD, SUBTRACT};
use super::state::AppState;
use crate::vdom::{Element, VNode};

/// Human-readable date, e.g. `Mon Oct 19 2026`.
pub fn date_string(at: &DateTime<Local>) -> String {
    at.format("%a %b %d %Y").to_string()
}

/// The whole counter page.
pub fn view(state: &AppState, greeting: &str) -> VNode {
    Element::new("div")
        .child(greeting_heading(greeting))
        .child(Element::new("h2").text(format!("Counter app @ {}", date_string(&state.current_time))))
        .child(Element::new("span").text(format!("Counter: {}", state.count)))
        .child(button(ADD, "Increase"))
        .child(button(SUBTRACT, "Decrease"))
        .into()
}

fn greeting_heading(name: &str) -> Element {
    Element::new("h1").class("dummy").text(format!("Hi {name}!"))
}

fn button(class: &str, label: &str) -> Element {
    Element::new("button")
        .class(class)
        .attr("type", "button")
        .text(label)
}
