mod observed_app;

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use counter_clock::app::{intent, AppEvent, AppState, CounterApp};
use counter_clock::{DomSource, FixedClock, Selection, TestDriver, TestRenderer, TestRuntime, VNode};
pub(crate) use observed_app::*;

mod counter_tests;
mod reducer_stream_tests;
mod wiring_tests;

pub(crate) type CounterDriver = TestDriver<AppEvent, AppState, VNode, CounterApp, TestRenderer<VNode>>;

pub(crate) fn started_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
}

pub(crate) struct CounterTest {
    pub(crate) driver: CounterDriver,
    pub(crate) renders: TestRenderer<VNode>,
    pub(crate) add: Selection<AppEvent>,
    pub(crate) subtract: Selection<AppEvent>,
}

impl CounterTest {
    pub(crate) fn count(&self) -> i64 {
        self.driver.state().count
    }

    /// Text of the counter `<span>` in the latest render.
    pub(crate) fn counter_text(&self) -> String {
        let page = self.renders.last().expect("nothing rendered");
        page.find_all_by_tag("span")[0].text_content()
    }

    pub(crate) fn tick(&self, at: DateTime<Local>) {
        self.driver.emitter().emit(AppEvent::Tick(at));
    }
}

pub(crate) fn build_counter_test() -> CounterTest {
    let renders = TestRenderer::new();
    let app = CounterApp::new(Arc::new(FixedClock(started_at())), "Haro");
    let driver = TestRuntime::new(app, renders.clone()).run();

    let dom = DomSource::new(driver.emitter());
    let add = dom.select(&format!(".{}", intent::ADD)).unwrap();
    let subtract = dom.select(&format!(".{}", intent::SUBTRACT)).unwrap();

    CounterTest {
        driver,
        renders,
        add,
        subtract,
    }
}
