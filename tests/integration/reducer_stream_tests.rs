use std::sync::Arc;

use chrono::Duration;
use mockall::Sequence;

use super::{started_at, MockReducerObserver, ObservedApp};
use counter_clock::app::{intent, AppEvent, CounterApp};
use counter_clock::{DomEvent, FixedClock, TestRenderer, TestRuntime};

fn expect_in_order(observer: &mut MockReducerObserver, names: &[&'static str]) {
    let mut seq = Sequence::new();
    for &name in names {
        observer
            .expect_on_reducer()
            .withf(move |n: &str| n == name)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
}

#[test]
fn given_clicks_and_a_tick_should_emit_reducers_in_arrival_order() {
    let mut observer = MockReducerObserver::new();
    expect_in_order(&mut observer, &["init", "add", "add", "subtract", "tick"]);

    let app = ObservedApp {
        inner: CounterApp::new(Arc::new(FixedClock(started_at())), "Haro"),
        observer: Box::new(observer),
    };
    let renders = TestRenderer::new();
    let mut driver = TestRuntime::new(app, renders.clone()).run();

    let later = started_at() + Duration::seconds(2);
    let emitter = driver.emitter();
    emitter.emit(AppEvent::Dom(DomEvent::click(intent::ADD)));
    emitter.emit(AppEvent::Dom(DomEvent::click(intent::ADD)));
    emitter.emit(AppEvent::Dom(DomEvent::click(intent::SUBTRACT)));
    emitter.emit(AppEvent::Tick(later));
    driver.process_events();

    assert_eq!(driver.state().count, 1);
    assert_eq!(driver.state().current_time, later);
    assert_eq!(renders.count(), 5);
}

#[test]
fn given_clicks_on_other_elements_should_emit_no_reducer() {
    let mut observer = MockReducerObserver::new();
    expect_in_order(&mut observer, &["init"]);

    let app = ObservedApp {
        inner: CounterApp::new(Arc::new(FixedClock(started_at())), "Haro"),
        observer: Box::new(observer),
    };
    let renders = TestRenderer::new();
    let mut driver = TestRuntime::new(app, renders.clone()).run();

    driver.emitter().emit(AppEvent::Dom(DomEvent::click("dummy")));
    driver.process_events();

    assert_eq!(renders.count(), 1);
}
