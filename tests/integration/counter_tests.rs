use chrono::Duration;

use super::{build_counter_test, started_at};
use counter_clock::app::AppState;

#[test]
fn given_no_events_should_render_initial_state() {
    let test = build_counter_test();

    assert_eq!(test.renders.count(), 1);
    assert_eq!(test.driver.state(), &AppState::new(started_at()));
    assert_eq!(test.counter_text(), "Counter: 0");
}

#[test]
fn given_n_add_clicks_should_count_to_n() {
    let mut test = build_counter_test();

    for _ in 0..7 {
        test.add.click();
    }
    test.driver.process_events();

    assert_eq!(test.count(), 7);
    assert_eq!(test.renders.count(), 8);
    assert_eq!(test.counter_text(), "Counter: 7");
}

#[test]
fn given_m_subtract_clicks_should_count_below_zero() {
    let mut test = build_counter_test();

    for _ in 0..4 {
        test.subtract.click();
    }
    test.driver.process_events();

    assert_eq!(test.count(), -4);
    assert_eq!(test.counter_text(), "Counter: -4");
}

#[test]
fn given_interleaved_clicks_should_count_the_difference() {
    let mut test = build_counter_test();

    for step in "+-++--+++-".chars() {
        match step {
            '+' => test.add.click(),
            _ => test.subtract.click(),
        }
    }
    test.driver.process_events();

    assert_eq!(test.count(), 6 - 4);
}

#[test]
fn given_a_tick_should_move_the_clock_and_keep_the_count() {
    let mut test = build_counter_test();
    let later = started_at() + Duration::days(1);

    test.add.click();
    test.tick(later);
    test.driver.process_events();

    assert_eq!(test.driver.state(), &AppState { count: 1, current_time: later });
    let page = test.renders.last().unwrap();
    assert_eq!(
        page.find_all_by_tag("h2")[0].text_content(),
        "Counter app @ Tue Oct 20 2026"
    );
}

#[test]
fn given_the_same_state_rendered_twice_should_produce_equal_trees() {
    let mut test = build_counter_test();

    test.add.click();
    test.subtract.click();
    test.driver.process_events();

    test.renders.with_renders(|renders| {
        assert_eq!(renders.len(), 3);
        assert_eq!(renders[0], renders[2]);
        assert_ne!(renders[0], renders[1]);
    });
}
