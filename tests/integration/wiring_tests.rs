use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::started_at;
use counter_clock::app::{intent, CounterApp, Wiring};
use counter_clock::{FixedClock, TerminalRenderer, TestRenderer};

#[test]
fn given_sources_dropped_should_end_the_run_with_the_final_state() {
    let renders = TestRenderer::new();
    let app = CounterApp::new(Arc::new(FixedClock(started_at())), "Haro");
    let Wiring { runtime, dom, ticker } = app
        .wire(Duration::from_secs(3600), renders.clone())
        .unwrap();

    let add = dom.select(&format!(".{}", intent::ADD)).unwrap();
    add.click();
    add.click();
    add.click();
    dom.select(&format!(".{}", intent::SUBTRACT)).unwrap().click();

    drop(add);
    drop(dom);
    ticker.stop();

    let final_state = futures::executor::block_on(runtime.run());

    assert_eq!(final_state.count, 2);
    assert_eq!(final_state.current_time, started_at());
    assert_eq!(renders.count(), 5);
}

#[test]
fn given_a_fast_ticker_should_deliver_ticks_from_the_clock() {
    let renders = TestRenderer::new();
    let app = CounterApp::new(Arc::new(FixedClock(started_at())), "Haro");
    let Wiring { runtime, dom, ticker } = app
        .wire(Duration::from_millis(5), renders.clone())
        .unwrap();
    drop(dom);

    let stopper = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(100));
        ticker.stop();
    });

    let final_state = futures::executor::block_on(runtime.run());
    stopper.join().unwrap();

    assert_eq!(final_state.count, 0);
    assert_eq!(final_state.current_time, started_at());
    assert!(renders.count() >= 2, "expected at least one tick render");
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn given_a_terminal_renderer_should_print_each_frame() {
    let out = SharedBuf::default();
    let app = CounterApp::new(Arc::new(FixedClock(started_at())), "Haro");
    let Wiring { runtime, dom, ticker } = app
        .wire(Duration::from_secs(3600), TerminalRenderer::new(out.clone()))
        .unwrap();

    dom.select(&format!(".{}", intent::ADD)).unwrap().click();
    drop(dom);
    ticker.stop();

    let final_state = futures::executor::block_on(runtime.run());
    assert_eq!(final_state.count, 1);

    let printed = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
    assert_eq!(printed.matches("<div>").count(), 2);
    assert!(printed.contains("<span>Counter: 0</span>"));
    assert!(printed.contains("<span>Counter: 1</span>"));
    assert!(printed.contains("<h1 class=\"dummy\">Hi Haro!</h1>"));
}
