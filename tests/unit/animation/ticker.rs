use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn new_ticker_is_stopped_at_zero() {
    let mut t = FrameTicker::new(ms(100));
    assert_eq!(t.value(), 0.0);
    assert!(!t.is_running());
    assert_eq!(t.advance(ms(50)), TickerEvent::Idle);
    assert_eq!(t.value(), 0.0);
}

#[test]
fn advances_linearly_and_completes_once() {
    let mut t = FrameTicker::new(ms(100));
    t.start();
    assert_eq!(t.advance(ms(25)), TickerEvent::Progressed);
    assert!((t.value() - 0.25).abs() < 1e-9);

    assert_eq!(t.advance(ms(100)), TickerEvent::Completed);
    assert_eq!(t.value(), 1.0);
    assert!(!t.is_running());
    assert_eq!(t.advance(ms(100)), TickerEvent::Idle);
}

#[test]
fn stop_keeps_value_and_start_resumes() {
    let mut t = FrameTicker::new(ms(100));
    t.start();
    t.advance(ms(40));
    t.stop();
    assert_eq!(t.advance(ms(40)), TickerEvent::Idle);
    assert!((t.value() - 0.4).abs() < 1e-9);
    t.start();
    t.advance(ms(10));
    assert!((t.value() - 0.5).abs() < 1e-9);
}

#[test]
fn start_at_end_of_pass_does_not_run() {
    let mut t = FrameTicker::new(ms(10));
    t.restart();
    t.advance(ms(10));
    t.start();
    assert!(!t.is_running());
}

#[test]
fn set_period_keeps_fraction() {
    let mut t = FrameTicker::new(ms(100));
    t.start();
    t.advance(ms(50));
    t.set_period(ms(200));
    assert!((t.value() - 0.5).abs() < 1e-9);
    t.advance(ms(50));
    assert!((t.value() - 0.75).abs() < 1e-9);
}

#[test]
fn disposed_ticker_ignores_restart() {
    let mut t = FrameTicker::new(ms(100));
    t.dispose();
    t.restart();
    assert!(!t.is_running());
    assert!(t.is_disposed());
}
