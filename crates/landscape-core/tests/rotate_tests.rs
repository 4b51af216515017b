// Host-side tests for the auto-rotate driver. Time is passed in explicitly,
// so nothing here sleeps.

use instant::Instant;
use landscape_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn first_tick_is_due_immediately() {
    let mut state = EmotionState::new();
    let mut driver = AutoRotateDriver::default();
    let t0 = Instant::now();

    assert!(!driver.is_running());
    assert_eq!(driver.next_deadline(), None);

    driver.start(&mut state, t0);
    assert!(driver.is_running());
    assert_eq!(driver.next_deadline(), Some(t0));
    assert!(driver.poll(&mut state, t0));
    assert!((state.camera.auto_rotate_phase() - 0.05).abs() < 1e-12);
    assert_eq!(driver.next_deadline(), Some(t0 + ms(50)));
}

#[test]
fn early_poll_does_nothing() {
    let mut state = EmotionState::new();
    let mut driver = AutoRotateDriver::default();
    let t0 = Instant::now();
    driver.start(&mut state, t0);
    driver.poll(&mut state, t0);

    let before = state.clone();
    assert!(!driver.poll(&mut state, t0 + ms(20)));
    assert_eq!(state, before);
}

#[test]
fn late_poll_ticks_once_and_reschedules_from_now() {
    let mut state = EmotionState::new();
    let mut driver = AutoRotateDriver::default();
    let t0 = Instant::now();
    driver.start(&mut state, t0);
    driver.poll(&mut state, t0);

    let late = t0 + ms(500);
    assert!(driver.poll(&mut state, late));
    assert!((state.camera.auto_rotate_phase() - 0.10).abs() < 1e-12);
    assert_eq!(driver.next_deadline(), Some(late + ms(50)));
}

#[test]
fn stop_then_start_restarts_the_sweep() {
    let mut state = EmotionState::new();
    let mut driver = AutoRotateDriver::default();
    let t0 = Instant::now();

    driver.start(&mut state, t0);
    for k in 0..3 {
        assert!(driver.poll(&mut state, t0 + ms(50 * k)));
    }
    assert!((state.camera.auto_rotate_phase() - 0.15).abs() < 1e-12);

    driver.stop();
    assert!(!driver.is_running());
    assert!(!driver.poll(&mut state, t0 + ms(1000)));
    assert!((state.camera.auto_rotate_phase() - 0.15).abs() < 1e-12);

    let t1 = t0 + ms(2000);
    driver.start(&mut state, t1);
    assert_eq!(state.camera.auto_rotate_phase(), 0.0);
    assert!(driver.poll(&mut state, t1));
    assert!((state.camera.auto_rotate_phase() - 0.05).abs() < 1e-12);
    assert!((state.camera.azimuth() - 2.5).abs() < 1e-9);
    let expected_elev = 30.0 + 45.0 * 0.05f64.sin();
    assert!((state.camera.elevation() - expected_elev).abs() < 1e-9);
}

#[test]
fn cancelled_handle_stops_the_next_tick() {
    let mut state = EmotionState::new();
    let mut driver = AutoRotateDriver::default();
    let t0 = Instant::now();
    let handle = driver.start(&mut state, t0);

    handle.cancel();
    assert!(!handle.is_running());
    assert!(!driver.is_running());
    assert_eq!(driver.next_deadline(), None);
    assert!(!driver.poll(&mut state, t0));
    assert_eq!(state.camera.auto_rotate_phase(), 0.0);
}

#[test]
fn restarting_cancels_the_previous_handle() {
    let mut state = EmotionState::new();
    let mut driver = AutoRotateDriver::default();
    let t0 = Instant::now();
    let first = driver.start(&mut state, t0);
    let second = driver.start(&mut state, t0 + ms(10));
    assert!(!first.is_running());
    assert!(second.is_running());
    assert!(driver.is_running());
}

#[test]
fn custom_interval_and_step_are_respected() {
    let mut state = EmotionState::new();
    let mut driver = AutoRotateDriver::new(ms(10), 0.5);
    assert_eq!(driver.interval(), ms(10));
    let t0 = Instant::now();
    driver.start(&mut state, t0);
    driver.poll(&mut state, t0);
    assert_eq!(driver.next_deadline(), Some(t0 + ms(10)));
    assert_eq!(state.camera.auto_rotate_phase(), 0.5);
}
