//! Tests for the timer service command handling and countdown behavior
//!
//! All tests run on tokio's paused clock (`start_paused = true`): the
//! once-per-second waits auto-advance instantly, so tick timing can be
//! asserted exactly against virtual elapsed time.

use std::time::Duration;

use tokio::time::Instant;

use super::{TimerHandle, TimerService};
use crate::duration::TimerDuration;
use crate::error::TimerError;

fn spawn_timer(hours: u64, minutes: u64, seconds: u64) -> TimerHandle {
    let (handle, _task) = TimerService::spawn(TimerDuration::new(hours, minutes, seconds));
    handle
}

#[tokio::test(start_paused = true)]
async fn test_counts_down_to_zero_and_stops_itself() {
    let handle = spawn_timer(0, 0, 3);
    let mut duration_rx = handle.watch_duration();
    let mut running_rx = handle.watch_running();

    let t0 = Instant::now();
    handle.start().await.unwrap();
    running_rx.wait_for(|r| *r).await.unwrap();

    // First decrement lands immediately, the rest one second apart.
    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(2))
        .await
        .unwrap();
    assert_eq!(t0.elapsed(), Duration::ZERO, "first decrement must not wait");

    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(t0.elapsed(), Duration::from_secs(1));

    duration_rx.wait_for(|d| d.is_zero()).await.unwrap();
    assert_eq!(t0.elapsed(), Duration::from_secs(2));

    // Reaching zero clears the running flag without an explicit stop.
    running_rx.wait_for(|r| !*r).await.unwrap();
    assert!(handle.duration().is_zero());
    assert!(!handle.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_start_on_zero_duration_is_ignored() {
    let handle = spawn_timer(0, 0, 0);
    let duration_rx = handle.watch_duration();
    let running_rx = handle.watch_running();

    handle.start().await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(!handle.is_running());
    assert!(handle.duration().is_zero());
    assert!(
        !running_rx.has_changed().unwrap(),
        "running must never flip for a zero duration"
    );
    assert!(!duration_rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_double_start_does_not_double_the_tick_rate() {
    let handle = spawn_timer(0, 0, 10);
    let mut duration_rx = handle.watch_duration();

    let t0 = Instant::now();
    handle.start().await.unwrap();
    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(9))
        .await
        .unwrap();
    assert_eq!(t0.elapsed(), Duration::ZERO);

    // Second start while running is absorbed; the scheduled tick is not
    // reset and no second countdown appears.
    handle.start().await.unwrap();

    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(8))
        .await
        .unwrap();
    assert_eq!(t0.elapsed(), Duration::from_secs(1), "tick rate must stay at one per second");

    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(7))
        .await
        .unwrap();
    assert_eq!(t0.elapsed(), Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_stop_before_first_tick_preserves_duration() {
    let handle = spawn_timer(0, 0, 10);
    let duration_rx = handle.watch_duration();

    // Both commands are queued before the service runs; the command channel
    // is drained ahead of the due tick, so no decrement ever lands.
    handle.start().await.unwrap();
    handle.stop().await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(!handle.is_running());
    assert_eq!(handle.duration(), TimerDuration::new(0, 0, 10));
    assert!(
        !duration_rx.has_changed().unwrap(),
        "no decrement may land after a stop"
    );
}

#[tokio::test(start_paused = true)]
async fn test_stop_then_start_resumes_from_stopped_value() {
    let handle = spawn_timer(0, 1, 0);
    let mut duration_rx = handle.watch_duration();
    let mut running_rx = handle.watch_running();

    handle.start().await.unwrap();
    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(59))
        .await
        .unwrap();
    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(58))
        .await
        .unwrap();

    handle.stop().await.unwrap();
    running_rx.wait_for(|r| !*r).await.unwrap();

    // Stopped: the value holds while time passes.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(handle.duration(), TimerDuration::from_secs(58));

    // Resume: exactly one countdown continues from the stopped value.
    let t1 = Instant::now();
    handle.start().await.unwrap();
    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(57))
        .await
        .unwrap();
    assert_eq!(t1.elapsed(), Duration::ZERO);
    assert!(handle.is_running());

    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(56))
        .await
        .unwrap();
    assert_eq!(t1.elapsed(), Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_set_duration_applies_only_while_stopped() {
    let handle = spawn_timer(0, 0, 30);
    let mut duration_rx = handle.watch_duration();

    // While stopped: applied.
    handle
        .set_duration(TimerDuration::new(0, 0, 5))
        .await
        .unwrap();
    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(5))
        .await
        .unwrap();

    handle.start().await.unwrap();
    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(4))
        .await
        .unwrap();

    // While running: rejected, the countdown is the only writer. The next
    // committed change is the scheduled tick, not the edit.
    let t_edit = Instant::now();
    handle
        .set_duration(TimerDuration::new(0, 0, 99))
        .await
        .unwrap();
    duration_rx.changed().await.unwrap();
    assert_eq!(
        *duration_rx.borrow_and_update(),
        TimerDuration::from_secs(3),
        "edit while running must be rejected"
    );
    assert_eq!(t_edit.elapsed(), Duration::from_secs(1));

    handle.stop().await.unwrap();
    handle
        .set_duration(TimerDuration::new(0, 0, 7))
        .await
        .unwrap();
    duration_rx
        .wait_for(|d| *d == TimerDuration::from_secs(7))
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_stop_while_stopped_is_a_quiet_no_op() {
    let handle = spawn_timer(0, 0, 5);
    let running_rx = handle.watch_running();

    handle.stop().await.unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(!handle.is_running());
    assert!(!running_rx.has_changed().unwrap());
    assert_eq!(handle.duration(), TimerDuration::new(0, 0, 5));
}

#[tokio::test(start_paused = true)]
async fn test_running_flag_transitions_are_observable() {
    let handle = spawn_timer(0, 0, 2);
    let mut running_rx = handle.watch_running();

    handle.start().await.unwrap();

    running_rx.changed().await.unwrap();
    assert!(*running_rx.borrow_and_update());

    // 2 -> 1 immediately, 1 -> 0 a second later, then auto-stop.
    running_rx.changed().await.unwrap();
    assert!(!*running_rx.borrow_and_update());
    assert!(handle.duration().is_zero());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_closes_the_service() {
    let (handle, task) = TimerService::spawn(TimerDuration::new(0, 0, 5));

    handle.shutdown().await.unwrap();
    task.await.unwrap();

    let err = handle.start().await.unwrap_err();
    assert!(matches!(err, TimerError::ServiceClosed));
}
