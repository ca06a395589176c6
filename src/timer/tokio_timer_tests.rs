//! Tests for tokio_timer

use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counting_callback(counter: &Arc<AtomicUsize>) -> TimerCallback {
    let counter = Arc::clone(counter);
    Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_current_without_runtime_fails() {
    let result = TokioTimer::current();
    assert!(matches!(result, Err(TidingsError::NoRuntime(_))));
}

#[tokio::test(start_paused = true)]
async fn test_fires_after_delay() {
    let timer = TokioTimer::current().unwrap();
    let fired = Arc::new(AtomicUsize::new(0));

    let _handle = timer.schedule(Duration::from_millis(1000), counting_callback(&fired));

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_timer_never_fires() {
    let timer = TokioTimer::current().unwrap();
    let fired = Arc::new(AtomicUsize::new(0));

    let handle = timer.schedule(Duration::from_millis(500), counting_callback(&fired));
    handle.cancel();

    tokio::time::sleep(Duration::from_millis(2000)).await;
    tokio::task::yield_now().await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_independent_timers_fire_in_deadline_order() {
    let timer = TokioTimer::current().unwrap();
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    for (label, delay) in [("slow", 300u64), ("fast", 100), ("mid", 200)] {
        let order = Arc::clone(&order);
        let _ = timer.schedule(
            Duration::from_millis(delay),
            Box::new(move || order.lock().unwrap().push(label)),
        );
    }

    tokio::time::sleep(Duration::from_millis(400)).await;
    tokio::task::yield_now().await;
    assert_eq!(*order.lock().unwrap(), vec!["fast", "mid", "slow"]);
}

#[test]
fn test_dedicated_thread_fires_in_real_time() {
    let (timer, thread) = TokioTimer::spawn_dedicated().unwrap();
    let (tx, rx) = std::sync::mpsc::channel();

    let _handle = timer.schedule(
        Duration::from_millis(20),
        Box::new(move || {
            let _ = tx.send(());
        }),
    );

    assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
    thread.shutdown();
}

#[test]
fn test_dedicated_thread_cancel_before_fire() {
    let (timer, thread) = TokioTimer::spawn_dedicated().unwrap();
    let fired = Arc::new(AtomicUsize::new(0));

    let handle = timer.schedule(Duration::from_millis(50), counting_callback(&fired));
    handle.cancel();

    std::thread::sleep(Duration::from_millis(150));
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    drop(thread);
}
