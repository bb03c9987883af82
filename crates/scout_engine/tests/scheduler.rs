use std::sync::mpsc;
use std::time::Duration;

use scout_engine::{EngineEvent, PollScheduler};
use tokio::runtime::Handle;

fn scheduler() -> (PollScheduler, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    (PollScheduler::new(Handle::current(), tx), rx)
}

async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn timer_fires_once_after_delay() {
    let (scheduler, rx) = scheduler();
    scheduler.schedule(1, Duration::from_secs(10));
    assert!(scheduler.is_pending());

    advance(Duration::from_secs(9)).await;
    assert!(rx.try_recv().is_err());
    assert!(scheduler.is_pending());

    advance(Duration::from_secs(2)).await;
    assert_eq!(rx.try_recv().ok(), Some(EngineEvent::PollDue { session: 1 }));
    assert!(rx.try_recv().is_err());
    assert!(!scheduler.is_pending());
}

#[tokio::test(start_paused = true)]
async fn cancel_disarms_timer() {
    let (scheduler, rx) = scheduler();
    scheduler.schedule(1, Duration::from_secs(10));

    assert!(scheduler.cancel());
    assert!(!scheduler.is_pending());
    assert!(!scheduler.cancel());

    advance(Duration::from_secs(20)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn scheduling_replaces_previous_timer() {
    let (scheduler, rx) = scheduler();
    scheduler.schedule(1, Duration::from_secs(10));
    scheduler.schedule(2, Duration::from_secs(10));

    advance(Duration::from_secs(11)).await;
    let fired: Vec<_> = rx.try_iter().collect();
    assert_eq!(fired, vec![EngineEvent::PollDue { session: 2 }]);
}

#[tokio::test(start_paused = true)]
async fn dropping_scheduler_disarms_timer() {
    let (scheduler, rx) = scheduler();
    scheduler.schedule(3, Duration::from_secs(10));
    drop(scheduler);

    advance(Duration::from_secs(11)).await;
    assert!(rx.try_recv().is_err());
}
