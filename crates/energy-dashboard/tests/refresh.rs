// File: crates/energy-dashboard/tests/refresh.rs
// Purpose: Resize events reach the refresh channel once per quiet period.

use std::time::Duration;

use energy_dashboard::dashboard::resize_refresher;
use tokio::sync::mpsc;

#[tokio::test(start_paused = true)]
async fn resize_burst_pings_refresh_once() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut coordinator = resize_refresher(tx);

    coordinator.notify_resize();
    tokio::time::advance(Duration::from_millis(100)).await;
    coordinator.notify_resize();
    tokio::time::advance(Duration::from_millis(100)).await;
    coordinator.notify_resize();

    tokio::time::advance(Duration::from_millis(251)).await;
    tokio::task::yield_now().await;

    assert!(rx.try_recv().is_ok(), "one refresh tick after the burst");
    assert!(rx.try_recv().is_err(), "and only one");
}
