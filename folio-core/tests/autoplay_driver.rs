use std::time::Duration;

use folio_core::navigator::{AutoplaySignal, NavCommand, Navigator, NavigatorTiming};
use folio_core::runtime::{TokioClock, spawn_navigator};
use folio_core::surface::RecordingSurface;

fn navigator(len: usize) -> Navigator<usize, RecordingSurface, TokioClock> {
    Navigator::with_clock(
        (0..len).collect(),
        NavigatorTiming::from_millis(900, 5_000),
        RecordingSurface::default(),
        TokioClock,
    )
}

#[tokio::test(start_paused = true)]
async fn driver_fires_autoplay_in_virtual_time() {
    let handle = spawn_navigator(navigator(3));
    handle.send(NavCommand::StartAutoplay).unwrap();

    tokio::time::sleep(Duration::from_millis(15_100)).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.position, 0);
    assert!(snapshot.autoplay_running);

    let nav = handle.shutdown().await.unwrap();
    assert_eq!(nav.surface().moves(), vec![(1, 0), (2, 1), (0, 2)]);
}

#[tokio::test(start_paused = true)]
async fn commands_and_snapshots_flow_through_the_driver() {
    let handle = spawn_navigator(navigator(4));
    let mut updates = handle.subscribe();

    handle.send(NavCommand::Next).unwrap();
    updates.changed().await.unwrap();
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.position, 1);
    assert_eq!(snapshot.current, Some(1));
    assert!(snapshot.transitioning);

    // Dropped: still locked.
    handle.send(NavCommand::Next).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(handle.snapshot().position, 1);

    tokio::time::sleep(Duration::from_millis(900)).await;
    assert!(!handle.snapshot().transitioning);

    handle.send(NavCommand::GoTo(3)).unwrap();
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(handle.snapshot().current, Some(3));

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn hidden_page_holds_the_driver() {
    let handle = spawn_navigator(navigator(3));
    handle.send(NavCommand::StartAutoplay).unwrap();
    handle
        .send(NavCommand::Signal(AutoplaySignal::PageHidden))
        .unwrap();

    tokio::time::sleep(Duration::from_secs(60)).await;
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.position, 0);
    assert!(!snapshot.autoplay_running);

    handle
        .send(NavCommand::Signal(AutoplaySignal::PageVisible))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5_050)).await;
    assert_eq!(handle.snapshot().position, 1);

    let nav = handle.shutdown().await.unwrap();
    assert_eq!(nav.surface().moves().len(), 1);
}
