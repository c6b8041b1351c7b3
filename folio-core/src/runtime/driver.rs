//! Tokio task owning one navigator.
//!
//! Commands arrive over an unbounded mpsc channel. Between commands the task
//! sleeps until the navigator's next deadline and polls it. A fresh
//! [`NavSnapshot`] is published on a watch channel after every step.

use std::time::Instant;

use folio_contracts::prelude::*;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::error::{FolioError, Result};
use crate::navigator::{NavCommand, NavSnapshot, Navigator};
use crate::time::Clock;

#[derive(Debug)]
pub struct NavigatorHandle<T, S, C> {
    commands: mpsc::UnboundedSender<NavCommand>,
    snapshots: watch::Receiver<NavSnapshot<T>>,
    task: JoinHandle<Navigator<T, S, C>>,
}

impl<T, S, C> NavigatorHandle<T, S, C>
where
    T: ItemIdLike,
{
    pub fn send(&self, command: NavCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| FolioError::DriverClosed)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> NavSnapshot<T> {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<NavSnapshot<T>> {
        self.snapshots.clone()
    }

    /// Close the command channel and hand the navigator back once the task
    /// has drained it.
    pub async fn shutdown(self) -> Result<Navigator<T, S, C>> {
        drop(self.commands);
        Ok(self.task.await?)
    }
}

/// Move `navigator` onto a tokio task.
///
/// The navigator's clock should follow tokio time (see
/// [`TokioClock`](super::TokioClock)); a wall clock works but ignores paused
/// time.
pub fn spawn_navigator<T, S, C>(
    navigator: Navigator<T, S, C>,
) -> NavigatorHandle<T, S, C>
where
    T: ItemIdLike + Send + Sync + 'static,
    S: PresentationSurface + Send + 'static,
    C: Clock + Send + 'static,
{
    let (commands, receiver) = mpsc::unbounded_channel();
    let (publisher, snapshots) = watch::channel(navigator.snapshot());
    let task = tokio::spawn(run(navigator, receiver, publisher));

    NavigatorHandle {
        commands,
        snapshots,
        task,
    }
}

async fn run<T, S, C>(
    mut navigator: Navigator<T, S, C>,
    mut commands: mpsc::UnboundedReceiver<NavCommand>,
    publisher: watch::Sender<NavSnapshot<T>>,
) -> Navigator<T, S, C>
where
    T: ItemIdLike,
    S: PresentationSurface,
    C: Clock,
{
    tracing::debug!(items = navigator.len(), "navigator driver started");

    loop {
        let deadline = navigator.next_deadline();
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => {
                    navigator.apply(command);
                }
                None => break,
            },
            () = sleep_until(deadline) => {
                navigator.poll();
            }
        }
        publisher.send_replace(navigator.snapshot());
    }

    tracing::debug!("navigator driver stopped");
    navigator
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await
        }
        None => std::future::pending().await,
    }
}
