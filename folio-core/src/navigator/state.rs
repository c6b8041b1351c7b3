use std::time::Instant;

use folio_contracts::prelude::*;

use super::autoplay::{Autoplay, AutoplaySignal};
use super::command::NavCommand;
use super::timing::NavigatorTiming;
use crate::time::{Clock, SystemClock};

/// Transition lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    /// No transition in flight; moves are accepted.
    #[default]
    Idle,
    /// A move is animating; further moves are dropped until `release_at`.
    Transitioning { release_at: Instant },
}

impl NavState {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, NavState::Transitioning { .. })
    }

    pub fn release_at(&self) -> Option<Instant> {
        match self {
            NavState::Idle => None,
            NavState::Transitioning { release_at } => Some(*release_at),
        }
    }
}

/// What a call to [`Navigator::poll`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Transition locks released.
    pub released: usize,
    /// Autoplay ticks fired (each one invoked `next`).
    pub autoplay_ticks: usize,
    /// Ticks that actually moved the position.
    pub moves: usize,
}

impl PollReport {
    pub fn is_empty(&self) -> bool {
        self.released == 0 && self.autoplay_ticks == 0
    }
}

/// Point-in-time view of a navigator, cheap to publish to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSnapshot<T> {
    pub position: usize,
    pub len: usize,
    pub current: Option<T>,
    pub transitioning: bool,
    pub autoplay_running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Position, transition lock and autoplay timer of one presentation surface.
///
/// Invalid requests (empty sequence, out-of-range index, move while
/// transitioning) are silent no-ops: nothing changes, nothing is logged and
/// the lock's release deadline is left untouched.
///
/// [`Navigator::present`] is the one position change that bypasses the lock:
/// it repaints without animating, so it is accepted mid-transition and the
/// pending release still fires at its original deadline.
#[derive(Debug)]
pub struct Navigator<T, S, C = SystemClock> {
    items: Vec<T>,
    position: usize,
    state: NavState,
    timing: NavigatorTiming,
    autoplay: Autoplay,
    surface: S,
    clock: C,
}

impl<T, S> Navigator<T, S, SystemClock>
where
    T: ItemIdLike,
    S: PresentationSurface,
{
    /// Navigator on the wall clock, positioned on the first item.
    pub fn new(items: Vec<T>, timing: NavigatorTiming, surface: S) -> Self {
        Self::with_clock(items, timing, surface, SystemClock)
    }
}

impl<T, S, C> Navigator<T, S, C>
where
    T: ItemIdLike,
    S: PresentationSurface,
    C: Clock,
{
    pub fn with_clock(
        items: Vec<T>,
        timing: NavigatorTiming,
        surface: S,
        clock: C,
    ) -> Self {
        Self {
            items,
            position: 0,
            state: NavState::Idle,
            timing,
            autoplay: Autoplay::default(),
            surface,
            clock,
        }
    }

    /// Navigator over the identifiers `source` currently supplies.
    pub fn from_source<I>(
        source: &I,
        timing: NavigatorTiming,
        surface: S,
        clock: C,
    ) -> Self
    where
        I: ItemSource<Id = T> + ?Sized,
    {
        Self::with_clock(source.item_ids(), timing, surface, clock)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index into the active sequence (0 when the sequence is empty).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Identifier at the current position.
    pub fn current(&self) -> Option<T> {
        self.items.get(self.position).copied()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Lock state as of the last operation; a lock whose deadline has passed
    /// is released lazily by the next request or [`poll`](Self::poll).
    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.state
            .release_at()
            .is_some_and(|release_at| release_at > self.clock.now())
    }

    /// Deadline of the pending lock release, if a transition is in flight.
    pub fn transition_deadline(&self) -> Option<Instant> {
        self.state.release_at()
    }

    pub fn timing(&self) -> NavigatorTiming {
        self.timing
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// The autoplay timer is armed.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Earliest pending event (lock release or autoplay tick).
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.state.release_at(), self.autoplay.next_fire()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn snapshot(&self) -> NavSnapshot<T> {
        NavSnapshot {
            position: self.position,
            len: self.items.len(),
            current: self.current(),
            transitioning: self.is_transitioning(),
            autoplay_running: self.autoplay.is_running(),
        }
    }

    /// Advance one item, wrapping to the first after the last.
    pub fn next(&mut self) -> bool {
        let now = self.clock.now();
        self.step_at(Direction::Forward, now)
    }

    /// Go back one item, wrapping to the last before the first.
    pub fn previous(&mut self) -> bool {
        let now = self.clock.now();
        self.step_at(Direction::Backward, now)
    }

    /// Jump to `index`; out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.request_move(index)
    }

    /// The single move path shared by manual navigation and autoplay.
    pub fn request_move(&mut self, target: usize) -> bool {
        let now = self.clock.now();
        self.request_move_at(target, now)
    }

    /// Jump to `index` without animating and without touching the lock.
    ///
    /// Used when a surface first becomes visible (opening the lightbox on a
    /// clicked thumbnail, painting the first slide). Emits a single
    /// `show_item` and no `hide_item`: the surface was not showing anything.
    /// An in-flight transition keeps its lock and deadline.
    pub fn present(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.position = index;
        self.surface.show_item(index);
        true
    }

    /// Replace the active sequence (filter or search change).
    ///
    /// The position follows the current identifier into the new sequence
    /// when it is still present, otherwise it resets to 0. An in-flight
    /// transition keeps its lock.
    pub fn set_items(&mut self, items: Vec<T>) {
        let current = self.current();
        self.items = items;
        self.position = current
            .and_then(|id| self.items.iter().position(|item| *item == id))
            .unwrap_or(0);
        self.surface.sequence_changed(self.items.len(), self.position);
    }

    /// Re-read the active sequence from `source`. See [`Self::set_items`].
    pub fn set_source<I>(&mut self, source: &I)
    where
        I: ItemSource<Id = T> + ?Sized,
    {
        self.set_items(source.item_ids());
    }

    /// Arm the autoplay timer. Idempotent.
    pub fn start(&mut self) {
        let now = self.clock.now();
        if self.autoplay.enable(now, self.timing.interval()) {
            tracing::debug!(
                interval_ms = self.timing.interval().as_millis() as u64,
                "autoplay armed"
            );
        }
    }

    /// Cancel the autoplay timer. Idempotent; an in-flight transition still
    /// releases its lock on schedule.
    pub fn stop(&mut self) {
        let now = self.clock.now();
        if self.autoplay.disable(now, self.timing.interval()) {
            tracing::debug!("autoplay disarmed");
        }
    }

    pub fn toggle(&mut self) {
        self.signal(AutoplaySignal::Toggle);
    }

    /// Feed a pause/resume/toggle signal into the autoplay policy.
    pub fn signal(&mut self, signal: AutoplaySignal) {
        let now = self.clock.now();
        if self.autoplay.apply(signal, now, self.timing.interval()) {
            tracing::debug!(
                ?signal,
                running = self.autoplay.is_running(),
                "autoplay state changed"
            );
        }
    }

    /// Apply a command from the input layer or a driver.
    ///
    /// Returns true when the position changed.
    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::GoTo(index) => self.go_to(index),
            NavCommand::StartAutoplay => {
                self.start();
                false
            }
            NavCommand::StopAutoplay => {
                self.stop();
                false
            }
            NavCommand::Signal(signal) => {
                self.signal(signal);
                false
            }
        }
    }

    /// Fire every event due at the clock's current time, oldest first.
    ///
    /// Each event is processed at its scheduled instant, so the deadlines it
    /// creates (the next tick, a lock release) are the same as if the
    /// navigator had been polled exactly on time.
    pub fn poll(&mut self) -> PollReport {
        let now = self.clock.now();
        let mut report = PollReport::default();

        loop {
            let release = self.state.release_at().filter(|at| *at <= now);
            let tick = self.autoplay.next_fire().filter(|at| *at <= now);

            match (release, tick) {
                (Some(release_at), Some(fire_at)) if release_at <= fire_at => {
                    self.state = NavState::Idle;
                    report.released += 1;
                }
                (Some(_), None) => {
                    self.state = NavState::Idle;
                    report.released += 1;
                }
                (_, Some(fire_at)) => {
                    self.autoplay.reschedule(fire_at, self.timing.interval());
                    report.autoplay_ticks += 1;
                    if self.step_at(Direction::Forward, fire_at) {
                        report.moves += 1;
                    }
                }
                (None, None) => break,
            }
        }

        report
    }

    fn step_at(&mut self, direction: Direction, at: Instant) -> bool {
        let len = self.items.len();
        if len == 0 {
            return false;
        }
        let target = match direction {
            Direction::Forward => (self.position + 1) % len,
            Direction::Backward => (self.position + len - 1) % len,
        };
        self.request_move_at(target, at)
    }

    fn request_move_at(&mut self, target: usize, at: Instant) -> bool {
        self.settle(at);

        if target >= self.items.len()
            || target == self.position
            || self.state.is_transitioning()
        {
            return false;
        }

        let previous = self.position;
        self.state = NavState::Transitioning {
            release_at: at + self.timing.transition(),
        };
        self.surface.show_item(target);
        self.surface.hide_item(previous);
        self.position = target;

        tracing::debug!(from = previous, to = target, "navigator moved");
        true
    }

    /// Release a lock whose deadline is not after `at`.
    fn settle(&mut self, at: Instant) {
        if let NavState::Transitioning { release_at } = self.state
            && release_at <= at
        {
            self.state = NavState::Idle;
        }
    }
}
