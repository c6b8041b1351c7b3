//! Autoplay timer ownership and pause policy.

use std::time::{Duration, Instant};

/// External signals that influence autoplay.
///
/// Binding them to real events (pointer, document visibility, buttons) is the
/// input layer's job; this type only carries the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoplaySignal {
    /// Pointer entered the surface: pause.
    PointerEnter,
    /// Pointer left the surface: resume.
    PointerLeave,
    /// Page became hidden: pause.
    PageHidden,
    /// Page became visible again: resume.
    PageVisible,
    /// Explicit user toggle: flip between playing and stopped.
    Toggle,
}

/// Autoplay state of one navigator.
///
/// The timer is armed iff autoplay is enabled and no pause reason is active.
/// At most one timer exists: it is a single optional deadline, so arming
/// twice cannot leave a stray timer behind.
#[derive(Debug, Clone, Default)]
pub struct Autoplay {
    enabled: bool,
    hovered: bool,
    hidden: bool,
    next_fire: Option<Instant>,
}

impl Autoplay {
    /// User intent: autoplay was started and not stopped since.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A pause reason (hover or hidden page) is active.
    pub fn is_paused(&self) -> bool {
        self.hovered || self.hidden
    }

    /// The timer is armed.
    pub fn is_running(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Instant of the next scheduled tick, if armed.
    pub fn next_fire(&self) -> Option<Instant> {
        self.next_fire
    }

    pub(crate) fn enable(&mut self, now: Instant, interval: Duration) -> bool {
        self.enabled = true;
        self.reconcile(now, interval)
    }

    pub(crate) fn disable(&mut self, now: Instant, interval: Duration) -> bool {
        self.enabled = false;
        self.reconcile(now, interval)
    }

    pub(crate) fn apply(
        &mut self,
        signal: AutoplaySignal,
        now: Instant,
        interval: Duration,
    ) -> bool {
        match signal {
            AutoplaySignal::PointerEnter => self.hovered = true,
            AutoplaySignal::PointerLeave => self.hovered = false,
            AutoplaySignal::PageHidden => self.hidden = true,
            AutoplaySignal::PageVisible => self.hidden = false,
            AutoplaySignal::Toggle => self.enabled = !self.enabled,
        }
        self.reconcile(now, interval)
    }

    /// Re-arm after a tick scheduled at `fired_at`.
    pub(crate) fn reschedule(&mut self, fired_at: Instant, interval: Duration) {
        if self.next_fire.is_some() {
            self.next_fire = Some(fired_at + interval);
        }
    }

    /// Arm or disarm the timer to match intent and pause reasons.
    /// Returns true when the armed state changed.
    fn reconcile(&mut self, now: Instant, interval: Duration) -> bool {
        let should_run = self.enabled && !self.is_paused();
        match (should_run, self.next_fire) {
            (true, None) => {
                self.next_fire = Some(now + interval);
                true
            }
            (false, Some(_)) => {
                self.next_fire = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5_000);

    #[test]
    fn enabling_twice_keeps_the_first_deadline() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::default();
        assert!(autoplay.enable(t0, INTERVAL));
        assert!(!autoplay.enable(t0 + Duration::from_millis(700), INTERVAL));
        assert_eq!(autoplay.next_fire(), Some(t0 + INTERVAL));
    }

    #[test]
    fn pause_reasons_stack() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::default();
        autoplay.enable(t0, INTERVAL);
        autoplay.apply(AutoplaySignal::PointerEnter, t0, INTERVAL);
        autoplay.apply(AutoplaySignal::PageHidden, t0, INTERVAL);
        autoplay.apply(AutoplaySignal::PointerLeave, t0, INTERVAL);
        assert!(!autoplay.is_running(), "still hidden");
        autoplay.apply(AutoplaySignal::PageVisible, t0, INTERVAL);
        assert!(autoplay.is_running());
    }

    #[test]
    fn resume_does_not_override_a_user_stop() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::default();
        autoplay.enable(t0, INTERVAL);
        autoplay.apply(AutoplaySignal::PageHidden, t0, INTERVAL);
        autoplay.disable(t0, INTERVAL);
        autoplay.apply(AutoplaySignal::PageVisible, t0, INTERVAL);
        assert!(!autoplay.is_running());
        autoplay.apply(AutoplaySignal::Toggle, t0, INTERVAL);
        assert!(autoplay.is_running());
    }

    #[test]
    fn resuming_restarts_the_period() {
        let t0 = Instant::now();
        let later = t0 + Duration::from_millis(3_000);
        let mut autoplay = Autoplay::default();
        autoplay.enable(t0, INTERVAL);
        autoplay.apply(AutoplaySignal::PointerEnter, t0, INTERVAL);
        autoplay.apply(AutoplaySignal::PointerLeave, later, INTERVAL);
        assert_eq!(autoplay.next_fire(), Some(later + INTERVAL));
    }
}
