use std::time::Instant;

use crate::time::Clock;

/// Clock backed by [`tokio::time::Instant`].
///
/// Follows the runtime's paused time in tests, so a driver under
/// `start_paused` sees exactly the deadlines it scheduled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}
