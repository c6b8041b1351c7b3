use super::autoplay::AutoplaySignal;

/// Request addressed to a navigator by the input layer or a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(usize),
    StartAutoplay,
    StopAutoplay,
    Signal(AutoplaySignal),
}

impl NavCommand {
    pub const TOGGLE_AUTOPLAY: NavCommand =
        NavCommand::Signal(AutoplaySignal::Toggle);

    /// Whether the command may change the position directly.
    pub fn is_move(&self) -> bool {
        matches!(
            self,
            NavCommand::Next | NavCommand::Previous | NavCommand::GoTo(_)
        )
    }
}
