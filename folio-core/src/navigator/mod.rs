//! Navigator: position, transition lock and autoplay for one surface.
//!
//! A navigator owns the current index into an ordered sequence of item
//! identifiers. Every position change goes through a single move path that
//! respects the transition lock, whether it was triggered by a click, a key
//! or the autoplay timer. Rendering is delegated to a
//! [`PresentationSurface`](folio_contracts::surface::PresentationSurface).
//!
//! Time is explicit: the navigator reads an injected
//! [`Clock`](crate::time::Clock) and [`Navigator::poll`] fires every due
//! event (lock release, autoplay tick) in chronological order.

pub mod autoplay;
pub mod command;
pub mod state;
pub mod timing;

pub use autoplay::{Autoplay, AutoplaySignal};
pub use command::NavCommand;
pub use state::{NavSnapshot, NavState, Navigator, PollReport};
pub use timing::NavigatorTiming;
