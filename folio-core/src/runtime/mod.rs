//! Real-time driving of navigators on tokio.

pub mod clock;
pub mod driver;

pub use clock::TokioClock;
pub use driver::{NavigatorHandle, spawn_navigator};
