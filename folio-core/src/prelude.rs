pub use crate::carousel::{CarouselOptions, FullscreenCarousel, HeroCarousel};
pub use crate::catalog::{Catalog, CatalogView, GalleryQuery};
pub use crate::error::{FolioError, Result};
pub use crate::gallery::{Gallery, LightboxEntry};
pub use crate::input::{InputAction, Key, KeyBindings, KeyInput, Modifiers, Platform};
pub use crate::navigator::{
    AutoplaySignal, NavCommand, NavSnapshot, NavState, Navigator, NavigatorTiming,
    PollReport,
};
pub use crate::runtime::{NavigatorHandle, TokioClock, spawn_navigator};
pub use crate::surface::{NullSurface, RecordingSurface, SurfaceEvent};
pub use crate::time::{Clock, ManualClock, SystemClock};
pub use folio_contracts::prelude::*;
