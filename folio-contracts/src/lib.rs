//! Trait surfaces that describe how Folio navigators talk to their
//! collaborators: the item source feeding them and the rendering layer they
//! drive.

pub mod id;
pub mod source;
pub mod surface;

/// Frequently used trait combinators for UI and runtime crates.
pub mod prelude {
    pub use super::id::ItemIdLike;
    pub use super::source::ItemSource;
    pub use super::surface::PresentationSurface;
}
