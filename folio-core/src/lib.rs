//! # Folio Core
//!
//! Navigation and timing core of the Folio portfolio widgets: the fullscreen
//! carousel, the hero crossfade banner and the gallery lightbox.
//!
//! ## Overview
//!
//! - **Navigator**: position, transition lock and autoplay timer for one
//!   presentation surface ([`navigator`])
//! - **Catalog**: injected photo catalog with category filter and search
//!   ([`catalog`])
//! - **Gallery**: thumbnail grid state plus the lightbox viewer navigating the
//!   filtered view ([`gallery`])
//! - **Carousels**: hero crossfade layers and fullscreen slides with preload
//!   planning ([`carousel`])
//! - **Input**: key bindings mapped to navigator commands ([`input`])
//! - **Runtime**: tokio task driving a navigator in real time ([`runtime`])
//!
//! Rendering is never done here. Every widget talks to a
//! [`PresentationSurface`](folio_contracts::surface::PresentationSurface)
//! so the whole crate runs headless.
//!
//! ## Examples
//!
//! ```
//! use folio_core::navigator::{Navigator, NavigatorTiming};
//! use folio_core::surface::RecordingSurface;
//! use folio_core::time::ManualClock;
//!
//! let clock = ManualClock::new();
//! let mut nav = Navigator::with_clock(
//!     vec!["a", "b", "c"],
//!     NavigatorTiming::from_millis(900, 5_000),
//!     RecordingSurface::default(),
//!     clock.clone(),
//! );
//!
//! nav.start();
//! clock.advance_ms(15_000);
//! let report = nav.poll();
//! assert_eq!(report.autoplay_ticks, 3);
//! assert_eq!(nav.current(), Some("a"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod carousel;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod input;
pub mod navigator;
pub mod prelude;
pub mod runtime;
pub mod surface;
pub mod time;

pub use error::{FolioError, Result};
