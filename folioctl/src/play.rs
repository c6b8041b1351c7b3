//! Real-time playback through the tokio driver.
//!
//! The widget is built exactly as a page would build it, then its navigator
//! is handed to [`spawn_navigator`] and every published position change is
//! printed.

use std::time::Duration;

use anyhow::Result;
use folio_config::ConfigLoad;
use folio_core::carousel::{FullscreenCarousel, HeroCarousel};
use folio_core::catalog::Catalog;
use folio_core::gallery::Gallery;
use folio_core::navigator::{NavCommand, Navigator};
use folio_core::prelude::{ItemIdLike, PresentationSurface};
use folio_core::runtime::{TokioClock, spawn_navigator};
use folio_core::surface::NullSurface;
use folio_model::ImageId;
use tokio::time::Instant;

use crate::SurfaceArg;

pub async fn run(
    load: &ConfigLoad,
    surface: SurfaceArg,
    duration: Duration,
    autoplay: bool,
) -> Result<()> {
    let catalog = Catalog::from_manifest(&load.manifest)?;
    let settings = surface.settings(load);

    match surface {
        SurfaceArg::Hero => {
            let hero = HeroCarousel::with_rng(
                catalog.sources(),
                settings.carousel_options(),
                &mut rand::rng(),
                TokioClock,
            );
            let (sources, navigator) = hero.into_parts();
            drive(navigator, autoplay, duration, |index| {
                sources.get(index).cloned().unwrap_or_default()
            })
            .await
        }
        SurfaceArg::Fullscreen => {
            let deck = FullscreenCarousel::with_clock(
                catalog,
                settings.carousel_options(),
                TokioClock,
            );
            let (catalog, navigator) = deck.into_parts();
            drive(navigator, autoplay, duration, |id| {
                photo_label(&catalog, id)
            })
            .await
        }
        SurfaceArg::Lightbox => {
            let first = catalog.items().first().map(|item| item.id);
            let mut gallery =
                Gallery::with_clock(catalog, settings.timing(), NullSurface, TokioClock);
            if let Some(id) = first {
                gallery.open(id);
            }
            let (catalog, navigator) = gallery.into_parts();
            drive(navigator, autoplay || settings.autoplay, duration, |id| {
                photo_label(&catalog, id)
            })
            .await
        }
    }
}

fn photo_label(catalog: &Catalog, id: ImageId) -> String {
    match catalog.get(id) {
        Some(item) => format!("{} ({})", item.title, item.src),
        None => id.to_string(),
    }
}

/// Run `navigator` on the driver for `duration`, printing each move.
async fn drive<T, S, F>(
    navigator: Navigator<T, S, TokioClock>,
    autoplay: bool,
    duration: Duration,
    label: F,
) -> Result<()>
where
    T: ItemIdLike + Send + Sync + 'static,
    S: PresentationSurface + Send + 'static,
    F: Fn(T) -> String,
{
    let started = Instant::now();
    let handle = spawn_navigator(navigator);
    if autoplay {
        handle.send(NavCommand::StartAutoplay)?;
    }

    let mut updates = handle.subscribe();
    let mut shown = updates.borrow_and_update().position;
    print_row(Duration::ZERO, handle.snapshot().current.map(&label));

    let stop = tokio::time::sleep(duration);
    tokio::pin!(stop);
    loop {
        tokio::select! {
            () = &mut stop => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                if snapshot.position != shown {
                    shown = snapshot.position;
                    print_row(started.elapsed(), snapshot.current.map(&label));
                }
            }
        }
    }

    let navigator = handle.shutdown().await?;
    let snapshot = navigator.snapshot();
    if snapshot.len == 0 {
        println!("stopped with nothing to show");
    } else {
        println!("stopped at {} of {}", snapshot.position + 1, snapshot.len);
    }
    Ok(())
}

fn print_row(elapsed: Duration, label: Option<String>) {
    let at = Duration::from_millis(elapsed.as_millis() as u64);
    println!(
        "{:>10}  {}",
        humantime::format_duration(at).to_string(),
        label.as_deref().unwrap_or("(empty)")
    );
}
