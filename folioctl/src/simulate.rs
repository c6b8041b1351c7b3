//! Deterministic replay of a widget on a manual clock.

use std::time::{Duration, Instant};

use anyhow::Result;
use folio_config::ConfigLoad;
use folio_core::carousel::{FullscreenCarousel, HeroCarousel};
use folio_core::catalog::Catalog;
use folio_core::gallery::Gallery;
use folio_core::navigator::PollReport;
use folio_core::surface::RecordingSurface;
use folio_core::time::{Clock, ManualClock};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::SurfaceArg;

/// What the replay loop needs from a widget.
trait Timeline {
    fn next_deadline(&self) -> Option<Instant>;
    fn poll(&mut self) -> PollReport;
    fn label(&self) -> String;
}

impl Timeline for HeroCarousel<ManualClock> {
    fn next_deadline(&self) -> Option<Instant> {
        self.navigator().next_deadline()
    }

    fn poll(&mut self) -> PollReport {
        HeroCarousel::poll(self)
    }

    fn label(&self) -> String {
        self.current_source().unwrap_or("(empty)").to_string()
    }
}

impl Timeline for FullscreenCarousel<ManualClock> {
    fn next_deadline(&self) -> Option<Instant> {
        FullscreenCarousel::next_deadline(self)
    }

    fn poll(&mut self) -> PollReport {
        FullscreenCarousel::poll(self)
    }

    fn label(&self) -> String {
        match self.current() {
            Some(item) => format!("{} ({})", item.title, item.src),
            None => "(empty)".into(),
        }
    }
}

impl Timeline for Gallery<RecordingSurface, ManualClock> {
    fn next_deadline(&self) -> Option<Instant> {
        self.lightbox().next_deadline()
    }

    fn poll(&mut self) -> PollReport {
        Gallery::poll(self)
    }

    fn label(&self) -> String {
        match self.current() {
            Some(entry) => format!("{} {} · {}", entry.counter, entry.title(), entry.meta),
            None => "(closed)".into(),
        }
    }
}

pub fn run(
    load: &ConfigLoad,
    surface: SurfaceArg,
    duration: Duration,
    autoplay: bool,
    seed: u64,
) -> Result<()> {
    let catalog = Catalog::from_manifest(&load.manifest)?;
    let settings = surface.settings(load);
    let clock = ManualClock::new();

    let totals = match surface {
        SurfaceArg::Hero => {
            let mut hero = HeroCarousel::with_rng(
                catalog.sources(),
                settings.carousel_options(),
                &mut StdRng::seed_from_u64(seed),
                clock.clone(),
            );
            if autoplay {
                hero.navigator_mut().start();
            }
            replay(&mut hero, &clock, duration)
        }
        SurfaceArg::Fullscreen => {
            let mut deck = FullscreenCarousel::with_clock(
                catalog,
                settings.carousel_options(),
                clock.clone(),
            );
            if autoplay {
                deck.navigator_mut().start();
            }
            replay(&mut deck, &clock, duration)
        }
        SurfaceArg::Lightbox => {
            let first = catalog.items().first().map(|item| item.id);
            let mut gallery = Gallery::with_clock(
                catalog,
                settings.timing(),
                RecordingSurface::default(),
                clock.clone(),
            );
            if let Some(id) = first {
                gallery.open(id);
            }
            if autoplay || settings.autoplay {
                gallery.lightbox_mut().start();
            }
            replay(&mut gallery, &clock, duration)
        }
    };

    println!("ticks: {}, moves: {}", totals.autoplay_ticks, totals.moves);
    Ok(())
}

fn replay<W: Timeline>(
    widget: &mut W,
    clock: &ManualClock,
    duration: Duration,
) -> PollReport {
    let end = clock.origin() + duration;
    let mut totals = PollReport::default();
    print_row(Duration::ZERO, &widget.label());

    while let Some(deadline) = widget.next_deadline()
        && deadline <= end
    {
        clock.advance(deadline.saturating_duration_since(clock.now()));
        let report = widget.poll();
        totals.released += report.released;
        totals.autoplay_ticks += report.autoplay_ticks;
        totals.moves += report.moves;
        if report.moves > 0 {
            print_row(clock.elapsed(), &widget.label());
        }
    }

    totals
}

fn print_row(at: Duration, label: &str) {
    println!("{:>10}  {}", humantime::format_duration(at).to_string(), label);
}
