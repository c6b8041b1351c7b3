//! Headless presentation surfaces.

use folio_contracts::surface::PresentationSurface;

/// Signal received by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Show(usize),
    Hide(usize),
    SequenceChanged { len: usize, position: usize },
}

/// Surface that remembers every signal, in order.
///
/// Used by tests and by the CLI simulator to observe a navigator without a
/// rendering layer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// `(shown, hidden)` pairs of every animated move.
    pub fn moves(&self) -> Vec<(usize, usize)> {
        self.events
            .windows(2)
            .filter_map(|pair| match pair {
                [SurfaceEvent::Show(shown), SurfaceEvent::Hide(hidden)] => {
                    Some((*shown, *hidden))
                }
                _ => None,
            })
            .collect()
    }

    /// Indices made visible, moves and presents alike.
    pub fn shown(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Show(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PresentationSurface for RecordingSurface {
    fn show_item(&mut self, index: usize) {
        self.events.push(SurfaceEvent::Show(index));
    }

    fn hide_item(&mut self, index: usize) {
        self.events.push(SurfaceEvent::Hide(index));
    }

    fn sequence_changed(&mut self, len: usize, position: usize) {
        self.events.push(SurfaceEvent::SequenceChanged { len, position });
    }
}

/// Surface that ignores every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl PresentationSurface for NullSurface {
    fn show_item(&mut self, _index: usize) {}

    fn hide_item(&mut self, _index: usize) {}
}
