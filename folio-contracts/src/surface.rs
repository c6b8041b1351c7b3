/// Rendering layer driven by a navigator.
///
/// Indices are positions in the navigator's active sequence. A successful
/// move emits exactly one `show_item` for the incoming position and one
/// `hide_item` for the outgoing one; opacity, transforms and cross-fade
/// mechanics are entirely the surface's business.
pub trait PresentationSurface {
    /// The item at `index` becomes the visible one.
    fn show_item(&mut self, index: usize);

    /// The item at `index` stops being the visible one.
    fn hide_item(&mut self, index: usize);

    /// The navigator switched to a new sequence of `len` items and now sits
    /// at `position` without having animated a move.
    fn sequence_changed(&mut self, _len: usize, _position: usize) {}
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for &mut S {
    fn show_item(&mut self, index: usize) {
        (**self).show_item(index);
    }

    fn hide_item(&mut self, index: usize) {
        (**self).hide_item(index);
    }

    fn sequence_changed(&mut self, len: usize, position: usize) {
        (**self).sequence_changed(len, position);
    }
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for Box<S> {
    fn show_item(&mut self, index: usize) {
        (**self).show_item(index);
    }

    fn hide_item(&mut self, index: usize) {
        (**self).hide_item(index);
    }

    fn sequence_changed(&mut self, len: usize, position: usize) {
        (**self).sequence_changed(len, position);
    }
}
