//! Size rules for inline images.
//!
//! Images start shrunk to fit a square of `max` pixels; clicking toggles
//! between that and their natural size. The expanded state is remembered on
//! the element as `alt="1"`.

/// Marker stored in `alt` while an image shows at natural size.
pub const EXPANDED_MARKER: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// The single dimension to pin so the image fits; the browser scales the
/// other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Width(u32),
    Height(u32),
}

/// What a click on an image should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Drop `width`/`height` and set the expanded marker.
    Expand,
    /// Drop the marker and apply the fit, if any.
    Collapse(Option<Fit>),
}

/// Constrain the longer side to `max`.
///
/// Landscape images are limited by width, everything else by height. Returns
/// `None` when the image already fits.
#[must_use]
pub fn fit(size: ImageSize, max: u32) -> Option<Fit> {
    if size.width > size.height {
        (size.width > max).then_some(Fit::Width(max))
    } else {
        (size.height > max).then_some(Fit::Height(max))
    }
}

/// Decide the next state of an image given its current `alt` value.
#[must_use]
pub fn toggle(alt: Option<&str>, size: ImageSize, max: u32) -> Toggle {
    if alt == Some(EXPANDED_MARKER) {
        Toggle::Collapse(fit(size, max))
    } else {
        Toggle::Expand
    }
}
