use listboard_page::image::{self, EXPANDED_MARKER, Fit, ImageSize, Toggle};
use web_sys::HtmlImageElement;

fn size_of(img: &HtmlImageElement) -> ImageSize {
    ImageSize {
        width: img.width(),
        height: img.height(),
    }
}

fn apply(img: &HtmlImageElement, fit: Option<Fit>) {
    match fit {
        Some(Fit::Width(width)) => img.set_width(width),
        Some(Fit::Height(height)) => img.set_height(height),
        None => {}
    }
}

fn clear(img: &HtmlImageElement, name: &str) {
    if let Err(e) = img.remove_attribute(name) {
        tracing::warn!(attribute = name, error = ?e, "could not clear image attribute");
    }
}

/// Shrink `img` so its longer side is at most `max` pixels.
pub fn resize(img: &HtmlImageElement, max: u32) {
    apply(img, image::fit(size_of(img), max));
}

/// Switch `img` between natural size and the shrunk size.
pub fn toggle(img: &HtmlImageElement, max: u32) {
    match image::toggle(img.get_attribute("alt").as_deref(), size_of(img), max) {
        Toggle::Expand => {
            clear(img, "width");
            clear(img, "height");
            img.set_alt(EXPANDED_MARKER);
        }
        Toggle::Collapse(fit) => {
            clear(img, "alt");
            apply(img, fit);
        }
    }
}
