mod dom;
mod image;
mod page;
mod upload;

use wasm_bindgen::prelude::*;
use web_sys::{File, HtmlImageElement};

use listboard_page::textarea::quote_selection;

pub use dom::WebDocument;

/// Initialize panic hook and logging, then set up the page.
///
/// # Errors
///
/// Returns a `JsValue` error if the window or document is unavailable, or if
/// a listener cannot be attached.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    page::setup()
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .ok_or("no global window")?
        .document()
        .ok_or_else(|| "no document".into())
}

/// Quote the current selection of the post textarea.
///
/// Does nothing when the page has no textarea or the browser reports no
/// selection.
///
/// # Errors
///
/// Returns a `JsValue` error if the document is unavailable or the selection
/// cannot be read.
#[wasm_bindgen]
pub fn quote() -> Result<(), JsValue> {
    let Some(textarea) = page::textarea(&document()?) else {
        return Ok(());
    };
    let (Some(start), Some(end)) = (textarea.selection_start()?, textarea.selection_end()?)
    else {
        return Ok(());
    };
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let end = usize::try_from(end).unwrap_or(usize::MAX);
    textarea.set_value(&quote_selection(&textarea.value(), start, end));
    Ok(())
}

fn max_or_default(max: Option<u32>) -> u32 {
    max.unwrap_or_else(|| {
        document().map_or(listboard_page::DEFAULT_MAX_IMAGE_SIZE, |doc| {
            page::page_options(&doc).max_image_size()
        })
    })
}

/// Shrink an inline image to fit `max` pixels (page default when omitted).
///
/// Returns `false` when no image was given.
#[wasm_bindgen]
pub fn rsz(elem: Option<HtmlImageElement>, max: Option<u32>) -> bool {
    let Some(img) = elem else {
        return false;
    };
    image::resize(&img, max_or_default(max));
    true
}

/// Toggle an inline image between natural and shrunk size.
///
/// Returns `false` when no image was given.
#[wasm_bindgen]
pub fn tgl(elem: Option<HtmlImageElement>, max: Option<u32>) -> bool {
    let Some(img) = elem else {
        return false;
    };
    image::toggle(&img, max_or_default(max));
    true
}

/// Upload an image file and append a link to it to the post textarea.
///
/// # Errors
///
/// Returns a `JsValue` error if the document is unavailable.
#[wasm_bindgen]
pub fn upload(file: Option<File>) -> Result<(), JsValue> {
    let Some(file) = file else {
        return Ok(());
    };
    let doc = document()?;
    let Some(textarea) = page::textarea(&doc) else {
        tracing::debug!("no textarea to receive the upload");
        return Ok(());
    };
    let options = page::page_options(&doc);
    upload::upload_into(textarea, options.upload().clone(), file);
    Ok(())
}
