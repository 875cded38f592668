//! DOM orchestration for the listboard page.
//!
//! Finds the videos on the page and hooks up the textarea for drag-and-drop
//! and file input uploads.

use std::rc::Rc;

use listboard_page::{LinkEmbedder, Options, initialize, upload::UploadOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DragEvent, Event, FileList, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::WebDocument;

/// Id of the post body textarea.
pub const TEXTAREA_ID: &str = "textarea";

/// Id of the optional file input feeding uploads.
const FILE_INPUT_ID: &str = "upload";

struct PageState {
    document: WebDocument,
    embedder: LinkEmbedder,
}

/// Build the page options, letting `<body data-*>` attributes override the
/// upload settings and the image size limit.
#[must_use]
pub fn page_options(doc: &Document) -> Options {
    let mut builder = Options::builder();
    let Some(body) = doc.body() else {
        return builder.build();
    };

    let mut upload = UploadOptions::default();
    if let Some(endpoint) = body.get_attribute("data-upload-endpoint") {
        upload.endpoint = endpoint;
    }
    if let Some(client_id) = body.get_attribute("data-upload-client-id") {
        upload.client_id = client_id;
    }
    builder = builder.upload(upload);

    if let Some(max) = body
        .get_attribute("data-max-image-size")
        .and_then(|v| v.parse().ok())
    {
        builder = builder.max_image_size(max);
    }
    builder.build()
}

/// The post body textarea, if the page has one.
#[must_use]
pub fn textarea(doc: &Document) -> Option<HtmlTextAreaElement> {
    doc.get_element_by_id(TEXTAREA_ID)?.dyn_into().ok()
}

fn upload_files(textarea: &HtmlTextAreaElement, options: &Options, files: &FileList) {
    for file in (0..files.length()).filter_map(|i| files.get(i)) {
        crate::upload::upload_into(textarea.clone(), options.upload().clone(), file);
    }
}

/// Attach a click listener to every video placeholder on the page.
fn attach_video_listeners(state: &Rc<PageState>) -> Result<(), JsValue> {
    let mut document = state.document.clone();
    let placeholders = initialize(&mut document, &state.embedder);

    for placeholder in placeholders {
        let s = Rc::clone(state);
        let target = placeholder.node().clone();
        let activate_cb: Closure<dyn Fn()> = Closure::new(move || {
            let mut document = s.document.clone();
            if let Err(e) = s.embedder.activate(&mut document, &placeholder) {
                tracing::warn!(video_id = %placeholder.video_id(), error = %e, "could not start video");
            }
        });
        target.add_event_listener_with_callback("click", activate_cb.as_ref().unchecked_ref())?;
        activate_cb.forget();
    }
    Ok(())
}

/// Accept images dropped onto the textarea.
fn attach_drop_listeners(textarea: &HtmlTextAreaElement, options: &Options) -> Result<(), JsValue> {
    // Without this the browser opens the dropped file instead.
    let dragover_cb: Closure<dyn Fn(Event)> = Closure::new(|e: Event| e.prevent_default());
    textarea.add_event_listener_with_callback("dragover", dragover_cb.as_ref().unchecked_ref())?;
    dragover_cb.forget();

    let target = textarea.clone();
    let options = options.clone();
    let drop_cb: Closure<dyn Fn(DragEvent)> = Closure::new(move |e: DragEvent| {
        let Some(files) = e.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() > 0 {
            e.prevent_default();
            upload_files(&target, &options, &files);
        }
    });
    textarea.add_event_listener_with_callback("drop", drop_cb.as_ref().unchecked_ref())?;
    drop_cb.forget();
    Ok(())
}

/// Upload whatever gets picked in the `#upload` file input, if present.
fn attach_file_input_listener(
    doc: &Document,
    textarea: &HtmlTextAreaElement,
    options: &Options,
) -> Result<(), JsValue> {
    let Some(input) = doc.get_element_by_id(FILE_INPUT_ID) else {
        return Ok(());
    };
    let input: HtmlInputElement = input.dyn_into()?;
    let picker = input.clone();
    let target = textarea.clone();
    let options = options.clone();

    let change_cb: Closure<dyn Fn()> = Closure::new(move || {
        if let Some(files) = picker.files() {
            upload_files(&target, &options, &files);
        }
        picker.set_value("");
    });
    input.add_event_listener_with_callback("change", change_cb.as_ref().unchecked_ref())?;
    change_cb.forget();
    Ok(())
}

/// Wire up all page behaviours.
///
/// Called once from `init()` after the panic hook and logging are installed.
pub fn setup() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let doc = window.document().ok_or("no document")?;
    let options = page_options(&doc);

    let state = Rc::new(PageState {
        document: WebDocument::new(doc.clone()),
        embedder: LinkEmbedder::new(options.clone()),
    });
    attach_video_listeners(&state)?;

    if let Some(textarea) = textarea(&doc) {
        attach_drop_listeners(&textarea, &options)?;
        attach_file_input_listener(&doc, &textarea, &options)?;
    } else {
        tracing::debug!("no #{TEXTAREA_ID} on this page, uploads disabled");
    }

    Ok(())
}
