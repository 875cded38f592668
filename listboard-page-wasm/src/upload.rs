//! Send images to the upload endpoint and drop the result into the textarea.

use listboard_page::upload::{FORM_FIELD, UploadOptions, insert_uploaded_link, is_image};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlTextAreaElement, Request, RequestInit, RequestMode, Response};

/// POST `file` as multipart form data and return the response body.
async fn send(options: &UploadOptions, file: &File) -> Result<String, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob(FORM_FIELD, file)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&form);

    let request = Request::new_with_str_and_init(&options.endpoint, &init)?;
    request
        .headers()
        .set("Authorization", &options.authorization_header())?;

    let window = web_sys::window().ok_or("no global window")?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let body = JsFuture::from(response.text()?).await?;
    Ok(body.as_string().unwrap_or_default())
}

/// Upload `file` in the background and append a Markdown image pointing at it
/// to `textarea` once the upload answers.
///
/// Anything that is not an image is ignored. Failures are logged and leave
/// the textarea alone.
pub fn upload_into(textarea: HtmlTextAreaElement, options: UploadOptions, file: File) {
    let mime = file.type_();
    if !is_image(&mime) {
        tracing::debug!(name = %file.name(), %mime, "skipping upload of non-image file");
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let body = match send(&options, &file).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(name = %file.name(), error = ?e, "image upload failed");
                return;
            }
        };
        match insert_uploaded_link(&textarea.value(), &body) {
            Ok(value) => {
                tracing::debug!(name = %file.name(), "image uploaded");
                textarea.set_value(&value);
            }
            Err(e) => tracing::warn!(name = %file.name(), error = %e, "unreadable upload response"),
        }
    });
}
