//! Image upload request settings and response handling.
//!
//! The request itself is sent by the host (the browser crate uses `fetch`);
//! this module decides what to send and what to do with the answer.

use serde::Deserialize;

use crate::{Error, textarea::append_line};

pub const DEFAULT_ENDPOINT: &str = "https://api.imgur.com/3/upload.json";
pub const DEFAULT_CLIENT_ID: &str = "c2e15b62bf762a8";

/// Multipart field carrying the file.
pub const FORM_FIELD: &str = "image";

/// Where and how uploads are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub endpoint: String,
    pub client_id: String,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
        }
    }
}

impl UploadOptions {
    /// Value of the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Client-ID {}", self.client_id)
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    link: Option<String>,
}

/// Whether a file with this MIME type should be uploaded at all.
#[must_use]
pub fn is_image(mime: &str) -> bool {
    mime.contains("image")
}

/// Pull the public link out of an upload response body.
///
/// # Errors
///
/// Returns [`Error::Json`] if the body is not valid JSON. A well-formed body
/// without a link, or with an empty one, is `Ok(None)`.
pub fn link_from_response(body: &str) -> Result<Option<String>, Error> {
    let response: UploadResponse = serde_json::from_str(body)?;
    Ok(response
        .data
        .and_then(|data| data.link)
        .filter(|link| !link.is_empty()))
}

#[must_use]
pub fn markdown_image(link: &str) -> String {
    format!("![Image]({link})")
}

/// Append a Markdown image for the uploaded file to `text`.
///
/// Returns `text` unchanged when the response carries no link.
///
/// # Errors
///
/// Returns [`Error::Json`] if the body is not valid JSON.
pub fn insert_uploaded_link(text: &str, body: &str) -> Result<String, Error> {
    Ok(match link_from_response(body)? {
        Some(link) => append_line(text, &markdown_image(&link)),
        None => text.to_string(),
    })
}
