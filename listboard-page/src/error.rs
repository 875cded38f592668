#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document error: {0}")]
    Dom(String),

    #[error("node is not attached to the document")]
    DetachedNode,
}
