//! Video ids and the URLs derived from them.

use std::fmt;

use url::Url;

use crate::Options;

/// Query string appended to every embed URL.
const EMBED_PARAMS: &str = "autoplay=1&autohide=1&border=0&wmode=opaque&enablejsapi=1";

/// Identifier the video host uses to locate a single video.
///
/// Always non-empty. Only constructible through [`VideoId::new`] or
/// [`watch_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap an id taken verbatim from the page (e.g. a `data-video`
    /// attribute). Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Thumbnail image for this video.
    ///
    /// Returns a URL like: `https://img.youtube.com/vi/{id}/hqdefault.jpg`
    #[must_use]
    pub fn thumbnail_url(&self, options: &Options) -> String {
        format!(
            "https://{}/vi/{}/hqdefault.jpg",
            options.thumbnail_host(),
            self.0
        )
    }

    /// Autoplaying embed URL, suitable for an iframe `src`.
    ///
    /// Returns a URL like:
    /// `https://www.youtube.com/embed/{id}?autoplay=1&autohide=1&border=0&wmode=opaque&enablejsapi=1`
    #[must_use]
    pub fn embed_url(&self, options: &Options) -> String {
        format!(
            "https://{}/embed/{}?{EMBED_PARAMS}",
            options.embed_host(),
            self.0
        )
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from a watch link.
///
/// The link must point at `/watch` on the configured watch host (or one of its
/// sub-domains) and carry a `v=<id>` query parameter. The id is taken from the
/// raw query string, up to the next `&` or the end of the query. A `#`
/// fragment is not part of the query, so `watch?v=abc#t=30` yields `abc`.
/// Anything else, including URLs that fail to parse, is not a watch link.
#[must_use]
pub fn watch_id(link: &str, options: &Options) -> Option<VideoId> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?;
    let watch_host = options.watch_host();

    let on_watch_host = host == watch_host
        || host
            .strip_suffix(watch_host)
            .is_some_and(|sub| sub.ends_with('.'));
    if !on_watch_host || url.path() != "/watch" {
        return None;
    }

    url.query()?
        .split('&')
        .find_map(|pair| pair.strip_prefix("v="))
        .and_then(VideoId::new)
}
