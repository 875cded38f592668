//! Turn video links into click-to-play thumbnails.
//!
//! Each recognised link gets a placeholder inserted right before it. Activating
//! a placeholder swaps it for a frame playing the video. The link itself is
//! never touched.

use crate::{
    Error, Options,
    dom::Document,
    video::{VideoId, watch_id},
};

/// A thumbnail standing in for a video that has not been played yet.
///
/// The video id is captured when the placeholder is created; activation never
/// looks at the page again to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPlaceholder<N> {
    node: N,
    video_id: VideoId,
}

impl<N> EmbedPlaceholder<N> {
    /// The thumbnail element in the document.
    #[must_use]
    pub fn node(&self) -> &N {
        &self.node
    }

    #[must_use]
    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }
}

/// The playing frame that replaced a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFrame<N> {
    node: N,
    src: String,
}

impl<N> EmbedFrame<N> {
    #[must_use]
    pub fn node(&self) -> &N {
        &self.node
    }

    /// The embed URL the frame was created with.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }
}

/// Scans documents for video links and activates the placeholders it creates.
#[derive(Debug, Clone, Default)]
pub struct LinkEmbedder {
    options: Options,
}

impl LinkEmbedder {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Insert a placeholder before every link in `links` that points at a
    /// watch page.
    ///
    /// Links are handled in the order given and the returned placeholders
    /// follow that order. Links without a URL, links to anything else, and
    /// links the document fails to augment are skipped; the scan always runs
    /// to the end.
    #[tracing::instrument(skip_all, fields(links = links.len()))]
    pub fn scan<D: Document>(
        &self,
        doc: &mut D,
        links: &[D::Node],
    ) -> Vec<EmbedPlaceholder<D::Node>> {
        let mut placeholders = Vec::new();
        for link in links {
            let Some(video_id) = doc
                .link_url(link)
                .and_then(|url| watch_id(&url, &self.options))
            else {
                continue;
            };
            match self.place_before(doc, link, &video_id) {
                Ok(node) => {
                    tracing::debug!(%video_id, "inserted video placeholder");
                    placeholders.push(EmbedPlaceholder { node, video_id });
                }
                Err(e) => {
                    tracing::warn!(%video_id, error = %e, "could not insert video placeholder");
                }
            }
        }
        placeholders
    }

    /// Pick up placeholders already present in the page: elements with the
    /// placeholder class and a non-empty video id attribute.
    #[tracing::instrument(skip_all)]
    pub fn scan_marked<D: Document>(&self, doc: &D) -> Vec<EmbedPlaceholder<D::Node>> {
        doc.elements_with_class(self.options.placeholder_class())
            .into_iter()
            .filter_map(|node| {
                let video_id = doc
                    .attribute(&node, self.options.video_attribute())
                    .and_then(VideoId::new)?;
                tracing::debug!(%video_id, "found marked video placeholder");
                Some(EmbedPlaceholder { node, video_id })
            })
            .collect()
    }

    /// Replace `placeholder` with a frame playing its video.
    ///
    /// Returns `Ok(None)` without touching the document when the placeholder
    /// is no longer attached, which is always the case after a first
    /// successful activation.
    ///
    /// # Errors
    ///
    /// Returns an error if the document fails to create the frame or to swap
    /// it in.
    pub fn activate<D: Document>(
        &self,
        doc: &mut D,
        placeholder: &EmbedPlaceholder<D::Node>,
    ) -> Result<Option<EmbedFrame<D::Node>>, Error> {
        if !doc.is_attached(&placeholder.node) {
            tracing::debug!(video_id = %placeholder.video_id, "placeholder already replaced");
            return Ok(None);
        }
        let src = placeholder.video_id.embed_url(&self.options);
        let node = doc.create_frame(&src, self.options.frame_class())?;
        doc.replace(&placeholder.node, &node)?;
        tracing::debug!(video_id = %placeholder.video_id, "video frame activated");
        Ok(Some(EmbedFrame { node, src }))
    }

    fn place_before<D: Document>(
        &self,
        doc: &mut D,
        link: &D::Node,
        video_id: &VideoId,
    ) -> Result<D::Node, Error> {
        let node = doc.create_placeholder(
            video_id,
            self.options.video_attribute(),
            &video_id.thumbnail_url(&self.options),
            self.options.placeholder_class(),
        )?;
        doc.insert_before(&node, link)?;
        Ok(node)
    }
}

/// Set up every video on the page.
///
/// Placeholders already marked up in the page come first, followed by the
/// ones created for watch links. Call once per page: the host is expected to
/// hook each returned placeholder's activation event up to
/// [`LinkEmbedder::activate`].
pub fn initialize<D: Document>(
    doc: &mut D,
    embedder: &LinkEmbedder,
) -> Vec<EmbedPlaceholder<D::Node>> {
    let mut placeholders = embedder.scan_marked(doc);
    let links = doc.links();
    placeholders.extend(embedder.scan(doc, &links));
    tracing::info!(count = placeholders.len(), "video placeholders ready");
    placeholders
}
