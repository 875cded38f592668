//! The document capabilities the page behaviours rely on.
//!
//! Everything that touches a page goes through a [`Document`] handle passed in
//! explicitly, so the same logic runs against the live browser DOM and against
//! [`MemoryDocument`](crate::MemoryDocument) in tests.

use crate::{Error, video::VideoId};

/// A mutable document tree.
///
/// `Node` is whatever handle the host uses for an element; it must be cheap to
/// clone since placeholders keep their own copy.
pub trait Document {
    type Node: Clone;

    /// All hyperlink elements currently in the document, in document order.
    fn links(&self) -> Vec<Self::Node>;

    /// All elements carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;

    /// The resolved, absolute URL a hyperlink points at, if it has one.
    fn link_url(&self, link: &Self::Node) -> Option<String>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Whether `node` is still part of the document tree.
    fn is_attached(&self, node: &Self::Node) -> bool;

    /// Create a detached placeholder for `video`: an element with `class` and
    /// the video id attribute, showing the thumbnail at `thumbnail_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to create the element.
    fn create_placeholder(
        &mut self,
        video: &VideoId,
        video_attribute: &str,
        thumbnail_url: &str,
        class: &str,
    ) -> Result<Self::Node, Error>;

    /// Create a detached frame element playing `src`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to create the element.
    fn create_frame(&mut self, src: &str, class: &str) -> Result<Self::Node, Error>;

    /// Insert `node` as the previous sibling of `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DetachedNode`] if `reference` has no parent, or a host
    /// error if the insertion fails.
    fn insert_before(&mut self, node: &Self::Node, reference: &Self::Node) -> Result<(), Error>;

    /// Put `new` in the exact slot `old` occupies and detach `old`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DetachedNode`] if `old` has no parent, or a host error
    /// if the replacement fails.
    fn replace(&mut self, old: &Self::Node, new: &Self::Node) -> Result<(), Error>;
}
