//! Page behaviours for the listboard editor.
//!
//! This crate holds the platform independent part of the page script:
//!
//! - [`LinkEmbedder`] - turns video watch links into click-to-play placeholders
//! - [`Document`] - the document capabilities the embedder needs, with
//!   [`MemoryDocument`] as an in-memory implementation
//! - [`textarea`] - quoting a selection and appending lines to the post body
//! - [`image`] - shrink/expand rules for inline images
//! - [`upload`] - image upload settings and response handling
//! - [`Options`] - hosts, class names and limits used by all of the above
//!
//! The browser binding lives in the `listboard-page-wasm` crate.
//!
//! # Example
//!
//! ```
//! use listboard_page::{LinkEmbedder, MemoryDocument, Options, initialize};
//!
//! let mut doc = MemoryDocument::new();
//! let link = doc.create_link("https://www.youtube.com/watch?v=abc123&t=30", "watch");
//! doc.append_child(doc.root(), link)?;
//!
//! let embedder = LinkEmbedder::new(Options::default());
//! let placeholders = initialize(&mut doc, &embedder);
//! assert_eq!(placeholders.len(), 1);
//!
//! let frame = embedder.activate(&mut doc, &placeholders[0])?;
//! assert!(frame.is_some());
//! # Ok::<(), listboard_page::Error>(())
//! ```

mod dom;
mod embed;
mod error;
pub mod image;
mod memory;
mod options;
pub mod textarea;
pub mod upload;
pub mod video;

pub use dom::Document;
pub use embed::{EmbedFrame, EmbedPlaceholder, LinkEmbedder, initialize};
pub use error::Error;
pub use memory::{MemoryDocument, NodeId};
pub use options::{
    DEFAULT_EMBED_HOST, DEFAULT_FRAME_CLASS, DEFAULT_MAX_IMAGE_SIZE, DEFAULT_PLACEHOLDER_CLASS,
    DEFAULT_THUMBNAIL_HOST, DEFAULT_VIDEO_ATTRIBUTE, DEFAULT_WATCH_HOST, Options, OptionsBuilder,
};
pub use video::VideoId;
