use crate::upload::UploadOptions;

/// Default host (and parent domain) of recognised watch links.
pub const DEFAULT_WATCH_HOST: &str = "youtube.com";

/// Default host serving video thumbnails.
pub const DEFAULT_THUMBNAIL_HOST: &str = "img.youtube.com";

/// Default host serving the embeddable player.
pub const DEFAULT_EMBED_HOST: &str = "www.youtube.com";

/// Default class carried by placeholders, and looked up by
/// [`LinkEmbedder::scan_marked`](crate::LinkEmbedder::scan_marked).
pub const DEFAULT_PLACEHOLDER_CLASS: &str = "youtube";

/// Default class given to frames so the stylesheet can size them.
pub const DEFAULT_FRAME_CLASS: &str = "video_frame";

/// Default attribute holding the video id on a placeholder.
pub const DEFAULT_VIDEO_ATTRIBUTE: &str = "data-video";

/// Default bounding size, in pixels, for inline images.
pub const DEFAULT_MAX_IMAGE_SIZE: u32 = 320;

/// Page options.
///
/// Use [`Options::builder()`] to construct an instance. This struct is marked
/// `#[non_exhaustive]` to allow adding new fields in future minor versions.
///
/// # Example
///
/// ```
/// use listboard_page::Options;
///
/// let options = Options::builder()
///     .frame_class("player")
///     .max_image_size(480)
///     .build();
///
/// assert_eq!(options.frame_class(), "player");
/// assert_eq!(options.max_image_size(), 480);
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Options {
    watch_host: String,
    thumbnail_host: String,
    embed_host: String,
    placeholder_class: String,
    frame_class: String,
    video_attribute: String,
    max_image_size: u32,
    upload: UploadOptions,
}

impl Default for Options {
    fn default() -> Self {
        OptionsBuilder::default().build()
    }
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Host of recognised watch links. Sub-domains are accepted too.
    #[must_use]
    pub fn watch_host(&self) -> &str {
        &self.watch_host
    }

    #[must_use]
    pub fn thumbnail_host(&self) -> &str {
        &self.thumbnail_host
    }

    #[must_use]
    pub fn embed_host(&self) -> &str {
        &self.embed_host
    }

    #[must_use]
    pub fn placeholder_class(&self) -> &str {
        &self.placeholder_class
    }

    #[must_use]
    pub fn frame_class(&self) -> &str {
        &self.frame_class
    }

    /// Attribute that carries the video id on a placeholder element.
    #[must_use]
    pub fn video_attribute(&self) -> &str {
        &self.video_attribute
    }

    /// Bounding size used by [`fit`](crate::image::fit) when no explicit
    /// maximum is given.
    #[must_use]
    pub fn max_image_size(&self) -> u32 {
        self.max_image_size
    }

    #[must_use]
    pub fn upload(&self) -> &UploadOptions {
        &self.upload
    }
}

/// Builder for [`Options`].
///
/// Use [`Options::builder()`] to create a new builder.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    watch_host: String,
    thumbnail_host: String,
    embed_host: String,
    placeholder_class: String,
    frame_class: String,
    video_attribute: String,
    max_image_size: u32,
    upload: UploadOptions,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self {
            watch_host: DEFAULT_WATCH_HOST.to_string(),
            thumbnail_host: DEFAULT_THUMBNAIL_HOST.to_string(),
            embed_host: DEFAULT_EMBED_HOST.to_string(),
            placeholder_class: DEFAULT_PLACEHOLDER_CLASS.to_string(),
            frame_class: DEFAULT_FRAME_CLASS.to_string(),
            video_attribute: DEFAULT_VIDEO_ATTRIBUTE.to_string(),
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
            upload: UploadOptions::default(),
        }
    }
}

impl OptionsBuilder {
    #[must_use]
    pub fn watch_host(mut self, host: impl Into<String>) -> Self {
        self.watch_host = host.into();
        self
    }

    #[must_use]
    pub fn thumbnail_host(mut self, host: impl Into<String>) -> Self {
        self.thumbnail_host = host.into();
        self
    }

    #[must_use]
    pub fn embed_host(mut self, host: impl Into<String>) -> Self {
        self.embed_host = host.into();
        self
    }

    #[must_use]
    pub fn placeholder_class(mut self, class: impl Into<String>) -> Self {
        self.placeholder_class = class.into();
        self
    }

    #[must_use]
    pub fn frame_class(mut self, class: impl Into<String>) -> Self {
        self.frame_class = class.into();
        self
    }

    #[must_use]
    pub fn video_attribute(mut self, name: impl Into<String>) -> Self {
        self.video_attribute = name.into();
        self
    }

    #[must_use]
    pub fn max_image_size(mut self, max: u32) -> Self {
        self.max_image_size = max;
        self
    }

    #[must_use]
    pub fn upload(mut self, upload: UploadOptions) -> Self {
        self.upload = upload;
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            watch_host: self.watch_host,
            thumbnail_host: self.thumbnail_host,
            embed_host: self.embed_host,
            placeholder_class: self.placeholder_class,
            frame_class: self.frame_class,
            video_attribute: self.video_attribute,
            max_image_size: self.max_image_size,
            upload: self.upload,
        }
    }
}
