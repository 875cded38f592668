//! [`Document`] over the live browser DOM.

use listboard_page::{Document, Error, VideoId};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlAnchorElement, HtmlAreaElement, HtmlCollection};

/// Handle to the page document. Cloning only clones the JS reference.
#[derive(Debug, Clone)]
pub struct WebDocument {
    inner: web_sys::Document,
}

impl WebDocument {
    #[must_use]
    pub fn new(inner: web_sys::Document) -> Self {
        Self { inner }
    }
}

fn collect(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

fn dom_error(e: &JsValue) -> Error {
    Error::Dom(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

impl Document for WebDocument {
    type Node = Element;

    fn links(&self) -> Vec<Element> {
        collect(&self.inner.links())
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        // The collection is live; snapshot it before anything gets replaced.
        collect(&self.inner.get_elements_by_class_name(class))
    }

    fn link_url(&self, link: &Element) -> Option<String> {
        // `document.links` holds both `<a href>` and `<area href>`; both resolve
        // relative targets against the document base.
        let url = if let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>() {
            anchor.href()
        } else if let Some(area) = link.dyn_ref::<HtmlAreaElement>() {
            area.href()
        } else {
            link.get_attribute("href")?
        };
        (!url.is_empty()).then_some(url)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn create_placeholder(
        &mut self,
        video: &VideoId,
        video_attribute: &str,
        thumbnail_url: &str,
        class: &str,
    ) -> Result<Element, Error> {
        let placeholder = self.inner.create_element("div").map_err(|e| dom_error(&e))?;
        placeholder.set_class_name(class);
        placeholder
            .set_attribute(video_attribute, video.as_str())
            .map_err(|e| dom_error(&e))?;

        let thumbnail = self.inner.create_element("img").map_err(|e| dom_error(&e))?;
        thumbnail
            .set_attribute("src", thumbnail_url)
            .map_err(|e| dom_error(&e))?;
        placeholder
            .append_child(&thumbnail)
            .map_err(|e| dom_error(&e))?;
        Ok(placeholder)
    }

    fn create_frame(&mut self, src: &str, class: &str) -> Result<Element, Error> {
        let frame = self
            .inner
            .create_element("iframe")
            .map_err(|e| dom_error(&e))?;
        frame.set_attribute("src", src).map_err(|e| dom_error(&e))?;
        frame.set_class_name(class);
        Ok(frame)
    }

    fn insert_before(&mut self, node: &Element, reference: &Element) -> Result<(), Error> {
        let parent = reference.parent_node().ok_or(Error::DetachedNode)?;
        let reference: &web_sys::Node = reference;
        parent
            .insert_before(node, Some(reference))
            .map_err(|e| dom_error(&e))?;
        Ok(())
    }

    fn replace(&mut self, old: &Element, new: &Element) -> Result<(), Error> {
        let parent = old.parent_node().ok_or(Error::DetachedNode)?;
        parent.replace_child(new, old).map_err(|e| dom_error(&e))?;
        Ok(())
    }
}
