//! An in-memory element tree implementing [`Document`].

use std::fmt::Write as _;

use url::Url;

use crate::{Error, dom::Document, video::VideoId};

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

/// Elements serialised without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// A small element tree rooted at a `<body>` element.
///
/// Elements are never freed: detached nodes keep their id and can be
/// re-attached, which is what lets tests hold on to replaced placeholders.
///
/// # Example
///
/// ```
/// use listboard_page::MemoryDocument;
///
/// let mut doc = MemoryDocument::new();
/// let p = doc.create_element("p");
/// doc.append_child(doc.root(), p)?;
/// doc.set_text(p, "hello");
/// assert_eq!(doc.to_html(), "<body><p>hello</p></body>");
/// # Ok::<(), listboard_page::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Element>,
    base: Option<Url>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            base: None,
        }
    }

    /// A document whose relative links resolve against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if `base` is not an absolute URL.
    pub fn with_base(base: &str) -> Result<Self, Error> {
        Ok(Self {
            base: Some(Url::parse(base)?),
            ..Self::new()
        })
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Create a detached `<a href=…>` with `text` as its content.
    pub fn create_link(&mut self, href: &str, text: &str) -> NodeId {
        let link = self.create_element("a");
        self.set_attribute(link, "href", href);
        self.set_text(link, text);
        link
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(element) = self.nodes.get_mut(id.0) else {
            return;
        };
        if let Some(slot) = element.attributes.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            element
                .attributes
                .push((name.to_string(), value.to_string()));
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(element) = self.nodes.get_mut(id.0) {
            element.attributes.retain(|(n, _)| n != name);
        }
    }

    #[must_use]
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id.0)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(element) = self.nodes.get_mut(id.0) {
            element.text = text.to_string();
        }
    }

    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|e| e.tag.as_str())
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get_attribute(id, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current position first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dom`] if either node is unknown or if `child` is an
    /// ancestor of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        self.check_insertion(parent, child)?;
        self.detach(child);
        self.link_child(parent, child, None)
    }

    /// Every element below `id`, in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Serialise the attached tree.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(ROOT, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(element) = self.nodes.get(id.0) else {
            return;
        };
        let _ = write!(out, "<{}", element.tag);
        for (name, value) in &element.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
            return;
        }
        out.push_str(&element.text);
        for child in &element.children {
            self.write_html(*child, out);
        }
        let _ = write!(out, "</{}>", element.tag);
    }

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        if self.nodes.get(parent.0).is_none() || self.nodes.get(child.0).is_none() {
            return Err(Error::Dom("unknown node".to_string()));
        }
        if child == ROOT {
            return Err(Error::Dom("the root cannot be moved".to_string()));
        }
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return Err(Error::Dom(
                    "a node cannot be inserted below itself".to_string(),
                ));
            }
            cursor = self.parent(current);
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(element) = self.nodes.get_mut(parent.0) {
            element.children.retain(|c| *c != id);
        }
        if let Some(element) = self.nodes.get_mut(id.0) {
            element.parent = None;
        }
    }

    fn link_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        position: Option<usize>,
    ) -> Result<(), Error> {
        let parent_element = self
            .nodes
            .get_mut(parent.0)
            .ok_or_else(|| Error::Dom("unknown node".to_string()))?;
        match position {
            Some(index) if index <= parent_element.children.len() => {
                parent_element.children.insert(index, child);
            }
            Some(_) | None => parent_element.children.push(child),
        }
        if let Some(element) = self.nodes.get_mut(child.0) {
            element.parent = Some(parent);
        }
        Ok(())
    }

    fn position_in_parent(&self, id: NodeId) -> Result<(NodeId, usize), Error> {
        let parent = self.parent(id).ok_or(Error::DetachedNode)?;
        let index = self
            .children(parent)
            .iter()
            .position(|c| *c == id)
            .ok_or(Error::DetachedNode)?;
        Ok((parent, index))
    }
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn links(&self) -> Vec<NodeId> {
        self.descendants(ROOT)
            .into_iter()
            .filter(|id| self.tag(*id) == Some("a") && self.get_attribute(*id, "href").is_some())
            .collect()
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(ROOT)
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    fn link_url(&self, link: &NodeId) -> Option<String> {
        let href = self.get_attribute(*link, "href")?;
        match &self.base {
            Some(base) => base.join(href).ok().map(Into::into),
            None => Some(href.to_string()),
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.get_attribute(*node, name).map(ToString::to_string)
    }

    fn is_attached(&self, node: &NodeId) -> bool {
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if current == ROOT {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    fn create_placeholder(
        &mut self,
        video: &VideoId,
        video_attribute: &str,
        thumbnail_url: &str,
        class: &str,
    ) -> Result<NodeId, Error> {
        let placeholder = self.create_element("div");
        self.set_attribute(placeholder, "class", class);
        self.set_attribute(placeholder, video_attribute, video.as_str());
        let thumbnail = self.create_element("img");
        self.set_attribute(thumbnail, "src", thumbnail_url);
        self.append_child(placeholder, thumbnail)?;
        Ok(placeholder)
    }

    fn create_frame(&mut self, src: &str, class: &str) -> Result<NodeId, Error> {
        let frame = self.create_element("iframe");
        self.set_attribute(frame, "src", src);
        self.set_attribute(frame, "class", class);
        Ok(frame)
    }

    fn insert_before(&mut self, node: &NodeId, reference: &NodeId) -> Result<(), Error> {
        self.position_in_parent(*reference)?;
        if node == reference {
            return Ok(());
        }
        self.check_insertion(self.parent(*reference).ok_or(Error::DetachedNode)?, *node)?;
        self.detach(*node);
        let (parent, index) = self.position_in_parent(*reference)?;
        self.link_child(parent, *node, Some(index))
    }

    fn replace(&mut self, old: &NodeId, new: &NodeId) -> Result<(), Error> {
        let (parent, _) = self.position_in_parent(*old)?;
        if old == new {
            return Ok(());
        }
        self.check_insertion(parent, *new)?;
        self.detach(*new);
        let (parent, index) = self.position_in_parent(*old)?;
        self.detach(*old);
        self.link_child(parent, *new, Some(index))
    }
}
