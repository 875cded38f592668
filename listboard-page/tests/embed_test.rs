use listboard_page::{
    Document, Error, LinkEmbedder, MemoryDocument, NodeId, Options, initialize,
};

const EMBED_SUFFIX: &str = "?autoplay=1&autohide=1&border=0&wmode=opaque&enablejsapi=1";

fn page_with_links(hrefs: &[&str]) -> Result<(MemoryDocument, Vec<NodeId>), Error> {
    let mut doc = MemoryDocument::new();
    let article = doc.create_element("article");
    doc.append_child(doc.root(), article)?;
    let mut links = Vec::new();
    for href in hrefs {
        let paragraph = doc.create_element("p");
        let link = doc.create_link(href, "link");
        doc.append_child(article, paragraph)?;
        doc.append_child(paragraph, link)?;
        links.push(link);
    }
    Ok((doc, links))
}

fn thumbnail_src(doc: &MemoryDocument, placeholder: NodeId) -> Option<String> {
    let image = doc.children(placeholder).first().copied()?;
    doc.get_attribute(image, "src").map(ToString::to_string)
}

#[rstest::rstest]
#[case::trailing_params("https://www.youtube.com/watch?v=abc123&t=30", "abc123")]
#[case::no_trailing_params("https://www.youtube.com/watch?v=xyz789", "xyz789")]
#[case::bare_host("https://youtube.com/watch?v=rPQoq7ThGAU", "rPQoq7ThGAU")]
#[case::id_after_other_params("https://www.youtube.com/watch?list=PL1&v=q_-9&index=2", "q_-9")]
#[tracing_test::traced_test]
fn test_matching_link_gets_placeholder(
    #[case] href: &str,
    #[case] expected_id: &str,
) -> Result<(), Error> {
    let (mut doc, links) = page_with_links(&[href])?;
    let placeholders = LinkEmbedder::default().scan(&mut doc, &links);

    pretty_assertions::assert_eq!(placeholders.len(), 1);
    let placeholder = placeholders.first().ok_or(Error::DetachedNode)?;
    pretty_assertions::assert_eq!(placeholder.video_id().as_str(), expected_id);
    pretty_assertions::assert_eq!(
        thumbnail_src(&doc, *placeholder.node()),
        Some(format!(
            "https://img.youtube.com/vi/{expected_id}/hqdefault.jpg"
        ))
    );
    pretty_assertions::assert_eq!(
        doc.attribute(placeholder.node(), "data-video").as_deref(),
        Some(expected_id)
    );
    Ok(())
}

#[rstest::rstest]
#[case::other_site("https://example.com/page")]
#[case::other_site_watch_path("https://example.com/watch?v=abc123")]
#[case::embed_path("https://www.youtube.com/embed/abc123")]
#[case::no_id("https://www.youtube.com/watch?t=30")]
#[case::relative("/watch?v=abc123")]
#[case::mail("mailto:someone@example.com")]
fn test_non_matching_link_is_untouched(#[case] href: &str) -> Result<(), Error> {
    let (mut doc, links) = page_with_links(&[href])?;
    let before = doc.to_html();

    let placeholders = LinkEmbedder::default().scan(&mut doc, &links);

    assert!(placeholders.is_empty());
    pretty_assertions::assert_eq!(doc.to_html(), before);
    Ok(())
}

#[test]
#[tracing_test::traced_test]
fn test_scan_keeps_source_order() -> Result<(), Error> {
    let (mut doc, links) = page_with_links(&[
        "https://www.youtube.com/watch?v=first",
        "https://example.com/page",
        "https://www.youtube.com/watch?v=second&t=1",
        "https://example.com/other",
        "https://m.youtube.com/watch?v=third",
    ])?;

    let placeholders = LinkEmbedder::default().scan(&mut doc, &links);

    let ids: Vec<&str> = placeholders.iter().map(|p| p.video_id().as_str()).collect();
    pretty_assertions::assert_eq!(ids, vec!["first", "second", "third"]);

    // Placeholders appear in document order too.
    let in_document: Vec<NodeId> = doc.elements_with_class("youtube");
    let returned: Vec<NodeId> = placeholders.iter().map(|p| *p.node()).collect();
    pretty_assertions::assert_eq!(in_document, returned);

    // Each placeholder sits right before its link.
    for (placeholder, link) in placeholders.iter().zip([links[0], links[2], links[4]]) {
        let parent = doc.parent(link).ok_or(Error::DetachedNode)?;
        pretty_assertions::assert_eq!(doc.children(parent), &[*placeholder.node(), link]);
    }
    Ok(())
}

#[test]
fn test_scan_empty_collection() {
    let mut doc = MemoryDocument::new();
    let placeholders = LinkEmbedder::default().scan(&mut doc, &[]);
    assert!(placeholders.is_empty());
    pretty_assertions::assert_eq!(doc.to_html(), "<body></body>");
}

#[test]
fn test_scan_skips_link_without_url() -> Result<(), Error> {
    let (mut doc, mut links) = page_with_links(&["https://www.youtube.com/watch?v=after"])?;
    let paragraph = doc.create_element("p");
    let anchor = doc.create_element("a");
    doc.set_text(anchor, "no target");
    doc.append_child(doc.root(), paragraph)?;
    doc.append_child(paragraph, anchor)?;
    links.insert(0, anchor);

    let placeholders = LinkEmbedder::default().scan(&mut doc, &links);

    let ids: Vec<&str> = placeholders.iter().map(|p| p.video_id().as_str()).collect();
    pretty_assertions::assert_eq!(ids, vec!["after"]);
    pretty_assertions::assert_eq!(doc.children(paragraph), &[anchor]);
    pretty_assertions::assert_eq!(doc.get_attribute(anchor, "href"), None);
    pretty_assertions::assert_eq!(doc.link_url(&anchor), None);
    Ok(())
}

#[test]
#[tracing_test::traced_test]
fn test_activate_swaps_placeholder_for_frame() -> Result<(), Error> {
    let (mut doc, links) = page_with_links(&["https://www.youtube.com/watch?v=abc123&t=30"])?;
    let embedder = LinkEmbedder::default();
    let placeholders = embedder.scan(&mut doc, &links);
    let placeholder = placeholders.first().ok_or(Error::DetachedNode)?;
    let parent = doc.parent(*placeholder.node()).ok_or(Error::DetachedNode)?;

    let frame = embedder
        .activate(&mut doc, placeholder)?
        .ok_or(Error::DetachedNode)?;

    let expected_src = format!("https://www.youtube.com/embed/abc123{EMBED_SUFFIX}");
    pretty_assertions::assert_eq!(frame.src(), expected_src);
    pretty_assertions::assert_eq!(doc.tag(*frame.node()), Some("iframe"));
    pretty_assertions::assert_eq!(doc.get_attribute(*frame.node(), "src"), Some(expected_src.as_str()));
    pretty_assertions::assert_eq!(doc.get_attribute(*frame.node(), "class"), Some("video_frame"));
    pretty_assertions::assert_eq!(doc.children(parent), &[*frame.node(), links[0]]);
    assert!(!doc.is_attached(placeholder.node()));
    Ok(())
}

#[test]
fn test_second_activation_has_no_effect() -> Result<(), Error> {
    let (mut doc, links) = page_with_links(&["https://www.youtube.com/watch?v=abc123"])?;
    let embedder = LinkEmbedder::default();
    let placeholders = embedder.scan(&mut doc, &links);
    let placeholder = placeholders.first().ok_or(Error::DetachedNode)?;

    assert!(embedder.activate(&mut doc, placeholder)?.is_some());
    let snapshot = doc.to_html();
    let nodes = doc.descendants(doc.root()).len();

    assert!(embedder.activate(&mut doc, placeholder)?.is_none());
    pretty_assertions::assert_eq!(doc.to_html(), snapshot);
    pretty_assertions::assert_eq!(doc.descendants(doc.root()).len(), nodes);
    Ok(())
}

#[test]
fn test_activations_are_independent() -> Result<(), Error> {
    let (mut doc, links) = page_with_links(&[
        "https://www.youtube.com/watch?v=one",
        "https://www.youtube.com/watch?v=two",
    ])?;
    let embedder = LinkEmbedder::default();
    let placeholders = embedder.scan(&mut doc, &links);

    let second = placeholders.get(1).ok_or(Error::DetachedNode)?;
    let frame = embedder
        .activate(&mut doc, second)?
        .ok_or(Error::DetachedNode)?;
    assert!(frame.src().contains("/embed/two?"));

    let first = placeholders.first().ok_or(Error::DetachedNode)?;
    assert!(doc.is_attached(first.node()));
    let frame = embedder
        .activate(&mut doc, first)?
        .ok_or(Error::DetachedNode)?;
    assert!(frame.src().contains("/embed/one?"));
    Ok(())
}

#[test]
#[tracing_test::traced_test]
fn test_initialize_marked_then_links() -> Result<(), Error> {
    let (mut doc, _) = page_with_links(&["https://www.youtube.com/watch?v=linked"])?;
    let marked = doc.create_element("div");
    doc.set_attribute(marked, "class", "youtube");
    doc.set_attribute(marked, "data-video", "marked");
    doc.append_child(doc.root(), marked)?;

    let embedder = LinkEmbedder::default();
    let placeholders = initialize(&mut doc, &embedder);

    let ids: Vec<&str> = placeholders.iter().map(|p| p.video_id().as_str()).collect();
    pretty_assertions::assert_eq!(ids, vec!["marked", "linked"]);
    pretty_assertions::assert_eq!(placeholders.first().map(|p| *p.node()), Some(marked));

    // The marked element is replaced in place, the same way.
    let frame = embedder
        .activate(&mut doc, placeholders.first().ok_or(Error::DetachedNode)?)?
        .ok_or(Error::DetachedNode)?;
    pretty_assertions::assert_eq!(doc.children(doc.root()).last().copied(), Some(*frame.node()));
    Ok(())
}

#[test]
fn test_custom_hosts_and_classes() -> Result<(), Error> {
    let options = Options::builder()
        .watch_host("video-service.com")
        .thumbnail_host("thumbs.video-service.com")
        .embed_host("player.video-service.com")
        .placeholder_class("clip")
        .frame_class("clip-frame")
        .build();
    let (mut doc, links) = page_with_links(&[
        "https://video-service.com/watch?v=abc123&t=30",
        "https://www.youtube.com/watch?v=ignored",
    ])?;
    let embedder = LinkEmbedder::new(options);

    let placeholders = embedder.scan(&mut doc, &links);
    pretty_assertions::assert_eq!(placeholders.len(), 1);
    let placeholder = placeholders.first().ok_or(Error::DetachedNode)?;
    assert!(doc.has_class(*placeholder.node(), "clip"));
    pretty_assertions::assert_eq!(
        thumbnail_src(&doc, *placeholder.node()).as_deref(),
        Some("https://thumbs.video-service.com/vi/abc123/hqdefault.jpg")
    );

    let frame = embedder
        .activate(&mut doc, placeholder)?
        .ok_or(Error::DetachedNode)?;
    pretty_assertions::assert_eq!(
        frame.src(),
        format!("https://player.video-service.com/embed/abc123{EMBED_SUFFIX}")
    );
    pretty_assertions::assert_eq!(doc.get_attribute(*frame.node(), "class"), Some("clip-frame"));
    Ok(())
}

#[test]
fn test_relative_links_resolved_by_document() -> Result<(), Error> {
    let mut doc = MemoryDocument::with_base("https://www.youtube.com/results?q=rust")?;
    let link = doc.create_link("/watch?v=resolved", "video");
    doc.append_child(doc.root(), link)?;

    let links = doc.links();
    let placeholders = LinkEmbedder::default().scan(&mut doc, &links);
    let ids: Vec<&str> = placeholders.iter().map(|p| p.video_id().as_str()).collect();
    pretty_assertions::assert_eq!(ids, vec!["resolved"]);
    Ok(())
}
