//! Plain-text edits applied to the post textarea.
//!
//! Offsets are in UTF-16 code units, the unit browsers use for
//! `selectionStart`/`selectionEnd`.

/// Prefix every line of the selected text with `> `.
///
/// The quoted block is put on its own lines: the result is
/// `before + "\n" + quoted + "\n" + after`. Offsets past the end are clamped
/// and a reversed selection is reordered. An empty selection produces a single
/// empty quote line.
///
/// ```
/// use listboard_page::textarea::quote_selection;
///
/// assert_eq!(quote_selection("say hi there", 4, 6), "say \n> hi\n there");
/// ```
#[must_use]
pub fn quote_selection(text: &str, start: usize, end: usize) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let start = start.min(units.len());
    let end = end.min(units.len());
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let before = String::from_utf16_lossy(units.get(..start).unwrap_or(&[]));
    let segment = String::from_utf16_lossy(units.get(start..end).unwrap_or(&[]));
    let after = String::from_utf16_lossy(units.get(end..).unwrap_or(&[]));

    let quoted = segment
        .split('\n')
        .map(|row| format!("> {row}"))
        .collect::<Vec<_>>()
        .join("\n");

    [before, quoted, after].join("\n")
}

/// Add `line` as a new last line of `text`.
///
/// An empty `text` still counts as one (empty) line, so the result then starts
/// with a newline.
#[must_use]
pub fn append_line(text: &str, line: &str) -> String {
    format!("{text}\n{line}")
}
