//! Splitting a document into text and diagram segments.

use std::ops::Range;

use crate::block::{DiagramBlock, Segment};

/// Split `text` around resolved diagram blocks.
///
/// `blocks` must be sorted and non-overlapping, as returned by
/// [`resolve_overlaps`](crate::resolve_overlaps()).
///
/// Gaps between blocks become trimmed text segments; gaps that are blank are
/// dropped. With no blocks at all the whole document comes back as a single,
/// untrimmed text segment.
#[must_use]
pub fn segment(text: &str, blocks: Vec<DiagramBlock>) -> Vec<Segment> {
    if blocks.is_empty() {
        return vec![Segment::text(text, 0..text.len())];
    }

    let mut segments = Vec::with_capacity(blocks.len() * 2 + 1);
    let mut last_end = 0;

    for block in blocks {
        push_text(&mut segments, text, last_end..block.start());
        last_end = last_end.max(block.end());
        segments.push(Segment::diagram(block));
    }
    push_text(&mut segments, text, last_end..text.len());

    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str, span: Range<usize>) {
    if span.is_empty() {
        return;
    }
    let trimmed = text[span.clone()].trim();
    if !trimmed.is_empty() {
        segments.push(Segment::text(trimmed, span));
    }
}
