//! Merging fenced and standalone matches.

use tracing::debug;

use crate::block::DiagramBlock;

/// Merge the two extractors' results into one ordered list.
///
/// Fenced blocks are always kept. A standalone block is dropped when it
/// shares any byte with an already accepted block, which covers the common
/// case of `@startuml ... @enduml` written inside a `plantuml` fence. The
/// result is sorted by start offset.
///
/// The output is pairwise non-overlapping as long as `fenced` is, which holds
/// for anything produced by [`FencedExtractor`](crate::FencedExtractor).
#[must_use]
pub fn resolve_overlaps(
    fenced: Vec<DiagramBlock>,
    standalone: Vec<DiagramBlock>,
) -> Vec<DiagramBlock> {
    let mut accepted = fenced;
    accepted.reserve(standalone.len());

    for block in standalone {
        if accepted.iter().any(|existing| existing.overlaps(&block)) {
            debug!(
                start = block.start(),
                end = block.end(),
                "Dropping standalone diagram overlapping an accepted block"
            );
            continue;
        }
        accepted.push(block);
    }

    accepted.sort_by_key(DiagramBlock::start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Origin;

    fn fenced(span: std::ops::Range<usize>) -> DiagramBlock {
        DiagramBlock::new(span, "fenced", Origin::Fenced)
    }

    fn standalone(span: std::ops::Range<usize>) -> DiagramBlock {
        DiagramBlock::new(span, "standalone", Origin::Standalone)
    }

    #[test]
    fn test_contained_standalone_dropped() {
        let resolved = resolve_overlaps(vec![fenced(10..50)], vec![standalone(22..46)]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].origin, Origin::Fenced);
    }

    #[test]
    fn test_partially_overlapping_standalone_dropped() {
        let resolved = resolve_overlaps(vec![fenced(10..50)], vec![standalone(40..80)]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].span, 10..50);
    }

    #[test]
    fn test_disjoint_blocks_kept_and_sorted() {
        let resolved = resolve_overlaps(
            vec![fenced(100..150), fenced(10..40)],
            vec![standalone(200..240), standalone(50..90)],
        );

        let starts: Vec<_> = resolved.iter().map(DiagramBlock::start).collect();
        assert_eq!(starts, vec![10, 50, 100, 200]);
        assert_eq!(resolved[1].origin, Origin::Standalone);
    }

    #[test]
    fn test_adjacent_blocks_kept() {
        let resolved = resolve_overlaps(vec![fenced(0..10)], vec![standalone(10..20)]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_only_standalone() {
        let resolved = resolve_overlaps(Vec::new(), vec![standalone(5..9), standalone(0..4)]);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].span, 0..4);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(resolve_overlaps(Vec::new(), Vec::new()).is_empty());
    }
}
