// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::{AttributedText, Merge};

/// A contiguous byte range together with the attributes resolved for it.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun<A> {
    /// The byte range in the underlying text.
    pub range: Range<usize>,
    /// Every span covering `range`, merged in application order.
    pub attributes: A,
}

/// An iterator over resolved attribute runs.
///
/// This is a sweep over the sorted span boundaries. Span ids are indices into the application
/// order, and the active set is kept sorted by id so that merging it front to back reproduces
/// "last writer wins".
#[derive(Clone, Debug)]
pub struct ResolvedRuns<'a, A: Debug + Merge> {
    attributed: &'a AttributedText<A>,
    boundaries: Vec<usize>,
    /// `(boundary index, span id)`, sorted by boundary.
    starts: Vec<(usize, usize)>,
    /// `(boundary index, span id)`, sorted by boundary.
    ends: Vec<(usize, usize)>,
    next_start: usize,
    next_end: usize,
    active: Vec<usize>,
    index: usize,
}

impl<'a, A: Debug + Merge> ResolvedRuns<'a, A> {
    pub(crate) fn new(attributed: &'a AttributedText<A>) -> Self {
        let span_count = attributed.spans_len();
        let mut boundaries = Vec::with_capacity(2 + span_count.saturating_mul(2));
        boundaries.push(0);
        boundaries.push(attributed.len());
        for range in attributed.span_ranges() {
            boundaries.push(range.start());
            boundaries.push(range.end());
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut starts = Vec::with_capacity(span_count);
        let mut ends = Vec::with_capacity(span_count);
        for (id, range) in attributed.span_ranges().enumerate() {
            if range.is_empty() {
                continue;
            }
            let start = boundaries
                .binary_search(&range.start())
                .expect("span start should be in boundary list");
            let end = boundaries
                .binary_search(&range.end())
                .expect("span end should be in boundary list");
            starts.push((start, id));
            ends.push((end, id));
        }
        // Stable sorts keep ids ascending within a boundary.
        starts.sort_by_key(|&(boundary, _)| boundary);
        ends.sort_by_key(|&(boundary, _)| boundary);

        Self {
            attributed,
            boundaries,
            starts,
            ends,
            next_start: 0,
            next_end: 0,
            active: Vec::with_capacity(span_count),
            index: 0,
        }
    }

    fn update_active_for_boundary(&mut self, boundary: usize) {
        while let Some(&(at, id)) = self.ends.get(self.next_end) {
            if at != boundary {
                break;
            }
            if let Ok(ix) = self.active.binary_search(&id) {
                self.active.remove(ix);
            }
            self.next_end += 1;
        }
        while let Some(&(at, id)) = self.starts.get(self.next_start) {
            if at != boundary {
                break;
            }
            if let Err(ix) = self.active.binary_search(&id) {
                self.active.insert(ix, id);
            }
            self.next_start += 1;
        }
    }

    fn resolve_active(&self) -> A {
        let mut resolved = A::default();
        for &id in &self.active {
            resolved.merge(self.attributed.span_attribute(id));
        }
        resolved
    }
}

impl<A: Debug + Merge> Iterator for ResolvedRuns<'_, A> {
    type Item = AttributeRun<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index + 1 >= self.boundaries.len() {
            return None;
        }
        self.update_active_for_boundary(self.index);
        let start = self.boundaries[self.index];
        let end = self.boundaries[self.index + 1];
        self.index += 1;
        debug_assert!(start < end, "boundaries are sorted + deduped");

        Some(AttributeRun {
            range: start..end,
            attributes: self.resolve_active(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.boundaries.len().saturating_sub(self.index + 1);
        (remaining, Some(remaining))
    }
}

impl<A: Debug + Merge> ExactSizeIterator for ResolvedRuns<'_, A> {}

/// An iterator over resolved attribute runs that joins adjacent runs with equal attributes.
#[derive(Clone, Debug)]
pub struct CoalescedRuns<'a, A: Debug + Merge + PartialEq> {
    inner: ResolvedRuns<'a, A>,
    pending: Option<AttributeRun<A>>,
}

impl<'a, A: Debug + Merge + PartialEq> CoalescedRuns<'a, A> {
    pub(crate) fn new(attributed: &'a AttributedText<A>) -> Self {
        Self {
            inner: ResolvedRuns::new(attributed),
            pending: None,
        }
    }
}

impl<A: Debug + Merge + PartialEq> Iterator for CoalescedRuns<'_, A> {
    type Item = AttributeRun<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next())?;
        for next_run in self.inner.by_ref() {
            if next_run.range.start == run.range.end && next_run.attributes == run.attributes {
                run.range.end = next_run.range.end;
                continue;
            }
            self.pending = Some(next_run);
            break;
        }
        Some(run)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributeRun, AttributedText, Merge};
    use alloc::vec::Vec;
    use core::ops::Range;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Decoration {
        underline: Option<bool>,
        size: Option<u8>,
    }

    impl Merge for Decoration {
        fn merge(&mut self, other: &Self) {
            if other.underline.is_some() {
                self.underline = other.underline;
            }
            if other.size.is_some() {
                self.size = other.size;
            }
        }
    }

    fn underline(value: bool) -> Decoration {
        Decoration {
            underline: Some(value),
            size: None,
        }
    }

    fn size(value: u8) -> Decoration {
        Decoration {
            underline: None,
            size: Some(value),
        }
    }

    /// Reference implementation: for every boundary segment, merge every overlapping span.
    fn reference_runs(text: &AttributedText<Decoration>) -> Vec<AttributeRun<Decoration>> {
        let mut boundaries = Vec::from([0, text.len()]);
        for (range, _) in text.spans() {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        boundaries
            .windows(2)
            .map(|pair| {
                let mut attributes = Decoration::default();
                for (range, attr) in text.spans() {
                    if range.start < pair[1] && range.end > pair[0] {
                        attributes.merge(attr);
                    }
                }
                AttributeRun {
                    range: pair[0]..pair[1],
                    attributes,
                }
            })
            .collect()
    }

    fn ranges(runs: &[AttributeRun<Decoration>]) -> Vec<Range<usize>> {
        runs.iter().map(|run| run.range.clone()).collect()
    }

    #[test]
    fn unstyled_text_is_one_run() {
        let text = AttributedText::<Decoration>::new("Hello");
        let runs: Vec<_> = text.resolved_runs().collect();
        assert_eq!(ranges(&runs), [0..5]);
        assert_eq!(runs[0].attributes, Decoration::default());
    }

    #[test]
    fn overlap_is_ordered() {
        let mut text = AttributedText::new("Hello world!");
        text.apply_span_bytes(0..12, underline(true)).unwrap();
        text.apply_span_bytes(6..11, underline(false)).unwrap();
        text.apply_span_bytes(3..8, size(2)).unwrap();

        let runs: Vec<_> = text.resolved_runs().collect();
        assert_eq!(ranges(&runs), [0..3, 3..6, 6..8, 8..11, 11..12]);
        assert_eq!(runs[2].attributes.underline, Some(false));
        assert_eq!(runs[2].attributes.size, Some(2));
        assert_eq!(runs[4].attributes.underline, Some(true));
        assert_eq!(runs, reference_runs(&text));
    }

    #[test]
    fn later_span_over_same_range_wins() {
        let mut text = AttributedText::new("Test");
        text.apply_span_bytes(0..4, underline(true)).unwrap();
        text.apply_span_bytes(0..4, underline(false)).unwrap();
        let runs: Vec<_> = text.resolved_runs().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].attributes.underline, Some(false));
    }

    #[test]
    fn zero_length_spans_split_but_do_not_style() {
        let mut text = AttributedText::new("abcd");
        text.apply_span_bytes(2..2, size(9)).unwrap();
        let runs: Vec<_> = text.resolved_runs().collect();
        assert_eq!(ranges(&runs), [0..2, 2..4]);
        assert!(runs.iter().all(|run| run.attributes.size.is_none()));

        let coalesced: Vec<_> = text.resolved_runs_coalesced().collect();
        assert_eq!(ranges(&coalesced), [0..4]);
    }

    #[test]
    fn coalesces_equal_neighbours() {
        let mut text = AttributedText::new("Hello world!");
        text.apply_span_bytes(0..5, size(1)).unwrap();
        text.apply_span_bytes(5..12, size(1)).unwrap();
        text.apply_span_bytes(11..12, underline(true)).unwrap();

        let runs: Vec<_> = text.resolved_runs_coalesced().collect();
        assert_eq!(ranges(&runs), [0..11, 11..12]);
        assert_eq!(runs[0].attributes, size(1));
    }

    #[test]
    fn matches_reference_on_nested_spans() {
        let mut text = AttributedText::new("Hello World!!!");
        text.apply_span_bytes(0..5, underline(true)).unwrap();
        text.apply_span_bytes(6..11, underline(false)).unwrap();
        text.apply_span_bytes(11..14, size(8)).unwrap();
        text.apply_span_bytes(0..14, size(3)).unwrap();
        assert_eq!(
            text.resolved_runs().collect::<Vec<_>>(),
            reference_runs(&text)
        );
    }
}
