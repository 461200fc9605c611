// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::runs::{CoalescedRuns, ResolvedRuns};
use crate::{Error, Merge, TextRange};

/// A block of text with attributes applied to ranges within the text.
///
/// Spans are retained in application order. Overlapping spans are not merged on insertion;
/// resolution happens on demand through [`AttributedText::attributes_at`] and
/// [`AttributedText::resolved_runs`].
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText<A: Debug> {
    text: String,
    spans: Vec<(TextRange, A)>,
}

impl<A: Debug> Default for AttributedText<A> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<A: Debug> AttributedText<A> {
    /// Create an `AttributedText` with no spans applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Create an `AttributedText` with room for `capacity` spans.
    pub fn with_capacity(text: impl Into<String>, capacity: usize) -> Self {
        Self {
            text: text.into(),
            spans: Vec::with_capacity(capacity),
        }
    }

    /// Borrow the underlying text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Validates a byte `range` against this text and returns a [`TextRange`].
    #[inline]
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Applies `attribute` to a validated [`TextRange`].
    pub fn apply_span(&mut self, range: TextRange, attribute: A) {
        debug_assert!(
            range.end() <= self.text.len(),
            "TextRange {:?} was validated against a different text",
            range.as_range()
        );
        self.spans.push((range, attribute));
    }

    /// Applies `attribute` to the byte `range`, validating bounds and UTF-8 boundaries first.
    pub fn apply_span_bytes(&mut self, range: Range<usize>, attribute: A) -> Result<(), Error> {
        let range = self.range(range)?;
        self.apply_span(range, attribute);
        Ok(())
    }

    /// Iterate over all spans and the ranges they apply to, in application order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (Range<usize>, &A)> {
        self.spans.iter().map(|(range, attr)| (range.as_range(), attr))
    }

    /// Get an iterator over the span attributes covering byte `index`, in application order.
    ///
    /// This doesn't resolve conflicting attributes, it just reports everything.
    pub fn spans_at(&self, index: usize) -> impl Iterator<Item = &A> {
        self.spans.iter().filter_map(move |(range, attr)| {
            range.as_range().contains(&index).then_some(attr)
        })
    }

    /// Returns the number of spans applied to the text.
    #[inline]
    pub fn spans_len(&self) -> usize {
        self.spans.len()
    }

    /// Remove all applied spans, retaining allocated storage.
    pub fn clear_spans(&mut self) {
        self.spans.clear();
    }

    pub(crate) fn span_ranges(&self) -> impl Iterator<Item = TextRange> + '_ {
        self.spans.iter().map(|(range, _)| *range)
    }

    pub(crate) fn span_attribute(&self, index: usize) -> &A {
        &self.spans[index].1
    }
}

impl<A: Debug + Merge> AttributedText<A> {
    /// Returns the attributes in effect at byte `index`.
    ///
    /// Every span covering `index` is merged in application order, so later spans win.
    pub fn attributes_at(&self, index: usize) -> A {
        let mut resolved = A::default();
        for attr in self.spans_at(index) {
            resolved.merge(attr);
        }
        resolved
    }

    /// Returns an iterator over contiguous, non-overlapping runs with their resolved attributes.
    ///
    /// Runs cover the whole text. Zero-length spans never contribute attributes.
    #[inline]
    pub fn resolved_runs(&self) -> ResolvedRuns<'_, A> {
        ResolvedRuns::new(self)
    }

    /// Like [`resolved_runs`](Self::resolved_runs), but adjacent runs with equal attributes
    /// are joined.
    #[inline]
    pub fn resolved_runs_coalesced(&self) -> CoalescedRuns<'_, A>
    where
        A: PartialEq,
    {
        CoalescedRuns::new(self)
    }
}
