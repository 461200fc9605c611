// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Content, Modifier};

/// A modifier over a byte range of the reduced text.
#[derive(Clone, Debug, PartialEq)]
pub struct RangedModifier {
    /// Byte range in [`ModifierMap::text`].
    pub range: Range<usize>,
    /// The modifier applied over the range.
    pub modifier: Modifier,
}

/// Flattened text with the modifiers applied over it.
///
/// Ranges are recorded in post-order: a modifier's range comes after the ranges of everything
/// it wraps. Applying them in order therefore lets outer modifiers override inner ones.
///
/// ```
/// use rich_string::{Content, Modifier, ModifierMap};
///
/// let content = Content::modified(
///     Content::modified(Content::text("Test"), Modifier::BaselineOffset(8.0)),
///     Modifier::Kern(8.0),
/// );
/// let map = ModifierMap::reduce(&content);
/// assert_eq!(map.text(), "Test");
/// assert_eq!(map.ranged_modifiers()[0].modifier, Modifier::BaselineOffset(8.0));
/// assert_eq!(map.ranged_modifiers()[1].modifier, Modifier::Kern(8.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModifierMap {
    text: String,
    ranged_modifiers: Vec<RangedModifier>,
}

impl ModifierMap {
    /// Flattens `content` into text and ranged modifiers.
    pub fn reduce(content: &Content) -> Self {
        let mut map = Self::default();
        map.visit(content);
        tracing::trace!(
            len = map.text.len(),
            ranges = map.ranged_modifiers.len(),
            "reduced content"
        );
        map
    }

    fn visit(&mut self, content: &Content) {
        match content {
            Content::Empty => {}
            Content::Text(text) => self.text.push_str(text),
            Content::Placeholder => self.text.push(Content::OBJECT_REPLACEMENT_CHARACTER),
            Content::Modified(inner, modifier) => {
                let start = self.text.len();
                self.visit(inner);
                let end = self.text.len();
                self.ranged_modifiers.push(RangedModifier {
                    range: start..end,
                    modifier: modifier.clone(),
                });
            }
            Content::Sequence(children) => {
                for child in children {
                    self.visit(child);
                }
            }
        }
    }

    /// The flattened text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Modifiers with their byte ranges, in post-order.
    pub fn ranged_modifiers(&self) -> &[RangedModifier] {
        &self.ranged_modifiers
    }

    /// Returns the flattened text and the ranged modifiers.
    pub fn into_parts(self) -> (String, Vec<RangedModifier>) {
        (self.text, self.ranged_modifiers)
    }
}
