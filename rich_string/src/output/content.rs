// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use super::Modifier;

/// Canonical content tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Content {
    /// Contributes nothing.
    #[default]
    Empty,
    /// A literal run of text.
    Text(String),
    /// Stands in for an embedded object. Flattens to one
    /// [`OBJECT_REPLACEMENT_CHARACTER`](Self::OBJECT_REPLACEMENT_CHARACTER).
    Placeholder,
    /// `content` styled by `modifier`.
    ///
    /// Applying `b` after `a` to `c` nests as `Modified(Modified(c, a), b)`.
    Modified(Box<Content>, Modifier),
    /// Children concatenated in order.
    Sequence(Vec<Content>),
}

impl Content {
    /// The character a [`Content::Placeholder`] contributes to flattened text.
    pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

    /// Creates a text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Wraps `content` in `modifier`.
    pub fn modified(content: Self, modifier: Modifier) -> Self {
        Self::Modified(Box::new(content), modifier)
    }

    /// Returns the flattened text, ignoring all styling.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        self.write_plain_text(&mut text);
        text
    }

    fn write_plain_text(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(text) => out.push_str(text),
            Self::Placeholder => out.push(Self::OBJECT_REPLACEMENT_CHARACTER),
            Self::Modified(content, _) => content.write_plain_text(out),
            Self::Sequence(children) => {
                for child in children {
                    child.write_plain_text(out);
                }
            }
        }
    }
}
