// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::sync::Arc;

use peniko::Color;

use crate::{Font, Image, LineStyle};

/// Canonical modifier tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modifier {
    /// The identity modifier.
    #[default]
    Empty,
    /// The object shown in place of a [`Content::Placeholder`](crate::Content::Placeholder).
    Attachment(Image),
    /// Fill behind the glyphs.
    BackgroundColor(Color),
    /// Vertical offset from the baseline, in points.
    BaselineOffset(f64),
    /// Font request.
    Font(Font),
    /// Glyph color.
    ForegroundColor(Color),
    /// Extra spacing after each character, in points.
    Kern(f64),
    /// Link target.
    Link(Arc<str>),
    /// Strikethrough line pattern.
    StrikethroughStyle(LineStyle),
    /// Underline color.
    UnderlineColor(Color),
    /// Underline line pattern.
    UnderlineStyle(LineStyle),
    /// `first`, then `second`. Where both set the same attribute, `second` wins.
    Combined(Box<Modifier>, Box<Modifier>),
}

impl Modifier {
    /// Applies `second` after `first`.
    ///
    /// [`Modifier::Empty`] operands are dropped, so combining with the identity returns the
    /// other operand unchanged.
    pub fn combined(first: Self, second: Self) -> Self {
        match (first, second) {
            (Self::Empty, other) | (other, Self::Empty) => other,
            (first, second) => Self::Combined(Box::new(first), Box::new(second)),
        }
    }

    /// Returns `true` for [`Modifier::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
